//! Product catalog: repository abstraction and application service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ProductService;
