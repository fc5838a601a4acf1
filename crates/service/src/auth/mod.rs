//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, password checks and token issuance live here; the HTTP layer only maps results.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod token;
pub mod repo;

pub use service::AuthService;
pub use token::{Claims, TokenIssuer};
