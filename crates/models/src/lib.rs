//! SeaORM entities and connection helpers for the catalog store.

pub mod errors;
pub mod db;
pub mod product;
pub mod user;
