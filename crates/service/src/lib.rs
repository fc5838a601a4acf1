//! Service layer for the product catalog.
//! - Validating entity constructors (`entity`).
//! - Credential checks and token issuance (`auth`).
//! - Product use cases over a pluggable repository (`product`).

pub mod errors;
pub mod entity;
pub mod auth;
pub mod product;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
