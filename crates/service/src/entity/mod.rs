//! Domain entities and the rules every instance must satisfy.
//!
//! Constructors always return validated values; `validate` re-checks values
//! built by hand or decoded from storage or the network.

pub mod errors;
pub mod id;
pub mod product;
pub mod user;

pub use errors::{EntityError, ErrorKind};
pub use id::Id;
pub use product::Product;
pub use user::User;
