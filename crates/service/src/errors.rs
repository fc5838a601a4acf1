use models::errors::ModelError;
use thiserror::Error;

use crate::entity::EntityError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] EntityError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    /// Storage-level validation or uniqueness failures; plain storage failures become `Db`.
    #[error("model error: {0}")]
    Model(ModelError),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Db(msg) => ServiceError::Db(msg),
            other => ServiceError::Model(other),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}
