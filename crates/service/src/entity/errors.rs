use thiserror::Error;

/// Broad class of an [`EntityError`], used for boundary mapping and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequiredField,
    InvalidFormat,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("id is required")]
    RequiredId,
    #[error("id is invalid")]
    InvalidId,
    #[error("name is required")]
    RequiredName,
    #[error("price is required")]
    RequiredPrice,
    #[error("price is invalid")]
    InvalidPrice,
    #[error("email is required")]
    RequiredEmail,
    #[error("email is invalid")]
    InvalidEmail,
    #[error("password is required")]
    RequiredPassword,
    #[error("password hashing failed: {0}")]
    HashFailure(String),
}

impl EntityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EntityError::RequiredId
            | EntityError::RequiredName
            | EntityError::RequiredPrice
            | EntityError::RequiredEmail
            | EntityError::RequiredPassword => ErrorKind::RequiredField,
            EntityError::InvalidId | EntityError::InvalidPrice | EntityError::InvalidEmail => ErrorKind::InvalidFormat,
            EntityError::HashFailure(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(EntityError::RequiredPrice.kind(), ErrorKind::RequiredField);
        assert_eq!(EntityError::InvalidPrice.kind(), ErrorKind::InvalidFormat);
        assert_eq!(EntityError::InvalidId.kind(), ErrorKind::InvalidFormat);
        assert_eq!(EntityError::HashFailure("x".into()).kind(), ErrorKind::Internal);
    }
}
