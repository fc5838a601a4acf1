use std::fmt;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;

use super::id::{self, Id};
use super::EntityError;

/// A registered account. Only the Argon2 PHC string of the password is kept.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Validate the fields and hash `password` with a random salt.
    ///
    /// # Examples
    /// ```
    /// use service::entity::User;
    /// let u = User::new("Ada", "ada@example.com", "s3cret").unwrap();
    /// assert!(u.validate_password("s3cret"));
    /// assert!(!u.validate_password("s3cretx"));
    /// ```
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, EntityError> {
        if name.trim().is_empty() {
            return Err(EntityError::RequiredName);
        }
        if email.trim().is_empty() {
            return Err(EntityError::RequiredEmail);
        }
        if !email.contains('@') {
            return Err(EntityError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(EntityError::RequiredPassword);
        }
        Ok(Self {
            id: id::new_id(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        })
    }

    /// Compare `candidate` against the stored hash. A corrupt hash never matches.
    pub fn validate_password(&self, candidate: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default().verify_password(candidate.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

fn hash_password(password: &str) -> Result<String, EntityError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| EntityError::HashFailure(e.to_string()))?
        .to_string();
    Ok(hash)
}
