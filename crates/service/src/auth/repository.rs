use async_trait::async_trait;

use crate::entity::User;
use super::errors::AuthError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// A taken email is `AuthError::Conflict`.
    async fn create_user(&self, user: &User) -> Result<(), AuthError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, User>>, // key: email
    }

    impl MockUserRepository {
        fn store(&self) -> Result<MutexGuard<'_, HashMap<String, User>>, AuthError> {
            self.users.lock().map_err(|_| AuthError::Repository("mock store poisoned".into()))
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, user: &User) -> Result<(), AuthError> {
            let mut users = self.store()?;
            if users.contains_key(&user.email) {
                return Err(AuthError::Conflict);
            }
            users.insert(user.email.clone(), user.clone());
            Ok(())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
            Ok(self.store()?.get(email).cloned())
        }
    }
}
