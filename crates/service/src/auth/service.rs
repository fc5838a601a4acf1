use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::entity::{EntityError, User};
use super::domain::{AccessToken, CreateUserInput, GetJwtInput};
use super::errors::AuthError;
use super::repository::UserRepository;
use super::token::TokenIssuer;

/// Auth business service independent of web framework
pub struct AuthService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    tokens: TokenIssuer,
    expires_in_hours: i64,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, tokens: TokenIssuer, expires_in_hours: i64) -> Self {
        Self { repo, tokens, expires_in_hours }
    }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, TokenIssuer, repository::mock::MockUserRepository};
    /// use service::auth::domain::CreateUserInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// let svc = AuthService::new(repo, TokenIssuer::new("secret").unwrap(), 1);
    /// let input = CreateUserInput { name: "Test".into(), email: "user@example.com".into(), password: "Secret123".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: CreateUserInput) -> Result<User, AuthError> {
        let user = User::new(&input.name, &input.email, &input.password)?;
        if let Some(existing) = self.repo.find_by_email(&user.email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }
        self.repo.create_user(&user).await?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Check credentials and issue a bearer token valid for the configured number of hours.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, TokenIssuer, repository::mock::MockUserRepository};
    /// use service::auth::domain::{CreateUserInput, GetJwtInput};
    /// use std::sync::Arc;
    /// let tokens = TokenIssuer::new("secret").unwrap();
    /// let svc = AuthService::new(Arc::new(MockUserRepository::default()), tokens.clone(), 1);
    /// let _ = tokio_test::block_on(svc.register(CreateUserInput { name: "N".into(), email: "u@e.com".into(), password: "Passw0rd".into() }));
    /// let token = tokio_test::block_on(svc.generate_token(GetJwtInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert!(tokens.verify_token(&token.access_token).is_ok());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn generate_token(&self, input: GetJwtInput) -> Result<AccessToken, AuthError> {
        if input.email.trim().is_empty() {
            return Err(EntityError::RequiredEmail.into());
        }
        if input.password.is_empty() {
            return Err(EntityError::RequiredPassword.into());
        }

        let user = match self.repo.find_by_email(&input.email).await? {
            Some(user) => user,
            None => {
                warn!("token_denied");
                return Err(AuthError::Unauthorized);
            }
        };
        if !user.validate_password(&input.password) {
            warn!(user_id = %user.id, "token_denied");
            return Err(AuthError::Unauthorized);
        }

        let access_token = self.tokens.issue_token(user.id, self.expires_in_hours)?;
        info!(user_id = %user.id, ttl_hours = self.expires_in_hours, "token_issued");
        Ok(AccessToken { access_token })
    }
}
