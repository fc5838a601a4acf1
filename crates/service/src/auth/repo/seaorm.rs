use chrono::Utc;
use models::errors::ModelError;
use sea_orm::DatabaseConnection;

use crate::auth::errors::AuthError;
use crate::auth::repository::UserRepository;
use crate::entity::User;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

fn to_model(u: &User) -> models::user::Model {
    models::user::Model {
        id: u.id,
        name: u.name.clone(),
        email: u.email.clone(),
        password_hash: u.password_hash.clone(),
        created_at: u.created_at.into(),
    }
}

fn from_model(m: models::user::Model) -> User {
    User { id: m.id, name: m.name, email: m.email, password_hash: m.password_hash, created_at: m.created_at.with_timezone(&Utc) }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), AuthError> {
        models::user::insert(&self.db, to_model(user)).await.map_err(|e| match e {
            ModelError::Conflict(_) => AuthError::Conflict,
            other => AuthError::Repository(other.to_string()),
        })?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let res = models::user::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(from_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn stores_and_finds_by_email() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository { db: get_db().await? };
        let user = User::new("John Doe", "john@test.com", "123456")?;
        repo.create_user(&user).await?;

        let found = repo.find_by_email("john@test.com").await?.expect("stored user");
        assert_eq!(found.id, user.id);
        assert_eq!(found.password_hash, user.password_hash);
        assert!(found.validate_password("123456"));
        assert!(repo.find_by_email("ghost@test.com").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository { db: get_db().await? };
        repo.create_user(&User::new("A", "same@test.com", "pw")?).await?;
        let err = repo.create_user(&User::new("B", "same@test.com", "pw")?).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict), "got {err:?}");
        Ok(())
    }
}
