use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthGrahaka, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError> {
        let res = models::grahaka::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|g| Credentials {
            grahaka: AuthGrahaka { id: g.id, email: g.email, is_active: g.is_active },
            password_hashed: g.password_hashed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn reads_credentials_from_grahaka_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let hash = hash_password("pw-123456")?;
        let g = models::grahaka::create(&db, "a@x.com", &hash).await?;

        let repo = SeaOrmAuthRepository { db };
        let creds = repo.find_credentials_by_email("a@x.com").await?.expect("credentials");
        assert_eq!(creds.grahaka.id, g.id);
        assert_eq!(creds.password_hashed, hash);
        assert!(repo.find_credentials_by_email("b@x.com").await?.is_none());
        Ok(())
    }
}
