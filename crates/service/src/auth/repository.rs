use async_trait::async_trait;

use super::domain::Credentials;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::auth::domain::AuthGrahaka;
    use crate::auth::password::hash_password;

    #[derive(Default)]
    pub struct MockAuthRepository {
        creds: Mutex<HashMap<String, Credentials>>, // key: email
    }

    impl MockAuthRepository {
        /// Store a customer with a freshly hashed password; returns its id.
        pub fn insert(&self, email: &str, password: &str, is_active: bool) -> Result<i32, AuthError> {
            let password_hashed = hash_password(password)?;
            let mut creds = self.creds.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            let id = creds.len() as i32 + 1;
            let grahaka = AuthGrahaka { id, email: email.to_string(), is_active };
            creds.insert(email.to_string(), Credentials { grahaka, password_hashed });
            Ok(id)
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError> {
            let creds = self.creds.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            Ok(creds.get(email).cloned())
        }
    }
}
