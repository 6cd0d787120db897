use std::sync::Arc;

use chrono::Duration;
use tracing::{info, debug, instrument};

use super::domain::{AuthGrahaka, AuthSession, LoginInput};
use super::errors::AuthError;
use super::password::verify_password;
use super::repository::AuthRepository;
use super::token::{self, Claims};

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Check an email/password pair. `None` when the email is unknown, the
    /// customer is inactive, or the password does not match.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// repo.insert("u@e.com", "Passw0rd", true).unwrap();
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), access_token_expire_minutes: 20 });
    /// let found = tokio_test::block_on(svc.authenticate("u@e.com", "Passw0rd")).unwrap();
    /// assert_eq!(found.unwrap().email, "u@e.com");
    /// ```
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<AuthGrahaka>, AuthError> {
        let Some(creds) = self.repo.find_credentials_by_email(email).await? else {
            debug!("unknown email");
            return Ok(None);
        };
        if !creds.grahaka.is_active {
            debug!("inactive grahaka");
            return Ok(None);
        }
        if !verify_password(password, &creds.password_hashed) {
            return Ok(None);
        }
        Ok(Some(creds.grahaka))
    }

    /// Authenticate and issue an access token.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let grahaka = self.authenticate(&input.username, &input.password)
            .await?
            .ok_or(AuthError::Unauthorized)?;
        let ttl = Duration::minutes(self.cfg.access_token_expire_minutes);
        let token = token::create_access_token(&self.cfg.jwt_secret, &grahaka.email, Some(ttl))?;
        info!(grahaka_id = grahaka.id, "token_issued");
        Ok(AuthSession { grahaka, token, expires_in_secs: ttl.num_seconds() })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        token::decode_access_token(&self.cfg.jwt_secret, token)
    }
}
