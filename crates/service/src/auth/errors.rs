use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    Unauthorized,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}
