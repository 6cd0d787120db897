use serde::{Deserialize, Serialize};

/// Login input; `username` is the customer's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Customer as seen by auth workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrahaka {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// Stored credentials (hashed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub grahaka: AuthGrahaka,
    pub password_hashed: String,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub grahaka: AuthGrahaka,
    pub token: String,
    pub expires_in_secs: i64,
}
