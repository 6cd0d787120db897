//! HS256 access tokens carrying the customer's email as `sub`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;

pub const DEFAULT_EXPIRES_MINUTES: i64 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

/// Sign a token for `subject`, valid for `expires` (20 minutes when `None`).
pub fn create_access_token(secret: &str, subject: &str, expires: Option<Duration>) -> Result<String, AuthError> {
    let now = Utc::now();
    let expiry = now + expires.unwrap_or_else(|| Duration::minutes(DEFAULT_EXPIRES_MINUTES));
    let claims = Claims {
        sub: subject.to_string(),
        exp: expiry.timestamp().max(0) as usize,
        iat: now.timestamp().max(0) as usize,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Verify signature and expiry.
pub fn decode_access_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_subject_and_default_expiry() {
        let tok = create_access_token("secret", "a@x.com", None).unwrap();
        let claims = decode_access_token("secret", &tok).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 20 * 60);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let tok = create_access_token("secret", "a@x.com", None).unwrap();
        assert!(decode_access_token("other", &tok).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let tok = create_access_token("secret", "a@x.com", Some(Duration::minutes(-10))).unwrap();
        assert!(matches!(decode_access_token("secret", &tok), Err(AuthError::TokenError(_))));
    }
}
