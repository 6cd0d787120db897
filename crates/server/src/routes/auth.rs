use std::sync::Arc;

use axum::{extract::{Request, State}, http::{header, StatusCode}, middleware::Next, response::Response, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use service::auth::{domain::LoginInput, repo::seaorm::SeaOrmAuthRepository, service::{AuthConfig, AuthService}};

use crate::errors::JsonApiError;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub require_token: bool,
}

impl From<&configs::AuthConfig> for ServerAuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self {
            jwt_secret: c.jwt_secret.clone(),
            access_token_expire_minutes: c.access_token_expire_minutes,
            require_token: c.require_token,
        }
    }
}

/// Per-process state handed to every handler. `db` is the pool each request
/// checks its session out of.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

impl ServerState {
    fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository { db: self.db.clone() });
        AuthService::new(repo, AuthConfig {
            jwt_secret: self.auth.jwt_secret.clone(),
            access_token_expire_minutes: self.auth.access_token_expire_minutes,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TokenOutput {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[utoipa::path(
    post, path = "/token", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses((status = 200, description = "Token issued"), (status = 401, description = "Unauthorized"))
)]
pub async fn token(State(state): State<ServerState>, jar: CookieJar, Json(input): Json<LoginInput>) -> Result<(CookieJar, Json<TokenOutput>), JsonApiError> {
    let session = state.auth_service().login(input).await?;

    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    Ok((jar, Json(TokenOutput { access_token: session.token, token_type: "bearer", expires_in: session.expires_in_secs })))
}

/// Validate `Authorization: Bearer <token>`, falling back to the `auth_token`
/// cookie. Missing token is 400, invalid or expired is 401. Verified claims
/// are stored in the request extensions.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();

    let token = match req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(h) => match h.strip_prefix("Bearer ") {
            Some(t) => t.trim().to_string(),
            None => {
                tracing::warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some("expected a Bearer token".into())));
            }
        },
        None => match CookieJar::from_headers(req.headers()).get(AUTH_COOKIE) {
            Some(c) if !c.value().is_empty() => c.value().to_string(),
            _ => {
                tracing::warn!(path = %path, "missing Authorization header and auth_token cookie");
                return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Missing Token", None));
            }
        },
    };

    let claims = state.auth_service().verify(&token).map_err(|e| {
        tracing::error!(path = %path, err = %e, "token validation failed");
        JsonApiError::from(e)
    })?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
