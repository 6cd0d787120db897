use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use tracing::{error, warn};

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        } else {
            warn!(status = %self.status, detail = ?self.detail, "request rejected");
        }
        (self.status, Json(serde_json::json!({"error": self.title, "detail": self.detail}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(msg)),
            // duplicate keys answer 400, as the create route always has
            ServiceError::Conflict(msg) => Self::new(StatusCode::BAD_REQUEST, "Conflict", Some(msg)),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Hash(_) | ServiceError::Db(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string())),
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized | AuthError::TokenError(_) => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string())),
            AuthError::HashError(_) | AuthError::Repository(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string())),
        }
    }
}
