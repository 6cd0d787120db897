use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;

pub mod auth;
pub mod grahaka;
pub mod patra;

use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: public routes plus the customer and
/// document resources, which sit behind the token check only when
/// `auth.require_token` is set.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/token", post(auth::token))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    let resources = Router::new()
        .route("/grahaka/", post(grahaka::create).get(grahaka::list))
        .route("/grahaka/:id", get(grahaka::get))
        .route("/grahaka/:id/patra/", post(patra::create_for_grahaka))
        .route("/patra/", get(patra::list))
        .route("/patra/:id", get(patra::get));

    let resources = if state.auth.require_token {
        resources.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ))
    } else {
        resources
    };

    public
        .merge(resources)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
