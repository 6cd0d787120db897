use axum::{extract::{Path, Query, State}, Json};
use serde::Deserialize;
use service::grahaka_service::{self, GrahakaView, NewGrahaka};
use service::pagination::{Page, DEFAULT_LIMIT};
use tracing::info;

use crate::{errors::JsonApiError, routes::auth::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    #[serde(default)]
    pub skip: Option<u64>,
    /// Page size (default 99)
    #[serde(default)]
    pub limit: Option<u64>,
}

impl From<ListQuery> for Page {
    fn from(q: ListQuery) -> Self {
        Page { skip: q.skip.unwrap_or(0), limit: q.limit.unwrap_or(DEFAULT_LIMIT) }
    }
}

#[utoipa::path(
    post, path = "/grahaka/", tag = "grahaka",
    request_body = crate::openapi::GrahakaCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::GrahakaDoc),
        (status = 400, description = "Conflict: email already registered"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<NewGrahaka>) -> Result<Json<GrahakaView>, JsonApiError> {
    let created = grahaka_service::create_grahaka(&state.db, input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/grahaka/", tag = "grahaka",
    params(ListQuery),
    responses((status = 200, description = "List OK", body = [crate::openapi::GrahakaDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<GrahakaView>>, JsonApiError> {
    let page = Page::from(q);
    let rows = grahaka_service::list_grahaka(&state.db, page).await?;
    info!(skip = page.skip, limit = page.limit, count = rows.len(), "list grahaka");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/grahaka/{id}", tag = "grahaka",
    params(("id" = i32, Path, description = "Grahaka ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GrahakaDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<GrahakaView>, JsonApiError> {
    Ok(Json(grahaka_service::get_grahaka(&state.db, id).await?))
}
