use axum::{extract::{Path, State}, Json};
use models::patra::Model as Patra;
use service::patra_service::{self, NewPatra};
use tracing::info;

use crate::{errors::JsonApiError, routes::auth::ServerState};

#[utoipa::path(
    post, path = "/grahaka/{id}/patra/", tag = "patra",
    params(("id" = i32, Path, description = "Owning grahaka ID")),
    request_body = crate::openapi::PatraCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::PatraDoc),
        (status = 404, description = "Owner Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create_for_grahaka(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<NewPatra>,
) -> Result<Json<Patra>, JsonApiError> {
    Ok(Json(patra_service::create_patra_for_grahaka(&state.db, id, input).await?))
}

#[utoipa::path(
    get, path = "/patra/", tag = "patra",
    responses((status = 200, description = "List OK", body = [crate::openapi::PatraDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Patra>>, JsonApiError> {
    let rows = patra_service::list_patra(&state.db).await?;
    info!(count = rows.len(), "list patra");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/patra/{id}", tag = "patra",
    params(("id" = i32, Path, description = "Patra ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PatraDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Patra>, JsonApiError> {
    Ok(Json(patra_service::get_patra(&state.db, id).await?))
}
