use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct GrahakaCreateDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct GrahakaDoc {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub items: Vec<PatraDoc>,
}

#[derive(ToSchema)]
pub struct PatraCreateDoc {
    /// http(s) URL
    pub image: String,
    /// optional http(s) URL
    pub document: Option<String>,
    pub tags: String,
}

#[derive(ToSchema)]
pub struct PatraDoc {
    pub id: i32,
    pub image: String,
    pub document: Option<String>,
    pub tags: String,
    pub owner_id: i32,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::token,
        crate::routes::grahaka::create,
        crate::routes::grahaka::list,
        crate::routes::grahaka::get,
        crate::routes::patra::create_for_grahaka,
        crate::routes::patra::list,
        crate::routes::patra::get,
    ),
    components(
        schemas(
            HealthResponse,
            GrahakaCreateDoc,
            GrahakaDoc,
            PatraCreateDoc,
            PatraDoc,
            LoginRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "grahaka"),
        (name = "patra")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
