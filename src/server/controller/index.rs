use axum::{response::IntoResponse, Json};

use crate::model::api::WelcomeDto;

/// Tag for grouping meta endpoints in OpenAPI documentation
pub static META_TAG: &str = "meta";

/// API welcome page.
///
/// Returns a welcome message and the list of available endpoints. Interactive
/// documentation is served separately under `/docs`.
#[utoipa::path(
    get,
    path = "/",
    tag = META_TAG,
    responses(
        (status = 200, description = "Welcome message and endpoint list", body = WelcomeDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(WelcomeDto {
        message: "Welcome to the Superheroes API!".to_string(),
        available_endpoints: vec![
            "GET /heroes".to_string(),
            "GET /heroes/{id}".to_string(),
            "GET /powers".to_string(),
            "GET /powers/{id}".to_string(),
            "PATCH /powers/{id}".to_string(),
            "POST /hero_powers".to_string(),
        ],
    })
}
