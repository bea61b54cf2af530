use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorsDto,
        hero_power::{CreateHeroPowerDto, HeroPowerDto},
    },
    server::{
        error::AppError,
        model::hero_power::CreateHeroPowerParam,
        service::hero_power::HeroPowerService,
        state::AppState,
    },
};

/// Tag for grouping hero power endpoints in OpenAPI documentation
pub static HERO_POWER_TAG: &str = "hero_power";

/// Create a hero-power association.
///
/// Validates the strength rating against the allowed set and confirms both
/// referenced rows exist before persisting; on any failure nothing is written
/// and the messages are returned in the `errors` array. On success an email
/// notification is dispatched best-effort after the commit; its outcome never
/// affects the response.
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `payload` - Creation data (strength, hero_id, power_id)
///
/// # Returns
/// - `201 Created` - The association with nested hero and power projections
/// - `400 Bad Request` - Invalid strength or dangling hero/power reference
#[utoipa::path(
    post,
    path = "/hero_powers",
    tag = HERO_POWER_TAG,
    request_body = CreateHeroPowerDto,
    responses(
        (status = 201, description = "Created hero power", body = HeroPowerDto),
        (status = 400, description = "Invalid strength or unknown hero/power", body = ErrorsDto),
    ),
)]
pub async fn create_hero_power(
    State(state): State<AppState>,
    Json(payload): Json<CreateHeroPowerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateHeroPowerParam::from_dto(payload);
    let hero_power = HeroPowerService::new(&state.db).create(param).await?;

    state.notifier.notify_hero_power_created(&hero_power);

    Ok((StatusCode::CREATED, Json(hero_power)))
}
