use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto},
        power::{PowerDto, UpdatePowerDto},
    },
    server::{
        error::AppError,
        model::power::UpdatePowerParam,
        service::power::PowerService,
        state::AppState,
    },
};

/// Tag for grouping power endpoints in OpenAPI documentation
pub static POWER_TAG: &str = "power";

/// Get all powers.
///
/// Returns every power as the projection `{id, name, description}`.
///
/// # Returns
/// - `200 OK` - List of powers
#[utoipa::path(
    get,
    path = "/powers",
    tag = POWER_TAG,
    responses(
        (status = 200, description = "List of powers", body = Vec<PowerDto>),
    ),
)]
pub async fn get_powers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let powers = PowerService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(powers)))
}

/// Get a single power.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Power ID from the path
///
/// # Returns
/// - `200 OK` - Power projection
/// - `404 Not Found` - No power with the given id
#[utoipa::path(
    get,
    path = "/powers/{id}",
    tag = POWER_TAG,
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    responses(
        (status = 200, description = "Power", body = PowerDto),
        (status = 404, description = "Power not found", body = ErrorDto),
    ),
)]
pub async fn get_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let power = PowerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(power)))
}

/// Update a power's description.
///
/// The description must be at least 20 characters; a failed validation leaves
/// the stored description unchanged. A body without a `description` key is a
/// no-op returning the current projection.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Power ID from the path
/// - `payload` - Update data (optional description)
///
/// # Returns
/// - `200 OK` - Updated power projection
/// - `404 Not Found` - No power with the given id
/// - `400 Bad Request` - Description fails the minimum-length rule
#[utoipa::path(
    patch,
    path = "/powers/{id}",
    tag = POWER_TAG,
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    request_body = UpdatePowerDto,
    responses(
        (status = 200, description = "Updated power", body = PowerDto),
        (status = 400, description = "Invalid description", body = ErrorsDto),
        (status = 404, description = "Power not found", body = ErrorDto),
    ),
)]
pub async fn update_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePowerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePowerParam {
        id,
        description: payload.description,
    };
    let power = PowerService::new(&state.db).update_description(param).await?;

    Ok((StatusCode::OK, Json(power)))
}
