use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hero::{HeroDetailDto, HeroDto},
    },
    server::{error::AppError, service::hero::HeroService, state::AppState},
};

/// Tag for grouping hero endpoints in OpenAPI documentation
pub static HERO_TAG: &str = "hero";

/// Get all heroes.
///
/// Returns every hero as the list projection `{id, name, super_name}`.
///
/// # Returns
/// - `200 OK` - List of heroes
/// - `400 Bad Request` - Persistence failure
#[utoipa::path(
    get,
    path = "/heroes",
    tag = HERO_TAG,
    responses(
        (status = 200, description = "List of heroes", body = Vec<HeroDto>),
    ),
)]
pub async fn get_heroes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let heroes = HeroService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(heroes)))
}

/// Get a single hero with its powers.
///
/// Returns the hero's detail projection including the `hero_powers` array,
/// each entry carrying the nested power details.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Hero ID from the path
///
/// # Returns
/// - `200 OK` - Hero with power associations
/// - `404 Not Found` - No hero with the given id
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = HERO_TAG,
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Hero with power associations", body = HeroDetailDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
    ),
)]
pub async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hero = HeroService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(hero)))
}
