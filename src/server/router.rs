use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{hero, hero_power, index, power},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Superheroes API", description = "CRUD API for heroes, powers, and hero powers"),
    paths(
        index::index,
        hero::get_heroes,
        hero::get_hero,
        power::get_powers,
        power::get_power,
        power::update_power,
        hero_power::create_hero_power,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::ErrorsDto,
        model::api::WelcomeDto,
        model::hero::HeroDto,
        model::hero::HeroDetailDto,
        model::power::PowerDto,
        model::power::UpdatePowerDto,
        model::hero_power::HeroPowerDto,
        model::hero_power::HeroPowerSummaryDto,
        model::hero_power::CreateHeroPowerDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/heroes", get(hero::get_heroes))
        .route("/heroes/{id}", get(hero::get_hero))
        .route("/powers", get(power::get_powers))
        .route(
            "/powers/{id}",
            get(power::get_power).patch(power::update_power),
        )
        .route("/hero_powers", post(hero_power::create_hero_power))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
