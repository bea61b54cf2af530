use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{hero::HeroDto, power::PowerDto};

/// Full hero-power projection returned from `POST /hero_powers`, with the
/// related hero and power expanded as nested objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeroPowerDto {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
    pub hero: HeroDto,
    pub power: PowerDto,
}

/// Hero-power projection nested inside a hero detail response.
///
/// Expands the related power but not the hero, which is the enclosing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeroPowerSummaryDto {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
    pub power: PowerDto,
}

/// Request body for `POST /hero_powers`.
///
/// `strength` is accepted as a plain string and validated against the allowed
/// set by the model layer so that a bad value produces a 400 with a readable
/// message rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHeroPowerDto {
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}
