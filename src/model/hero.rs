use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::hero_power::HeroPowerSummaryDto;

/// Hero projection for list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeroDto {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

/// Single-hero projection including the hero's power associations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeroDetailDto {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerSummaryDto>,
}
