use crate::{
    model::hero_power::{CreateHeroPowerDto, HeroPowerDto, HeroPowerSummaryDto},
    server::model::{hero::HeroParam, power::PowerParam},
};

/// Enumerated rating of how strongly a hero exhibits a power.
///
/// The only values ever persisted to the `strength` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// Parses a strength rating from its wire representation.
    ///
    /// Matching is exact; no case folding is applied.
    ///
    /// # Returns
    /// - `Ok(Strength)` - The value is one of the allowed ratings
    /// - `Err(String)` - Human-readable message for the 400 `errors` array
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "Strong" => Ok(Self::Strong),
            "Weak" => Ok(Self::Weak),
            "Average" => Ok(Self::Average),
            _ => Err(format!(
                "strength must be one of 'Strong', 'Weak', 'Average', got '{}'",
                value
            )),
        }
    }

    /// Returns the persisted string form of the rating.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }
}

/// Represents a hero-power association with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPowerParam {
    /// Unique identifier for the association.
    pub id: i32,
    /// Strength rating, one of the [`Strength`] values.
    pub strength: String,
    /// Foreign key to the hero.
    pub hero_id: i32,
    /// Foreign key to the power.
    pub power_id: i32,
}

impl HeroPowerParam {
    /// Converts an entity model to a hero power param.
    pub fn from_entity(entity: entity::hero_power::Model) -> Self {
        Self {
            id: entity.id,
            strength: entity.strength,
            hero_id: entity.hero_id,
            power_id: entity.power_id,
        }
    }

    /// Converts the param to the full creation-response DTO.
    ///
    /// # Arguments
    /// - `hero`: The referenced hero, resolved by the service
    /// - `power`: The referenced power, resolved by the service
    pub fn into_dto(self, hero: HeroParam, power: PowerParam) -> HeroPowerDto {
        HeroPowerDto {
            id: self.id,
            hero_id: self.hero_id,
            power_id: self.power_id,
            strength: self.strength,
            hero: hero.into_dto(),
            power: power.into_dto(),
        }
    }
}

/// A hero-power association joined with its power.
///
/// Returned by the explicit join query backing a hero's `hero_powers`
/// projection.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPowerWithPowerParam {
    pub hero_power: HeroPowerParam,
    pub power: PowerParam,
}

impl HeroPowerWithPowerParam {
    /// Converts the joined pair to the nested summary DTO.
    pub fn into_dto(self) -> HeroPowerSummaryDto {
        HeroPowerSummaryDto {
            id: self.hero_power.id,
            hero_id: self.hero_power.hero_id,
            power_id: self.hero_power.power_id,
            strength: self.hero_power.strength,
            power: self.power.into_dto(),
        }
    }
}

/// Parameters for creating a new hero-power association.
///
/// `strength` is still the raw request string at this point; the service
/// validates it against [`Strength`] before the insert.
#[derive(Debug, Clone)]
pub struct CreateHeroPowerParam {
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

impl CreateHeroPowerParam {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateHeroPowerDto) -> Self {
        Self {
            strength: dto.strength,
            hero_id: dto.hero_id,
            power_id: dto.power_id,
        }
    }
}
