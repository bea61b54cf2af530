use crate::{
    model::hero::{HeroDetailDto, HeroDto},
    server::model::hero_power::HeroPowerWithPowerParam,
};

/// Represents a hero with full data from the database.
///
/// This is the primary model returned by repository methods.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroParam {
    /// Unique identifier for the hero.
    pub id: i32,
    /// Civilian name.
    pub name: String,
    /// Superhero name.
    pub super_name: String,
}

impl HeroParam {
    /// Converts an entity model to a hero param.
    ///
    /// This conversion happens at the data layer boundary to ensure entity
    /// models never leak into service or controller layers.
    pub fn from_entity(entity: entity::hero::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            super_name: entity.super_name,
        }
    }

    /// Converts the hero param to the list projection DTO.
    pub fn into_dto(self) -> HeroDto {
        HeroDto {
            id: self.id,
            name: self.name,
            super_name: self.super_name,
        }
    }

    /// Converts the hero param to the detail projection DTO.
    ///
    /// # Arguments
    /// - `hero_powers`: The hero's power associations, loaded separately by
    ///   the service through an explicit join query
    pub fn into_detail_dto(self, hero_powers: Vec<HeroPowerWithPowerParam>) -> HeroDetailDto {
        HeroDetailDto {
            id: self.id,
            name: self.name,
            super_name: self.super_name,
            hero_powers: hero_powers
                .into_iter()
                .map(HeroPowerWithPowerParam::into_dto)
                .collect(),
        }
    }
}
