use sea_orm::DatabaseConnection;

use crate::{
    model::hero_power::HeroPowerDto,
    server::{
        data::{hero::HeroRepository, hero_power::HeroPowerRepository, power::PowerRepository},
        error::AppError,
        model::hero_power::{CreateHeroPowerParam, Strength},
    },
};

pub struct HeroPowerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroPowerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hero-power association
    ///
    /// Validates the strength rating and confirms both referenced rows exist
    /// before the insert, so nothing is written on any failure. Both dangling
    /// references are reported together in the `errors` array when both are
    /// missing.
    pub async fn create(&self, param: CreateHeroPowerParam) -> Result<HeroPowerDto, AppError> {
        let strength =
            Strength::parse(&param.strength).map_err(|msg| AppError::Validation(vec![msg]))?;

        let hero = HeroRepository::new(self.db).get_by_id(param.hero_id).await?;
        let power = PowerRepository::new(self.db)
            .get_by_id(param.power_id)
            .await?;

        let (hero, power) = match (hero, power) {
            (Some(hero), Some(power)) => (hero, power),
            (hero, power) => {
                let mut errors = Vec::new();
                if hero.is_none() {
                    errors.push(format!(
                        "hero_id {} does not reference an existing hero",
                        param.hero_id
                    ));
                }
                if power.is_none() {
                    errors.push(format!(
                        "power_id {} does not reference an existing power",
                        param.power_id
                    ));
                }
                return Err(AppError::Validation(errors));
            }
        };

        let hero_power = HeroPowerRepository::new(self.db)
            .create(strength, param.hero_id, param.power_id)
            .await?;

        Ok(hero_power.into_dto(hero, power))
    }
}
