use sea_orm::DatabaseConnection;

use crate::{
    model::hero::{HeroDetailDto, HeroDto},
    server::{
        data::{hero::HeroRepository, hero_power::HeroPowerRepository},
        error::AppError,
    },
};

pub struct HeroService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all heroes as list projections
    pub async fn get_all(&self) -> Result<Vec<HeroDto>, AppError> {
        let heroes = HeroRepository::new(self.db).get_all().await?;

        Ok(heroes.into_iter().map(|hero| hero.into_dto()).collect())
    }

    /// Gets a single hero with its power associations expanded
    ///
    /// The associations are loaded through an explicit join query on the
    /// hero-power repository rather than relying on implicit relationship
    /// loading.
    pub async fn get_by_id(&self, id: i32) -> Result<HeroDetailDto, AppError> {
        let hero = HeroRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero not found".to_string()))?;

        let hero_powers = HeroPowerRepository::new(self.db).get_by_hero_id(id).await?;

        Ok(hero.into_detail_dto(hero_powers))
    }
}
