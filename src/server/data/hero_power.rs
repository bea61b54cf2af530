use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    hero_power::{HeroPowerParam, HeroPowerWithPowerParam, Strength},
    power::PowerParam,
};

pub struct HeroPowerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroPowerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hero-power association
    ///
    /// Takes an already-validated [`Strength`]; the referenced hero and power
    /// are confirmed by the service, with the store's foreign-key constraints
    /// as the backstop.
    pub async fn create(
        &self,
        strength: Strength,
        hero_id: i32,
        power_id: i32,
    ) -> Result<HeroPowerParam, DbErr> {
        let hero_power = entity::hero_power::ActiveModel {
            strength: ActiveValue::Set(strength.as_str().to_string()),
            hero_id: ActiveValue::Set(hero_id),
            power_id: ActiveValue::Set(power_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(HeroPowerParam::from_entity(hero_power))
    }

    /// Gets all associations for a hero with their powers eagerly joined
    ///
    /// Uses an explicit `find_also_related` join so the power side is loaded
    /// in the same query rather than lazily per row.
    pub async fn get_by_hero_id(
        &self,
        hero_id: i32,
    ) -> Result<Vec<HeroPowerWithPowerParam>, DbErr> {
        let rows = entity::prelude::HeroPower::find()
            .filter(entity::hero_power::Column::HeroId.eq(hero_id))
            .order_by_asc(entity::hero_power::Column::Id)
            .find_also_related(entity::prelude::Power)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(hero_power, power)| {
                let power = power.ok_or(DbErr::RecordNotFound(format!(
                    "Power with id {} not found for hero power {}",
                    hero_power.power_id, hero_power.id
                )))?;

                Ok(HeroPowerWithPowerParam {
                    hero_power: HeroPowerParam::from_entity(hero_power),
                    power: PowerParam::from_entity(power),
                })
            })
            .collect()
    }
}
