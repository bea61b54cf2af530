use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::power::PowerParam;

pub struct PowerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PowerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all powers ordered by id
    pub async fn get_all(&self) -> Result<Vec<PowerParam>, DbErr> {
        let powers = entity::prelude::Power::find()
            .order_by_asc(entity::power::Column::Id)
            .all(self.db)
            .await?;

        Ok(powers.into_iter().map(PowerParam::from_entity).collect())
    }

    /// Gets a power by id, or None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PowerParam>, DbErr> {
        let power = entity::prelude::Power::find_by_id(id).one(self.db).await?;

        Ok(power.map(PowerParam::from_entity))
    }

    /// Updates a power's description
    ///
    /// The description must already be validated by the caller; this is a
    /// single-statement write with nothing to roll back on failure.
    pub async fn update_description(
        &self,
        id: i32,
        description: String,
    ) -> Result<PowerParam, DbErr> {
        let power = entity::prelude::Power::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Power with id {} not found",
                id
            )))?;

        let mut active_model: entity::power::ActiveModel = power.into();
        active_model.description = ActiveValue::Set(description);

        let updated = active_model.update(self.db).await?;

        Ok(PowerParam::from_entity(updated))
    }

    /// Checks if a power with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Power::find()
            .filter(entity::power::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
