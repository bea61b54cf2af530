use sea_orm::DatabaseConnection;

use crate::{
    model::power::PowerDto,
    server::{
        data::power::PowerRepository,
        error::AppError,
        model::power::{validate_description, UpdatePowerParam},
    },
};

pub struct PowerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PowerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all powers as projections
    pub async fn get_all(&self) -> Result<Vec<PowerDto>, AppError> {
        let powers = PowerRepository::new(self.db).get_all().await?;

        Ok(powers.into_iter().map(|power| power.into_dto()).collect())
    }

    /// Gets a single power projection
    pub async fn get_by_id(&self, id: i32) -> Result<PowerDto, AppError> {
        let power = PowerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Power not found".to_string()))?;

        Ok(power.into_dto())
    }

    /// Updates a power's description
    ///
    /// The not-found check short-circuits before any validation or mutation.
    /// A failed validation leaves the stored description unchanged. A request
    /// without a `description` key is a no-op returning the current
    /// projection.
    pub async fn update_description(&self, param: UpdatePowerParam) -> Result<PowerDto, AppError> {
        let repo = PowerRepository::new(self.db);

        let power = repo
            .get_by_id(param.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Power not found".to_string()))?;

        let Some(description) = param.description else {
            return Ok(power.into_dto());
        };

        validate_description(&description).map_err(|msg| AppError::Validation(vec![msg]))?;

        let updated = repo.update_description(param.id, description).await?;

        Ok(updated.into_dto())
    }
}
