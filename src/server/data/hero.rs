use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hero::HeroParam;

pub struct HeroRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all heroes ordered by id
    pub async fn get_all(&self) -> Result<Vec<HeroParam>, DbErr> {
        let heroes = entity::prelude::Hero::find()
            .order_by_asc(entity::hero::Column::Id)
            .all(self.db)
            .await?;

        Ok(heroes.into_iter().map(HeroParam::from_entity).collect())
    }

    /// Gets a hero by id, or None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<HeroParam>, DbErr> {
        let hero = entity::prelude::Hero::find_by_id(id).one(self.db).await?;

        Ok(hero.map(HeroParam::from_entity))
    }

    /// Checks if a hero with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Hero::find()
            .filter(entity::hero::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
