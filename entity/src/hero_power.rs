use sea_orm::entity::prelude::*;

/// Join entity linking one hero to one power.
///
/// `strength` is stored as a plain string; the allowed value set
/// ({"Strong", "Weak", "Average"}) is enforced by the server's model layer
/// before any write reaches the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hero,
    #[sea_orm(
        belongs_to = "super::power::Entity",
        from = "Column::PowerId",
        to = "super::power::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Power,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl Related<super::power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Power.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
