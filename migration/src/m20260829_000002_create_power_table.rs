use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Power::Table)
                    .if_not_exists()
                    .col(pk_auto(Power::Id))
                    .col(string(Power::Name))
                    .col(text(Power::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Power::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Power {
    Table,
    Id,
    Name,
    Description,
}
