use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Model: lookups and cascades go through manufacturer_id
        manager
            .create_index(
                Index::create()
                    .name("idx_model_manufacturer")
                    .table(Model::Table)
                    .col(Model::ManufacturerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_model_manufacturer").table(Model::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Model { Table, ManufacturerId }
