//! Create `model` table.
//!
//! Each row belongs to exactly one manufacturer; removing the manufacturer
//! removes its models.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Model::Table)
                    .if_not_exists()
                    .col(pk_auto(Model::Id))
                    .col(string_len(Model::Name, 128).not_null())
                    .col(integer(Model::ManufacturerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_model_manufacturer")
                            .from(Model::Table, Model::ManufacturerId)
                            .to(Manufacturer::Table, Manufacturer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Model::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Model {
    Table,
    Id,
    Name,
    ManufacturerId,
}

#[derive(DeriveIden)]
enum Manufacturer { Table, Id }
