//! A vehicle line (`model` table), owned by one manufacturer.
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::manufacturer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub manufacturer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Manufacturer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Manufacturer => Entity::belongs_to(manufacturer::Entity)
                .from(Column::ManufacturerId)
                .to(manufacturer::Column::Id)
                .into(),
        }
    }
}

impl Related<manufacturer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Manufacturer.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("model name is required".into())); }
    if name.chars().count() > 128 { return Err(errors::ModelError::Validation("model name too long (<=128)".into())); }
    Ok(())
}

/// Insert a model under `manufacturer_id`. The caller is responsible for the
/// manufacturer existing; the foreign key rejects it otherwise.
pub async fn create<C: ConnectionTrait>(db: &C, manufacturer_id: i32, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        manufacturer_id: Set(manufacturer_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.is_some())
}

/// Remove every model owned by `manufacturer_id`; returns the number removed.
pub async fn delete_by_manufacturer<C: ConnectionTrait>(db: &C, manufacturer_id: i32) -> Result<u64, DbErr> {
    let res = Entity::delete_many()
        .filter(Column::ManufacturerId.eq(manufacturer_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
