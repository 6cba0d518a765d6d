use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::vehicle_model;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "manufacturer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Models,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Models => Entity::has_many(vehicle_model::Entity).into() }
    }
}

impl Related<vehicle_model::Entity> for Entity {
    fn to() -> RelationDef { Relation::Models.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("manufacturer name is required".into())); }
    if name.chars().count() > 128 { return Err(errors::ModelError::Validation("manufacturer name too long (<=128)".into())); }
    Ok(())
}

/// Insert a manufacturer; the store assigns `id`.
pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.is_some())
}
