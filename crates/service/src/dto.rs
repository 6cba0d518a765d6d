//! Wire shapes for the catalogue API.
//!
//! Summaries carry only `id` and `name`, so a manufacturer nests model
//! summaries and a model nests a manufacturer summary, never deeper.

use models::{manufacturer, vehicle_model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerDto {
    pub id: i32,
    pub name: String,
    pub models: Vec<ModelSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDto {
    pub id: i32,
    pub name: String,
    pub manufacturer_id: i32,
    pub manufacturer: Option<ManufacturerSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerSummary {
    pub id: i32,
    pub name: String,
}

/// Body of `POST`/`PUT /api/Manufacturers`. `id` is only checked on update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerInput {
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

/// Body of `POST`/`PUT /api/Models`. The admin page sends PascalCase keys on edit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "ManufacturerId")]
    pub manufacturer_id: i32,
}

impl From<vehicle_model::Model> for ModelSummary {
    fn from(m: vehicle_model::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

impl From<manufacturer::Model> for ManufacturerSummary {
    fn from(m: manufacturer::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

impl From<(manufacturer::Model, Vec<vehicle_model::Model>)> for ManufacturerDto {
    fn from((m, owned): (manufacturer::Model, Vec<vehicle_model::Model>)) -> Self {
        let mut models: Vec<ModelSummary> = owned.into_iter().map(ModelSummary::from).collect();
        models.sort_by_key(|s| s.id);
        Self { id: m.id, name: m.name, models }
    }
}

impl From<(vehicle_model::Model, Option<manufacturer::Model>)> for ModelDto {
    fn from((m, owner): (vehicle_model::Model, Option<manufacturer::Model>)) -> Self {
        Self {
            id: m.id,
            name: m.name,
            manufacturer_id: m.manufacturer_id,
            manufacturer: owner.map(ManufacturerSummary::from),
        }
    }
}
