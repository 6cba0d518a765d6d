use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, Set, TransactionTrait};
use tracing::{info, instrument, warn};

use models::{manufacturer, vehicle_model};
use crate::dto::{ManufacturerDto, ManufacturerInput};
use crate::errors::ServiceError;

const ENTITY: &str = "manufacturer";

fn required_name(input: &ManufacturerInput) -> Result<String, ServiceError> {
    let name = input
        .name
        .as_deref()
        .ok_or_else(|| ServiceError::Validation("manufacturer name is required".into()))?;
    manufacturer::validate_name(name)?;
    Ok(name.to_string())
}

/// List all manufacturers with their models, in id order.
pub async fn list_manufacturers(db: &DatabaseConnection) -> Result<Vec<ManufacturerDto>, ServiceError> {
    let rows = manufacturer::Entity::find()
        .order_by_asc(manufacturer::Column::Id)
        .find_with_related(vehicle_model::Entity)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(ManufacturerDto::from).collect())
}

/// Get one manufacturer with its models.
pub async fn get_manufacturer(db: &DatabaseConnection, id: i32) -> Result<ManufacturerDto, ServiceError> {
    let found = manufacturer::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
    let owned = found.find_related(vehicle_model::Entity).all(db).await?;
    Ok(ManufacturerDto::from((found, owned)))
}

/// Create a manufacturer; the store assigns the id.
#[instrument(skip(db, input))]
pub async fn create_manufacturer(db: &DatabaseConnection, input: ManufacturerInput) -> Result<ManufacturerDto, ServiceError> {
    let name = required_name(&input)?;
    let created = manufacturer::create(db, &name).await?;
    info!(id = created.id, name = %created.name, "created manufacturer");
    Ok(ManufacturerDto::from((created, Vec::new())))
}

/// Replace the manufacturer's name. The body id must match the path id.
///
/// Checks run in order: id mismatch, missing record, missing name.
#[instrument(skip(db, input))]
pub async fn update_manufacturer(db: &DatabaseConnection, id: i32, input: ManufacturerInput) -> Result<(), ServiceError> {
    if input.id != id {
        return Err(ServiceError::Validation(format!("manufacturer id mismatch: path {}, body {}", id, input.id)));
    }

    let txn = db.begin().await?;
    let found = manufacturer::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
    let name = required_name(&input)?;
    let mut am: manufacturer::ActiveModel = found.into();
    am.name = Set(name);
    match am.update(&txn).await {
        Ok(_) => {}
        Err(DbErr::RecordNotUpdated) => {
            txn.rollback().await?;
            let still_exists = manufacturer::exists(db, id).await?;
            warn!(id, still_exists, "manufacturer update matched no row");
            return Err(ServiceError::from_update_conflict(ENTITY, id, still_exists));
        }
        Err(e) => return Err(e.into()),
    }
    txn.commit().await?;
    info!(id, "updated manufacturer");
    Ok(())
}

/// Delete a manufacturer together with the models it owns.
#[instrument(skip(db))]
pub async fn delete_manufacturer(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let found = manufacturer::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
    let cascaded = vehicle_model::delete_by_manufacturer(&txn, id).await?;
    found.delete(&txn).await?;
    txn.commit().await?;
    info!(id, cascaded, "deleted manufacturer");
    Ok(())
}
