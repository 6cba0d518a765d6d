use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, TransactionTrait};
use tracing::{info, instrument, warn};

use models::{manufacturer, vehicle_model};
use crate::dto::{ModelDto, ModelInput};
use crate::errors::ServiceError;

const ENTITY: &str = "model";

fn invalid_manufacturer(id: i32) -> ServiceError {
    ServiceError::Validation(format!("invalid manufacturerId {}", id))
}

/// List all models with their manufacturer, in id order.
pub async fn list_models(db: &DatabaseConnection) -> Result<Vec<ModelDto>, ServiceError> {
    let rows = vehicle_model::Entity::find()
        .order_by_asc(vehicle_model::Column::Id)
        .find_also_related(manufacturer::Entity)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(ModelDto::from).collect())
}

/// Get one model with its manufacturer.
pub async fn get_model(db: &DatabaseConnection, id: i32) -> Result<ModelDto, ServiceError> {
    vehicle_model::Entity::find_by_id(id)
        .find_also_related(manufacturer::Entity)
        .one(db)
        .await?
        .map(ModelDto::from)
        .ok_or_else(|| ServiceError::not_found(ENTITY, id))
}

/// Create a model under an existing manufacturer; the store assigns the id.
#[instrument(skip(db, input))]
pub async fn create_model(db: &DatabaseConnection, input: ModelInput) -> Result<ModelDto, ServiceError> {
    let name = input
        .name
        .ok_or_else(|| ServiceError::Validation("model name is required".into()))?;
    vehicle_model::validate_name(&name)?;

    let txn = db.begin().await?;
    let owner = manufacturer::Entity::find_by_id(input.manufacturer_id)
        .one(&txn)
        .await?
        .ok_or_else(|| invalid_manufacturer(input.manufacturer_id))?;
    let created = vehicle_model::create(&txn, owner.id, &name).await?;
    txn.commit().await?;
    info!(id = created.id, manufacturer_id = owner.id, name = %created.name, "created model");
    Ok(ModelDto::from((created, Some(owner))))
}

/// Update name and owner. An absent name keeps the current one.
///
/// Checks run in order: id mismatch, unknown manufacturer, missing model.
#[instrument(skip(db, input))]
pub async fn update_model(db: &DatabaseConnection, id: i32, input: ModelInput) -> Result<(), ServiceError> {
    if input.id != id {
        return Err(ServiceError::Validation(format!("model id mismatch: path {}, body {}", id, input.id)));
    }
    if let Some(name) = input.name.as_deref() {
        vehicle_model::validate_name(name)?;
    }

    let txn = db.begin().await?;
    if !manufacturer::exists(&txn, input.manufacturer_id).await? {
        return Err(invalid_manufacturer(input.manufacturer_id));
    }
    let found = vehicle_model::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
    let name = input.name.unwrap_or_else(|| found.name.clone());
    let mut am: vehicle_model::ActiveModel = found.into();
    am.name = Set(name);
    am.manufacturer_id = Set(input.manufacturer_id);
    match am.update(&txn).await {
        Ok(_) => {}
        Err(DbErr::RecordNotUpdated) => {
            txn.rollback().await?;
            let still_exists = vehicle_model::exists(db, id).await?;
            warn!(id, still_exists, "model update matched no row");
            return Err(ServiceError::from_update_conflict(ENTITY, id, still_exists));
        }
        Err(e) => return Err(e.into()),
    }
    txn.commit().await?;
    info!(id, manufacturer_id = input.manufacturer_id, "updated model");
    Ok(())
}

/// Delete a model.
#[instrument(skip(db))]
pub async fn delete_model(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = vehicle_model::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(ENTITY, id));
    }
    info!(id, "deleted model");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ManufacturerSummary;
    use crate::test_support::get_db;
    use sea_orm::{DatabaseBackend, MockDatabase, PaginatorTrait};

    fn input(id: i32, name: Option<&str>, manufacturer_id: i32) -> ModelInput {
        ModelInput { id, name: name.map(str::to_string), manufacturer_id }
    }

    #[tokio::test]
    async fn create_then_get_nests_manufacturer() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let toyota = manufacturer::create(&db, "Toyota").await?;

        let created = create_model(&db, input(0, Some("Corolla"), toyota.id)).await?;
        assert_eq!(created.id, 1);

        let found = get_model(&db, created.id).await?;
        assert_eq!(
            found,
            ModelDto {
                id: 1,
                name: "Corolla".into(),
                manufacturer_id: 1,
                manufacturer: Some(ManufacturerSummary { id: 1, name: "Toyota".into() }),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_missing_name_and_unknown_manufacturer() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let toyota = manufacturer::create(&db, "Toyota").await?;
        assert!(matches!(create_model(&db, input(0, None, toyota.id)).await, Err(ServiceError::Validation(_))));
        assert!(matches!(create_model(&db, input(0, Some("Ghost"), 999)).await, Err(ServiceError::Validation(_))));
        assert_eq!(vehicle_model::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_manufacturer_leaves_row_unchanged() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let toyota = manufacturer::create(&db, "Toyota").await?;
        let corolla = vehicle_model::create(&db, toyota.id, "Corolla").await?;

        let res = update_model(&db, corolla.id, input(corolla.id, Some("Corolla"), 999)).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        let after = get_model(&db, corolla.id).await?;
        assert_eq!(after.manufacturer_id, toyota.id);
        Ok(())
    }

    #[tokio::test]
    async fn update_checks_mismatch_before_anything_else() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        // neither the model nor the manufacturer exist, mismatch still wins
        let res = update_model(&db, 1, input(2, Some("X"), 999)).await;
        assert!(matches!(res, Err(ServiceError::Validation(ref m)) if m.contains("mismatch")));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_model_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let toyota = manufacturer::create(&db, "Toyota").await?;
        let res = update_model(&db, 5, input(5, Some("Yaris"), toyota.id)).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_moves_model_and_keeps_name_when_absent() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let toyota = manufacturer::create(&db, "Toyota").await?;
        let lexus = manufacturer::create(&db, "Lexus").await?;
        let m = vehicle_model::create(&db, toyota.id, "IS").await?;

        update_model(&db, m.id, input(m.id, None, lexus.id)).await?;
        let after = get_model(&db, m.id).await?;
        assert_eq!(after.name, "IS");
        assert_eq!(after.manufacturer, Some(ManufacturerSummary { id: lexus.id, name: "Lexus".into() }));

        update_model(&db, m.id, input(m.id, Some("IS 300"), lexus.id)).await?;
        assert_eq!(get_model(&db, m.id).await?.name, "IS 300");
        Ok(())
    }

    #[tokio::test]
    async fn list_and_delete() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let honda = manufacturer::create(&db, "Honda").await?;
        let civic = vehicle_model::create(&db, honda.id, "Civic").await?;
        vehicle_model::create(&db, honda.id, "Accord").await?;

        let list = list_models(&db).await?;
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|m| m.manufacturer.as_ref().map(|x| x.name.as_str()) == Some("Honda")));

        delete_model(&db, civic.id).await?;
        assert!(matches!(delete_model(&db, civic.id).await, Err(ServiceError::NotFound(_))));
        assert_eq!(list_models(&db).await?.len(), 1);
        Ok(())
    }

    // Owner and model are found, then the UPDATE ... RETURNING yields no row.
    fn lost_update_db(after: Vec<vehicle_model::Model>) -> DatabaseConnection {
        let toyota = manufacturer::Model { id: 1, name: "Toyota".into() };
        let corolla = vehicle_model::Model { id: 7, name: "Corolla".into(), manufacturer_id: 1 };
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![toyota]])
            .append_query_results([vec![corolla]])
            .append_query_results([Vec::<vehicle_model::Model>::new()])
            .append_query_results([after])
            .into_connection()
    }

    #[tokio::test]
    async fn lost_update_on_deleted_row_is_not_found() {
        let db = lost_update_db(Vec::new());
        let res = update_model(&db, 7, input(7, Some("Corolla Cross"), 1)).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn lost_update_on_live_row_is_conflict() {
        let corolla = vehicle_model::Model { id: 7, name: "Corolla".into(), manufacturer_id: 1 };
        let db = lost_update_db(vec![corolla]);
        let res = update_model(&db, 7, input(7, Some("Corolla Cross"), 1)).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
    }
}
