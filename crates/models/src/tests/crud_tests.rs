use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};

use super::memory_db;
use crate::{errors::ModelError, manufacturer, vehicle_model};

#[tokio::test]
async fn manufacturer_ids_are_assigned_sequentially() -> Result<()> {
    let db = memory_db().await?;
    let toyota = manufacturer::create(&db, "Toyota").await?;
    let honda = manufacturer::create(&db, "Honda").await?;
    assert_eq!(toyota.id, 1);
    assert_eq!(honda.id, 2);
    assert!(manufacturer::exists(&db, 2).await?);
    assert!(!manufacturer::exists(&db, 3).await?);
    Ok(())
}

#[tokio::test]
async fn blank_names_are_rejected_before_insert() -> Result<()> {
    let db = memory_db().await?;
    assert!(matches!(manufacturer::create(&db, "   ").await, Err(ModelError::Validation(_))));
    let m = manufacturer::create(&db, "Mazda").await?;
    assert!(matches!(vehicle_model::create(&db, m.id, "").await, Err(ModelError::Validation(_))));
    assert_eq!(manufacturer::Entity::find().count(&db).await?, 1);
    assert_eq!(vehicle_model::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[test]
fn long_names_are_rejected() {
    let name = "x".repeat(129);
    assert!(manufacturer::validate_name(&name).is_err());
    assert!(vehicle_model::validate_name(&name).is_err());
    assert!(vehicle_model::validate_name("Civic").is_ok());
}

#[tokio::test]
async fn relations_resolve_both_ways() -> Result<()> {
    let db = memory_db().await?;
    let toyota = manufacturer::create(&db, "Toyota").await?;
    let corolla = vehicle_model::create(&db, toyota.id, "Corolla").await?;
    let _camry = vehicle_model::create(&db, toyota.id, "Camry").await?;

    let owned = toyota.find_related(vehicle_model::Entity).all(&db).await?;
    assert_eq!(owned.len(), 2);

    let owner = corolla.find_related(manufacturer::Entity).one(&db).await?;
    assert_eq!(owner.map(|m| m.name), Some("Toyota".to_string()));
    Ok(())
}

#[tokio::test]
async fn delete_by_manufacturer_only_touches_its_models() -> Result<()> {
    let db = memory_db().await?;
    let toyota = manufacturer::create(&db, "Toyota").await?;
    let honda = manufacturer::create(&db, "Honda").await?;
    vehicle_model::create(&db, toyota.id, "Corolla").await?;
    vehicle_model::create(&db, toyota.id, "Camry").await?;
    let civic = vehicle_model::create(&db, honda.id, "Civic").await?;

    let removed = vehicle_model::delete_by_manufacturer(&db, toyota.id).await?;
    assert_eq!(removed, 2);
    let left = vehicle_model::Entity::find().all(&db).await?;
    assert_eq!(left, vec![civic]);
    Ok(())
}
