use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;

/// CRUD operations tests for both entities
pub mod crud_tests;

/// Fresh, migrated in-memory database per test.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn migrations_apply_and_roll_back() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert_eq!(applied.len(), migration::Migrator::migrations().len());
    migration::Migrator::down(&db, None).await?;
    assert!(migration::Migrator::get_applied_migrations(&db).await?.is_empty());
    Ok(())
}
