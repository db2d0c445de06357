use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;



/// Title validation rules
pub mod validation_tests;

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps every query on the same in-memory database.
pub(crate) async fn memory_db() -> Result<DatabaseConnection> {
    let mut cfg = DatabaseConfig::with_url("sqlite::memory:");
    cfg.max_connections = 1;
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
