#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}
