#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database per test; tests never share rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_memory().await
}
