//! The database.

pub mod entity;
pub mod migration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::DatabaseConfig;
use crate::error::{StoreError, StoreResult};

/// Connects to the database.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout);

    let connection = Database::connect(options)
        .await
        .map_err(StoreError::database_error)?;

    connection
        .ping()
        .await
        .map_err(StoreError::database_error)?;

    Ok(connection)
}
