//! Test utilities for the database crate.

use super::Database;
use rollup_bridge_migration::{Migrator, MigratorTrait};

/// Instantiates a new in-memory database and runs the migrations
/// to set up the schema.
pub async fn setup_test_db() -> Database {
    let database_url = "sqlite::memory:";
    let connection = sea_orm::Database::connect(database_url).await.unwrap();
    Migrator::up(&connection, None).await.unwrap();

    connection.into()
}

/// Instantiates a new in-memory database without any schema.
pub async fn setup_empty_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}
