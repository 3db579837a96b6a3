use super::{
    DatabaseConnectionProvider, DatabaseTransactionProvider, ReadConnectionProvider, TXMut, TX,
};
use crate::error::DatabaseError;

use sea_orm::{Database as SeaOrmDatabase, DatabaseConnection, TransactionTrait};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The [`Database`] struct is responsible for interacting with the database.
///
/// The [`Database`] type wraps a [`sea_orm::DatabaseConnection`]. Reads can be performed directly
/// on the [`Database`], writes are only exposed on the [`TXMut`] returned by
/// [`DatabaseTransactionProvider::tx_mut`]. Write transactions are serialized: a new one is only
/// started once the previous one is committed, rolled back or dropped.
#[derive(Debug, Clone)]
pub struct Database {
    /// The underlying database connection.
    connection: DatabaseConnection,
    /// The lock held by the live write transaction.
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    /// Creates a new [`Database`] instance associated with the provided database URL.
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let connection = SeaOrmDatabase::connect(database_url).await?;
        Ok(connection.into())
    }
}

#[async_trait::async_trait]
impl DatabaseTransactionProvider for Database {
    async fn tx(&self) -> Result<TX, DatabaseError> {
        Ok(TX::new(self.connection.begin().await?))
    }

    async fn tx_mut(&self) -> Result<TXMut, DatabaseError> {
        let guard = self.write_lock.clone().lock_owned().await;
        tracing::trace!(target: "bridge::db", "Starting write transaction");
        Ok(TXMut::new(self.connection.begin().await?, guard))
    }
}

impl DatabaseConnectionProvider for Database {
    type Connection = DatabaseConnection;

    fn get_connection(&self) -> &Self::Connection {
        &self.connection
    }
}

impl ReadConnectionProvider for Database {}

impl From<DatabaseConnection> for Database {
    fn from(connection: DatabaseConnection) -> Self {
        Self { connection, write_lock: Arc::new(Mutex::new(())) }
    }
}
