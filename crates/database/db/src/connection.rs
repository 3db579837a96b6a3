/// The [`DatabaseConnectionProvider`] trait provides a way to get a connection to the database.
/// This is implemented by the [`crate::Database`], [`crate::TX`] and [`crate::TXMut`] types.
#[auto_impl::auto_impl(&, Arc)]
pub trait DatabaseConnectionProvider {
    /// The type of the database connection.
    type Connection: sea_orm::ConnectionTrait + sea_orm::StreamTrait + Send + Sync;

    /// Returns a reference to the database connection that implements the `ConnectionTrait` and
    /// `StreamTrait` traits.
    fn get_connection(&self) -> &Self::Connection;
}

/// A marker trait for connection providers that can be read from.
#[auto_impl::auto_impl(&, Arc)]
pub trait ReadConnectionProvider: DatabaseConnectionProvider {}

/// A marker trait for connection providers that can be written to.
///
/// Only implemented by [`crate::TXMut`]: every write happens inside a transaction owned by the
/// caller.
#[auto_impl::auto_impl(&, Arc)]
pub trait WriteConnectionProvider: ReadConnectionProvider {}
