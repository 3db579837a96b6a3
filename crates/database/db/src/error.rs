/// The error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// A database error occurred.
    #[error("database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),
    /// A value does not fit in its signed 64-bit column.
    #[error("{field} [{value}] does not fit in a database column")]
    ValueOutOfRange {
        /// The name of the offending field.
        field: &'static str,
        /// The offending value.
        value: u64,
    },
    /// A column holds a value that is not a valid batch number.
    #[error("{field} column holds invalid value [{value}]")]
    InvalidColumnValue {
        /// The name of the offending field.
        field: &'static str,
        /// The offending value.
        value: i64,
    },
}

impl DatabaseError {
    /// Converts the field value into its column representation.
    pub(crate) fn column_value(field: &'static str, value: u64) -> Result<i64, Self> {
        i64::try_from(value).map_err(|_| Self::ValueOutOfRange { field, value })
    }

    /// Converts the column representation back into the field value.
    pub(crate) fn field_value(field: &'static str, value: i64) -> Result<u64, Self> {
        u64::try_from(value).map_err(|_| Self::InvalidColumnValue { field, value })
    }
}
