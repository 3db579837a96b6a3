use super::{models, DatabaseError, ReadConnectionProvider, WriteConnectionProvider};

use rollup_bridge_primitives::Sequence;
use sea_orm::{sea_query::OnConflict, EntityTrait, QueryOrder};

/// The [`DatabaseWriteOperations`] trait provides write methods for interacting with the
/// database.
///
/// The operations never open nor commit a transaction, they participate in the one owned by the
/// caller.
#[async_trait::async_trait]
pub trait DatabaseWriteOperations: WriteConnectionProvider + Sync {
    /// Insert a [`Sequence`] into the database.
    ///
    /// Sequences are keyed by their first batch: a sequence already recorded for the same first
    /// batch has its last batch replaced.
    async fn insert_sequence(&self, sequence: Sequence) -> Result<(), DatabaseError> {
        tracing::trace!(
            target: "bridge::db",
            from_batch_number = sequence.from_batch_number,
            to_batch_number = sequence.to_batch_number,
            "Inserting sequence into database."
        );
        let sequence: models::sequence::ActiveModel = sequence.try_into()?;
        models::sequence::Entity::insert(sequence)
            .on_conflict(
                OnConflict::column(models::sequence::Column::FromBatchNum)
                    .update_column(models::sequence::Column::ToBatchNum)
                    .to_owned(),
            )
            .exec_without_returning(self.get_connection())
            .await?;
        Ok(())
    }
}

impl<T: WriteConnectionProvider + Sync + ?Sized> DatabaseWriteOperations for T {}

/// The [`DatabaseReadOperations`] trait provides read-only methods for interacting with the
/// database.
#[async_trait::async_trait]
pub trait DatabaseReadOperations: ReadConnectionProvider + Sync {
    /// Get the [`Sequence`] starting at the provided batch.
    async fn get_sequence(
        &self,
        from_batch_number: u64,
    ) -> Result<Option<Sequence>, DatabaseError> {
        let from_batch_num = DatabaseError::column_value("from batch number", from_batch_number)?;
        models::sequence::Entity::find_by_id(from_batch_num)
            .one(self.get_connection())
            .await?
            .map(Sequence::try_from)
            .transpose()
    }

    /// Get all the [`Sequence`]s, ordered by their first batch.
    async fn get_sequences(&self) -> Result<Vec<Sequence>, DatabaseError> {
        models::sequence::Entity::find()
            .order_by_asc(models::sequence::Column::FromBatchNum)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(Sequence::try_from)
            .collect()
    }
}

impl<T: ReadConnectionProvider + Sync + ?Sized> DatabaseReadOperations for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{setup_empty_test_db, setup_test_db},
        DatabaseConnectionProvider, DatabaseTransactionProvider,
    };
    use sea_orm::ActiveValue;

    #[tokio::test]
    async fn test_insert_sequence_upserts_on_from_batch() {
        reth_tracing::init_test_tracing();

        let db = setup_test_db().await;

        let tx = db.tx_mut().await.unwrap();
        tx.insert_sequence(Sequence::new(100, 200)).await.unwrap();
        tx.insert_sequence(Sequence::new(100, 250)).await.unwrap();
        assert_eq!(tx.get_sequence(100).await.unwrap(), Some(Sequence::new(100, 250)));
        tx.commit().await.unwrap();

        assert_eq!(db.get_sequences().await.unwrap(), vec![Sequence::new(100, 250)]);
    }

    #[tokio::test]
    async fn test_insert_sequence_does_not_validate_ranges() {
        let db = setup_test_db().await;

        let tx = db.tx_mut().await.unwrap();
        tx.insert_sequence(Sequence::new(10, 20)).await.unwrap();
        tx.insert_sequence(Sequence::new(15, 30)).await.unwrap();
        tx.insert_sequence(Sequence::new(1, 0)).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(
            db.get_sequences().await.unwrap(),
            vec![Sequence::new(1, 0), Sequence::new(10, 20), Sequence::new(15, 30)]
        );
        assert_eq!(db.get_sequence(15).await.unwrap(), Some(Sequence::new(15, 30)));
        assert_eq!(db.get_sequence(11).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_sequence_rolled_back() {
        let db = setup_test_db().await;

        let tx = db.tx_mut().await.unwrap();
        tx.insert_sequence(Sequence::new(7, 9)).await.unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(db.get_sequence(7).await.unwrap(), None);
        assert!(db.get_sequences().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_sequence_out_of_range() {
        let db = setup_test_db().await;

        let tx = db.tx_mut().await.unwrap();
        let err = tx.insert_sequence(Sequence::new(1, u64::MAX)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ValueOutOfRange { value: u64::MAX, .. }));

        let err = tx.get_sequence(u64::MAX).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ValueOutOfRange { .. }));
    }

    #[tokio::test]
    async fn test_get_sequence_rejects_negative_column() {
        let db = setup_test_db().await;

        let tx = db.tx_mut().await.unwrap();
        let row = models::sequence::ActiveModel {
            from_batch_num: ActiveValue::Set(3),
            to_batch_num: ActiveValue::Set(-1),
        };
        models::sequence::Entity::insert(row)
            .exec_without_returning(tx.get_connection())
            .await
            .unwrap();

        let err = tx.get_sequence(3).await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidColumnValue { value: -1, .. }));
        let err = tx.get_sequences().await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidColumnValue { value: -1, .. }));
    }

    #[tokio::test]
    async fn test_insert_sequence_without_schema() {
        let db = setup_empty_test_db().await;

        let tx = db.tx_mut().await.unwrap();
        let err = tx.insert_sequence(Sequence::new(1, 2)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::DatabaseError(_)));
    }
}
