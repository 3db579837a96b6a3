use crate::DatabaseError;

use rollup_bridge_primitives::Sequence;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents the batch range covered by a sequence.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sequence")]
pub struct Model {
    /// The first batch of the sequence.
    #[sea_orm(primary_key, auto_increment = false)]
    pub from_batch_num: i64,
    /// The last batch of the sequence.
    pub to_batch_num: i64,
}

/// The relation for the sequence model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the sequence model.
impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Sequence> for ActiveModel {
    type Error = DatabaseError;

    fn try_from(sequence: Sequence) -> Result<Self, Self::Error> {
        Ok(Self {
            from_batch_num: ActiveValue::Set(DatabaseError::column_value(
                "from batch number",
                sequence.from_batch_number,
            )?),
            to_batch_num: ActiveValue::Set(DatabaseError::column_value(
                "to batch number",
                sequence.to_batch_number,
            )?),
        })
    }
}

impl TryFrom<Model> for Sequence {
    type Error = DatabaseError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self::new(
            DatabaseError::field_value("from batch number", value.from_batch_num)?,
            DatabaseError::field_value("to batch number", value.to_batch_num)?,
        ))
    }
}
