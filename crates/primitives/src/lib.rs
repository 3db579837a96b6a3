//! Primitive types for the rollup L1 state bridge.

pub use calldata::VerifyBatchesCalldata;
mod calldata;

pub use config::{ContractAddressBook, L1Config, RollupId};
mod config;

pub use proof::FinalProofInputs;
mod proof;

pub use sequence::Sequence;
mod sequence;
