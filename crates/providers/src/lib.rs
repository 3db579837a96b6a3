//! The crate exposes the [`L1Client`], answering what the L1 confirmed state of the rollup is and
//! which calldata advances it, along with the contract facades it reads from.

pub use client::{L1Client, L2_CHAIN_ID_PRECEDENCE, LATEST_VERIFIED_BATCH_PRECEDENCE};
mod client;

pub use error::{L1ClientError, L1ContractError};
mod error;

pub use l1::{
    ContractGeneration, L1HeaderProvider, LegacyRollupContract, Precedence, RollupManager,
    RollupManagerContract, RollupStateSource,
};
mod l1;

pub use metrics::L1ClientMetrics;
mod metrics;

pub use revert::{normalize_contract_error, try_parse_revert};
mod revert;

#[cfg(any(test, feature = "test-utils"))]
/// Common test helpers
pub mod test_utils;
