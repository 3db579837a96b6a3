//! The Solidity interfaces of the L1 rollup contracts.

/// The calls of the legacy single-rollup contract and the rollup manager contract.
pub mod calls;

/// The custom errors of the rollup manager contract.
pub mod errors;
