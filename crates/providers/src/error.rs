use alloy_transport::{RpcError, TransportErrorKind};
use rollup_bridge_l1::{ProofCodecError, RevertReason};
use rollup_bridge_primitives::RollupId;
use rollup_bridge_signer::SignerError;

/// An error that occurred when interacting with an L1 contract.
#[derive(Debug, thiserror::Error)]
pub enum L1ContractError {
    /// L1 RPC error.
    #[error("l1 rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    /// The data returned by the contract could not be decoded.
    #[error("failed to decode contract return data: {0}")]
    AbiDecode(#[from] alloy_sol_types::Error),
    /// The contract call could not be shaped into a transaction.
    #[error("failed to build contract call: {0}")]
    CallBuilder(#[from] SignerError),
    /// The contract call reverted with a known reason.
    #[error("contract call reverted: {0}")]
    Reverted(RevertReason),
}

/// An error that occurred in the [`crate::L1Client`].
#[derive(Debug, thiserror::Error)]
pub enum L1ClientError {
    /// An error with an L1 contract.
    #[error(transparent)]
    Contract(#[from] L1ContractError),
    /// The chain id resolved to zero from every contract.
    #[error("chain id received is 0 for rollup {rollup_id}")]
    EmptyChainId {
        /// The rollup the chain id was requested for.
        rollup_id: RollupId,
    },
    /// The ephemeral authorization could not be minted.
    #[error("failed to build trusted verify batches: {0}")]
    Auth(#[source] SignerError),
    /// The final proof could not be encoded.
    #[error(transparent)]
    Proof(#[from] ProofCodecError),
    /// A root of the final proof inputs is not 32 bytes long.
    #[error("invalid {field} length: expected 32 bytes, got {length}")]
    InvalidRootLength {
        /// The name of the offending root.
        field: &'static str,
        /// The length of the provided root.
        length: usize,
    },
    /// The shaped verify batches transaction does not call a contract.
    #[error("verify batches transaction has no destination")]
    MissingDestination,
}
