use alloy_primitives::{Address, Bytes};

/// The destination and calldata of a `verifyBatchesTrustedAggregator` call.
///
/// The envelope never carries a nonce, gas parameters or a signature: it is built from a
/// transaction that was only shaped for encoding and is never broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyBatchesCalldata {
    /// The address of the rollup manager contract.
    pub to: Address,
    /// The ABI encoded call.
    pub data: Bytes,
}
