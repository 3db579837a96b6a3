use alloy_primitives::Bytes;

/// The outputs of the final proof of a batch range, as handed over by the prover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalProofInputs {
    /// The hex encoded final proof, with or without a `0x` prefix.
    pub final_proof: String,
    /// The new local exit root. Expected to be 32 bytes.
    pub new_local_exit_root: Bytes,
    /// The new state root. Expected to be 32 bytes.
    pub new_state_root: Bytes,
}
