/// The number of 32 byte words in a final proof.
pub const PROOF_WORDS: usize = 24;

/// The number of hex characters encoding a single proof word.
pub const PROOF_WORD_HEX_LENGTH: usize = 32 * 2;

/// The number of hex characters encoding a final proof, excluding any `0x` prefix.
pub const PROOF_HEX_LENGTH: usize = PROOF_WORDS * PROOF_WORD_HEX_LENGTH;

/// The pending state number passed to `verifyBatchesTrustedAggregator`.
///
/// The pending state feature of the rollup manager is not implemented, so verification always
/// consolidates directly from the last verified batch.
pub const PENDING_STATE_NUM: u64 = 0;
