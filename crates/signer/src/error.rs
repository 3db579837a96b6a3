use alloy_signer_local::LocalSignerError;
use rand::rand_core::OsError;

/// An enum representing the errors that can occur when minting or using an
/// [`crate::EphemeralAuth`].
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// The operating system failed to provide randomness for the key.
    #[error("failed to generate a private key to estimate L1 txs: {0}")]
    Randomness(#[from] OsError),
    /// The random bytes did not form a valid private key.
    #[error("failed to derive an ephemeral signer to estimate L1 txs: {0}")]
    KeyDerivation(#[from] LocalSignerError),
    /// An error occurred while signing.
    #[error("failed to sign with the ephemeral signer: {0}")]
    Signing(#[from] alloy_signer::Error),
}
