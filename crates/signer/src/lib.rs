//! A library minting throwaway signing identities for the rollup bridge.
//!
//! Building the calldata of an L1 transaction goes through the same path as building a signed
//! transaction. Instead of exposing a real key to that path, an [`EphemeralAuth`] is minted from a
//! freshly generated key for every transaction that is shaped. The resulting transactions are
//! never broadcast.

use alloy_consensus::{SignableTransaction, Signed, TxLegacy};
use alloy_network::TxSignerSync;
use alloy_primitives::{Address, Bytes, ChainId, TxKind, B256, U256};
use alloy_signer::Signer;
use alloy_signer_local::{LocalSignerError, PrivateKeySigner};
use rand::{rngs::OsRng, TryRngCore};

mod error;
pub use error::SignerError;

/// The placeholder nonce of transactions shaped by an [`EphemeralAuth`].
pub const PLACEHOLDER_NONCE: u64 = 1;

/// The placeholder gas limit of transactions shaped by an [`EphemeralAuth`].
pub const PLACEHOLDER_GAS_LIMIT: u64 = 1;

/// The placeholder gas price of transactions shaped by an [`EphemeralAuth`].
pub const PLACEHOLDER_GAS_PRICE: u128 = 1;

/// A disposable authorization context bound to a randomly generated key.
///
/// The context is only used to shape transactions: it is never used to sign anything that is
/// broadcast. Its transaction parameters are forced to placeholders so that no chain query is
/// required to fill them. The type is intentionally not [`Clone`], each call site should mint its
/// own instance through [`EphemeralAuth::random`].
pub struct EphemeralAuth {
    /// The throwaway signer.
    signer: PrivateKeySigner,
    /// The chain id the signer is bound to.
    chain_id: ChainId,
}

impl EphemeralAuth {
    /// Transactions shaped by an [`EphemeralAuth`] must never be sent.
    pub const NO_SEND: bool = true;

    /// Mints a new [`EphemeralAuth`] from a freshly generated key, bound to the provided chain
    /// id.
    pub fn random(chain_id: ChainId) -> Result<Self, SignerError> {
        let mut key = B256::ZERO;
        OsRng.try_fill_bytes(key.as_mut_slice())?;

        let signer = PrivateKeySigner::from_bytes(&key)
            .map_err(LocalSignerError::from)?
            .with_chain_id(Some(chain_id));
        tracing::trace!(target: "bridge::signer", chain_id, address = ?signer.address(), "Minted ephemeral signer");

        Ok(Self { signer, chain_id })
    }

    /// Returns the address of the throwaway signer.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Returns the chain id the context is bound to.
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the unsigned legacy transaction calling `to` with `input`, filled with the
    /// placeholder parameters.
    pub fn transaction(&self, to: Address, input: Bytes) -> TxLegacy {
        TxLegacy {
            chain_id: Some(self.chain_id),
            nonce: PLACEHOLDER_NONCE,
            gas_price: PLACEHOLDER_GAS_PRICE,
            gas_limit: PLACEHOLDER_GAS_LIMIT,
            to: TxKind::Call(to),
            value: U256::ZERO,
            input,
        }
    }

    /// Shapes and signs the transaction calling `to` with `input`.
    ///
    /// The returned transaction carries placeholder parameters and must never be broadcast.
    pub fn sign_call(&self, to: Address, input: Bytes) -> Result<Signed<TxLegacy>, SignerError> {
        self.sign_transaction(self.transaction(to, input))
    }

    /// Signs the provided transaction with the throwaway key.
    ///
    /// Fails if the transaction is bound to a different chain id.
    pub fn sign_transaction(&self, mut tx: TxLegacy) -> Result<Signed<TxLegacy>, SignerError> {
        let signature = self.signer.sign_transaction_sync(&mut tx)?;
        Ok(tx.into_signed(signature))
    }
}

impl std::fmt::Debug for EphemeralAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemeralAuth")
            .field("address", &self.signer.address())
            .field("chain_id", &self.chain_id)
            .field("no_send", &Self::NO_SEND)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const TARGET: Address = address!("0x5132A183E9F3CB7C848b0AAC5Ae0c4f0491B7aB2");

    #[test]
    fn test_random_auth_is_fresh() {
        reth_tracing::init_test_tracing();

        let first = EphemeralAuth::random(1).unwrap();
        let second = EphemeralAuth::random(1).unwrap();

        assert_ne!(first.address(), second.address());
        assert_eq!(first.chain_id(), 1);
    }

    #[test]
    fn test_sign_call_uses_placeholders() {
        let auth = EphemeralAuth::random(11155111).unwrap();
        let input = Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]);

        let signed = auth.sign_call(TARGET, input.clone()).unwrap();
        let tx = signed.tx();

        assert_eq!(tx.to, TxKind::Call(TARGET));
        assert_eq!(tx.input, input);
        assert_eq!(tx.nonce, PLACEHOLDER_NONCE);
        assert_eq!(tx.gas_limit, PLACEHOLDER_GAS_LIMIT);
        assert_eq!(tx.gas_price, PLACEHOLDER_GAS_PRICE);
        assert_eq!(tx.chain_id, Some(11155111));

        let signer = signed.signature().recover_address_from_prehash(&tx.signature_hash()).unwrap();
        assert_eq!(signer, auth.address());
    }

    #[test]
    fn test_sign_transaction_chain_id_mismatch() {
        let auth = EphemeralAuth::random(1).unwrap();
        let mut tx = auth.transaction(TARGET, Bytes::new());
        tx.chain_id = Some(5);

        assert!(matches!(auth.sign_transaction(tx), Err(SignerError::Signing(_))));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let auth = EphemeralAuth::random(1).unwrap();
        let debug = format!("{auth:?}");

        assert!(debug.contains("no_send: true"));
        assert!(!debug.contains("signer"));
    }
}
