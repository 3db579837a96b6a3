pub(crate) mod header;
pub(crate) mod legacy;
pub(crate) mod manager;

pub use header::L1HeaderProvider;
pub use legacy::LegacyRollupContract;
pub use manager::RollupManager;

use crate::L1ContractError;

use alloy_consensus::{Signed, TxLegacy};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, B256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::SolCall;
use rollup_bridge_l1::abi::calls::RollupManager::verifyBatchesTrustedAggregatorCall;
use rollup_bridge_primitives::RollupId;
use rollup_bridge_signer::EphemeralAuth;
use std::fmt;

/// A generation of the L1 contracts tracking the rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractGeneration {
    /// The multi-rollup manager contract.
    Manager,
    /// The legacy single-rollup contract.
    Legacy,
}

impl fmt::Display for ContractGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manager => f.write_str("rollup manager"),
            Self::Legacy => f.write_str("legacy rollup"),
        }
    }
}

/// The order in which contract generations are queried for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    /// The generation queried first.
    pub primary: ContractGeneration,
    /// The generation queried when the primary one is unusable.
    pub fallback: ContractGeneration,
}

impl Precedence {
    /// Queries the rollup manager first and falls back to the legacy contract.
    pub const MANAGER_FIRST: Self =
        Self { primary: ContractGeneration::Manager, fallback: ContractGeneration::Legacy };

    /// Queries the legacy contract first and falls back to the rollup manager.
    pub const LEGACY_FIRST: Self =
        Self { primary: ContractGeneration::Legacy, fallback: ContractGeneration::Manager };
}

/// A contract generation able to report the verification state of the rollup.
#[async_trait::async_trait]
pub trait RollupStateSource: Send + Sync {
    /// Returns the last batch of the rollup verified on the L1.
    async fn last_verified_batch(&self, rollup_id: RollupId) -> Result<u64, L1ContractError>;

    /// Returns the L2 chain id of the rollup.
    async fn chain_id(&self, rollup_id: RollupId) -> Result<u64, L1ContractError>;
}

/// The capabilities of the rollup manager contract beyond the shared rollup state.
#[async_trait::async_trait]
pub trait RollupManagerContract: RollupStateSource {
    /// Returns the accumulated input hash of the sequenced batch.
    async fn acc_input_hash(
        &self,
        rollup_id: RollupId,
        batch_number: u64,
    ) -> Result<B256, L1ContractError>;

    /// Shapes the `verifyBatchesTrustedAggregator` call into a transaction signed by the provided
    /// ephemeral authorization. The transaction is never broadcast.
    fn verify_batches_trusted_aggregator(
        &self,
        auth: &EphemeralAuth,
        call: verifyBatchesTrustedAggregatorCall,
    ) -> Result<Signed<TxLegacy>, L1ContractError>;
}

/// Performs a read-only call of the contract at `to` and decodes its return data.
pub(crate) async fn eth_call<P, C>(
    provider: &P,
    to: Address,
    call: C,
) -> Result<C::Return, L1ContractError>
where
    P: Provider,
    C: SolCall + Send,
    C::Return: Send,
{
    let request = TransactionRequest::default().with_to(to).with_input(call.abi_encode());
    let output = provider.call(request).await?;
    Ok(C::abi_decode_returns(&output)?)
}
