use super::{eth_call, RollupStateSource};
use crate::L1ContractError;

use alloy_primitives::Address;
use alloy_provider::Provider;
use rollup_bridge_l1::abi::calls::LegacyRollup::{chainIDCall, lastVerifiedBatchCall};
use rollup_bridge_primitives::RollupId;

/// The legacy single-rollup contract, queried through an L1 provider.
///
/// The contract tracks a single rollup: the rollup id passed to its queries is ignored.
#[derive(Debug, Clone)]
pub struct LegacyRollupContract<P> {
    /// The address of the contract.
    address: Address,
    /// The L1 provider.
    provider: P,
}

impl<P> LegacyRollupContract<P> {
    /// Returns a new [`LegacyRollupContract`] at the provided address.
    pub const fn new(address: Address, provider: P) -> Self {
        Self { address, provider }
    }

    /// Returns the address of the contract.
    pub const fn address(&self) -> Address {
        self.address
    }
}

#[async_trait::async_trait]
impl<P: Provider> RollupStateSource for LegacyRollupContract<P> {
    async fn last_verified_batch(&self, _rollup_id: RollupId) -> Result<u64, L1ContractError> {
        eth_call(&self.provider, self.address, lastVerifiedBatchCall {}).await
    }

    async fn chain_id(&self, _rollup_id: RollupId) -> Result<u64, L1ContractError> {
        eth_call(&self.provider, self.address, chainIDCall {}).await
    }
}
