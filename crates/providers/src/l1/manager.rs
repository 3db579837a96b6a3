use super::{eth_call, RollupManagerContract, RollupStateSource};
use crate::L1ContractError;

use alloy_consensus::{Signed, TxLegacy};
use alloy_primitives::{Address, B256};
use alloy_provider::Provider;
use alloy_sol_types::SolCall;
use rollup_bridge_l1::abi::calls::RollupManager::{
    getRollupSequencedBatchesCall, rollupIDToRollupDataCall, rollupIDToRollupDataReturn,
    verifyBatchesTrustedAggregatorCall,
};
use rollup_bridge_primitives::RollupId;
use rollup_bridge_signer::EphemeralAuth;

/// The multi-rollup manager contract, queried through an L1 provider.
#[derive(Debug, Clone)]
pub struct RollupManager<P> {
    /// The address of the contract.
    address: Address,
    /// The L1 provider.
    provider: P,
}

impl<P> RollupManager<P> {
    /// Returns a new [`RollupManager`] at the provided address.
    pub const fn new(address: Address, provider: P) -> Self {
        Self { address, provider }
    }

    /// Returns the address of the contract.
    pub const fn address(&self) -> Address {
        self.address
    }
}

impl<P: Provider> RollupManager<P> {
    /// Returns the data the manager tracks for the rollup.
    pub async fn rollup_data(
        &self,
        rollup_id: RollupId,
    ) -> Result<rollupIDToRollupDataReturn, L1ContractError> {
        eth_call(&self.provider, self.address, rollupIDToRollupDataCall { rollupID: rollup_id })
            .await
    }
}

#[async_trait::async_trait]
impl<P: Provider> RollupStateSource for RollupManager<P> {
    async fn last_verified_batch(&self, rollup_id: RollupId) -> Result<u64, L1ContractError> {
        Ok(self.rollup_data(rollup_id).await?.lastVerifiedBatch)
    }

    async fn chain_id(&self, rollup_id: RollupId) -> Result<u64, L1ContractError> {
        Ok(self.rollup_data(rollup_id).await?.chainID)
    }
}

#[async_trait::async_trait]
impl<P: Provider> RollupManagerContract for RollupManager<P> {
    async fn acc_input_hash(
        &self,
        rollup_id: RollupId,
        batch_number: u64,
    ) -> Result<B256, L1ContractError> {
        let call = getRollupSequencedBatchesCall { rollupID: rollup_id, batchNum: batch_number };
        Ok(eth_call(&self.provider, self.address, call).await?.accInputHash)
    }

    fn verify_batches_trusted_aggregator(
        &self,
        auth: &EphemeralAuth,
        call: verifyBatchesTrustedAggregatorCall,
    ) -> Result<Signed<TxLegacy>, L1ContractError> {
        Ok(auth.sign_call(self.address, call.abi_encode().into())?)
    }
}
