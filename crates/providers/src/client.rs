use crate::{
    l1::{LegacyRollupContract, RollupManager},
    normalize_contract_error, ContractGeneration, L1ClientError, L1ClientMetrics,
    L1HeaderProvider, Precedence, RollupManagerContract, RollupStateSource,
};

use alloy_primitives::{Address, TxKind, B256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::Header;
use rollup_bridge_l1::{abi::calls::RollupManager::verifyBatchesTrustedAggregatorCall, encode_proof, PENDING_STATE_NUM};
use rollup_bridge_primitives::{FinalProofInputs, L1Config, RollupId, VerifyBatchesCalldata};
use rollup_bridge_signer::EphemeralAuth;
use std::fmt;

/// The precedence for the last verified batch: the rollup manager is authoritative whenever it
/// answers.
pub const LATEST_VERIFIED_BATCH_PRECEDENCE: Precedence = Precedence::MANAGER_FIRST;

/// The precedence for the L2 chain id: the legacy contract is authoritative whenever it returns a
/// non-zero chain id.
pub const L2_CHAIN_ID_PRECEDENCE: Precedence = Precedence::LEGACY_FIRST;

/// The client reconciling the rollup state with the L1, across the legacy rollup contract and the
/// rollup manager contract.
///
/// Every query goes to the L1, nothing is cached. Queries that exist on both contract generations
/// are resolved following an explicit [`Precedence`]: the fallback generation is only queried when
/// the primary one fails, and the error of the fallback generation is returned when both fail.
pub struct L1Client<L, M, H> {
    /// The legacy single-rollup contract.
    legacy: L,
    /// The rollup manager contract.
    manager: M,
    /// The provider of L1 headers.
    header_provider: H,
    /// The identifier of the rollup in the rollup manager.
    rollup_id: RollupId,
    /// The chain id of the L1.
    l1_chain_id: u64,
    /// The metrics of the client.
    metrics: L1ClientMetrics,
}

impl<L, M, H> L1Client<L, M, H> {
    /// Returns a new [`L1Client`] from the provided contracts.
    pub fn new(
        legacy: L,
        manager: M,
        header_provider: H,
        rollup_id: RollupId,
        l1_chain_id: u64,
    ) -> Self {
        Self {
            legacy,
            manager,
            header_provider,
            rollup_id,
            l1_chain_id,
            metrics: L1ClientMetrics::default(),
        }
    }

    /// Returns the identifier of the rollup in the rollup manager.
    pub const fn rollup_id(&self) -> RollupId {
        self.rollup_id
    }

    /// Returns the chain id of the L1.
    pub const fn l1_chain_id(&self) -> u64 {
        self.l1_chain_id
    }
}

impl<P: Provider + Clone> L1Client<LegacyRollupContract<P>, RollupManager<P>, P> {
    /// Returns a new [`L1Client`] reading both contract generations and the L1 headers from the
    /// provided L1 provider.
    pub fn from_provider(provider: P, config: &L1Config) -> Self {
        Self::new(
            LegacyRollupContract::new(config.address_book.legacy_rollup, provider.clone()),
            RollupManager::new(config.address_book.rollup_manager, provider.clone()),
            provider,
            config.rollup_id,
            config.l1_chain_id,
        )
    }
}

impl<L, M, H> L1Client<L, M, H>
where
    L: RollupStateSource,
    M: RollupManagerContract,
    H: L1HeaderProvider,
{
    fn source(&self, generation: ContractGeneration) -> &dyn RollupStateSource {
        match generation {
            ContractGeneration::Manager => &self.manager,
            ContractGeneration::Legacy => &self.legacy,
        }
    }

    /// Returns the last batch of the rollup verified on the L1.
    pub async fn latest_verified_batch(&self) -> Result<u64, L1ClientError> {
        let Precedence { primary, fallback } = LATEST_VERIFIED_BATCH_PRECEDENCE;

        match self.source(primary).last_verified_batch(self.rollup_id).await {
            Ok(batch) => return Ok(batch),
            Err(err) => {
                tracing::debug!(target: "bridge::providers", %primary, %fallback, ?err, "Failed to get last verified batch, falling back");
                self.metrics.record_fallback(fallback);
            }
        }

        Ok(self.source(fallback).last_verified_batch(self.rollup_id).await?)
    }

    /// Returns the L2 chain id of the rollup.
    ///
    /// A zero chain id is never valid: if the primary generation reports it, the fallback
    /// generation is queried, and if the fallback reports it as well, an
    /// [`L1ClientError::EmptyChainId`] is returned.
    pub async fn l2_chain_id(&self) -> Result<u64, L1ClientError> {
        let Precedence { primary, fallback } = L2_CHAIN_ID_PRECEDENCE;

        match self.source(primary).chain_id(self.rollup_id).await {
            Ok(chain_id) if chain_id != 0 => return Ok(chain_id),
            Ok(_) => {
                tracing::debug!(target: "bridge::providers", %primary, %fallback, "Received zero chain id, falling back");
            }
            Err(err) => {
                tracing::debug!(target: "bridge::providers", %primary, %fallback, ?err, "Failed to get chain id, falling back");
            }
        }
        self.metrics.record_fallback(fallback);

        match self.source(fallback).chain_id(self.rollup_id).await? {
            0 => Err(L1ClientError::EmptyChainId { rollup_id: self.rollup_id }),
            chain_id => {
                tracing::debug!(target: "bridge::providers", %fallback, chain_id, rollup_id = self.rollup_id, "Read chain id");
                Ok(chain_id)
            }
        }
    }

    /// Returns the accumulated input hash of the provided batch, as sequenced in the rollup
    /// manager.
    pub async fn acc_input_hash(&self, batch_number: u64) -> Result<B256, L1ClientError> {
        Ok(self.manager.acc_input_hash(self.rollup_id, batch_number).await?)
    }

    /// Returns the header of the latest L1 block, as reported by the L1 node.
    pub async fn latest_l1_block_header(&self) -> Result<Option<Header>, L1ClientError> {
        Ok(self.header_provider.latest_header().await?)
    }

    /// Builds the destination and calldata of the `verifyBatchesTrustedAggregator` call verifying
    /// the batches `last_verified_batch..=new_verified_batch` with the provided final proof.
    ///
    /// The call is shaped with a throwaway [`EphemeralAuth`] and never sent.
    pub fn build_trusted_verify_batches_tx_data(
        &self,
        last_verified_batch: u64,
        new_verified_batch: u64,
        inputs: &FinalProofInputs,
        beneficiary: Address,
    ) -> Result<VerifyBatchesCalldata, L1ClientError> {
        let auth = EphemeralAuth::random(self.l1_chain_id).map_err(L1ClientError::Auth)?;

        let new_local_exit_root = fixed_root("new local exit root", &inputs.new_local_exit_root)?;
        let new_state_root = fixed_root("new state root", &inputs.new_state_root)?;

        let proof = encode_proof(&inputs.final_proof).inspect_err(|err| {
            tracing::error!(target: "bridge::providers", ?err, proof_length = inputs.final_proof.len(), "Error converting proof");
        })?;

        let call = verifyBatchesTrustedAggregatorCall {
            rollupID: self.rollup_id,
            pendingStateNum: PENDING_STATE_NUM,
            initNumBatch: last_verified_batch,
            finalNewBatch: new_verified_batch,
            newLocalExitRoot: new_local_exit_root,
            newStateRoot: new_state_root,
            beneficiary,
            proof,
        };
        let tx = self
            .manager
            .verify_batches_trusted_aggregator(&auth, call)
            .map_err(normalize_contract_error)?;

        let TxKind::Call(to) = tx.tx().to else {
            return Err(L1ClientError::MissingDestination);
        };
        self.metrics.verify_calldata_builds.increment(1);
        tracing::trace!(target: "bridge::providers", last_verified_batch, new_verified_batch, ?to, "Built trusted verify batches calldata");

        Ok(VerifyBatchesCalldata { to, data: tx.tx().input.clone() })
    }
}

/// Copies the root into a 32 byte word, failing on any other length.
fn fixed_root(field: &'static str, root: &[u8]) -> Result<B256, L1ClientError> {
    if root.len() != B256::len_bytes() {
        return Err(L1ClientError::InvalidRootLength { field, length: root.len() });
    }
    Ok(B256::from_slice(root))
}

impl<L: fmt::Debug, M: fmt::Debug, H> fmt::Debug for L1Client<L, M, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("L1Client")
            .field("legacy", &self.legacy)
            .field("manager", &self.manager)
            .field("rollup_id", &self.rollup_id)
            .field("l1_chain_id", &self.l1_chain_id)
            .finish_non_exhaustive()
    }
}
