//! Test utils for providers.

use crate::{
    ContractGeneration, L1ContractError, L1HeaderProvider, RollupManagerContract,
    RollupStateSource,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use alloy_consensus::{Signed, TxLegacy};
use alloy_primitives::{address, Address, B256};
use alloy_rpc_types_eth::Header;
use alloy_sol_types::SolCall;
use alloy_transport::TransportErrorKind;
use rollup_bridge_l1::abi::calls::RollupManager::verifyBatchesTrustedAggregatorCall;
use rollup_bridge_primitives::RollupId;
use rollup_bridge_signer::EphemeralAuth;

/// The address of the mocked rollup manager.
pub const MOCK_ROLLUP_MANAGER_ADDRESS: Address =
    address!("0x32d33D5137a7cFFb54c5Bf8371172bcEc5f310ff");

/// The address of the mocked legacy rollup.
pub const MOCK_LEGACY_ROLLUP_ADDRESS: Address =
    address!("0xA13Ddb14437A8F34897131367ad3ca78416d6bCa");

/// A mocked contract generation. Every unset value fails with an RPC error.
///
/// Clones share the call counter.
#[derive(Debug, Clone)]
pub struct MockRollupContract {
    generation: ContractGeneration,
    address: Address,
    last_verified_batch: Option<u64>,
    chain_id: Option<u64>,
    acc_input_hashes: HashMap<u64, B256>,
    build_error: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockRollupContract {
    fn new(generation: ContractGeneration, address: Address) -> Self {
        Self {
            generation,
            address,
            last_verified_batch: None,
            chain_id: None,
            acc_input_hashes: HashMap::new(),
            build_error: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a mocked rollup manager.
    pub fn manager() -> Self {
        Self::new(ContractGeneration::Manager, MOCK_ROLLUP_MANAGER_ADDRESS)
    }

    /// Returns a mocked legacy rollup.
    pub fn legacy() -> Self {
        Self::new(ContractGeneration::Legacy, MOCK_LEGACY_ROLLUP_ADDRESS)
    }

    /// Sets the last verified batch answered by the contract.
    pub const fn with_last_verified_batch(mut self, batch: Option<u64>) -> Self {
        self.last_verified_batch = batch;
        self
    }

    /// Sets the chain id answered by the contract.
    pub const fn with_chain_id(mut self, chain_id: Option<u64>) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Sets the accumulated input hash of the batch.
    pub fn with_acc_input_hash(mut self, batch_number: u64, hash: B256) -> Self {
        self.acc_input_hashes.insert(batch_number, hash);
        self
    }

    /// Makes the verify batches call fail with the provided RPC error message.
    pub fn with_build_error(mut self, message: impl Into<String>) -> Self {
        self.build_error = Some(message.into());
        self
    }

    /// Returns the address of the contract.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the amount of state queries answered by the contract.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn answer<T>(&self, value: Option<T>) -> Result<T, L1ContractError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        value.ok_or_else(|| {
            TransportErrorKind::custom_str(&format!("{} unavailable", self.generation)).into()
        })
    }
}

#[async_trait::async_trait]
impl RollupStateSource for MockRollupContract {
    async fn last_verified_batch(&self, _rollup_id: RollupId) -> Result<u64, L1ContractError> {
        self.answer(self.last_verified_batch)
    }

    async fn chain_id(&self, _rollup_id: RollupId) -> Result<u64, L1ContractError> {
        self.answer(self.chain_id)
    }
}

#[async_trait::async_trait]
impl RollupManagerContract for MockRollupContract {
    async fn acc_input_hash(
        &self,
        _rollup_id: RollupId,
        batch_number: u64,
    ) -> Result<B256, L1ContractError> {
        self.answer(self.acc_input_hashes.get(&batch_number).copied())
    }

    fn verify_batches_trusted_aggregator(
        &self,
        auth: &EphemeralAuth,
        call: verifyBatchesTrustedAggregatorCall,
    ) -> Result<Signed<TxLegacy>, L1ContractError> {
        if let Some(message) = &self.build_error {
            return Err(TransportErrorKind::custom_str(message).into());
        }
        Ok(auth.sign_call(self.address, call.abi_encode().into())?)
    }
}

/// A mocked L1 header provider.
#[derive(Debug, Clone, Default)]
pub struct MockHeaderProvider {
    header: Option<Header>,
}

impl MockHeaderProvider {
    /// Returns a new [`MockHeaderProvider`] answering the provided header.
    pub const fn new(header: Option<Header>) -> Self {
        Self { header }
    }
}

#[async_trait::async_trait]
impl L1HeaderProvider for MockHeaderProvider {
    async fn latest_header(&self) -> Result<Option<Header>, L1ContractError> {
        Ok(self.header.clone())
    }
}
