use alloy_primitives::Address;

/// The identifier of a rollup inside the rollup manager contract.
pub type RollupId = u32;

/// The L1 configuration shared by the bridge components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1Config {
    /// The chain id of the L1.
    pub l1_chain_id: u64,
    /// The identifier of the rollup in the rollup manager contract.
    pub rollup_id: RollupId,
    /// The addresses of the L1 contracts.
    pub address_book: ContractAddressBook,
}

/// The addresses of the two contract generations tracking the rollup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractAddressBook {
    /// The address of the multi-rollup manager contract.
    pub rollup_manager: Address,
    /// The address of the legacy single-rollup contract.
    pub legacy_rollup: Address,
}
