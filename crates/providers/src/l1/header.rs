use crate::L1ContractError;

use alloy_provider::Provider;
use alloy_rpc_types_eth::{BlockNumberOrTag, Header};

/// Provides access to the headers of the L1.
#[async_trait::async_trait]
pub trait L1HeaderProvider: Send + Sync {
    /// Returns the header of the latest L1 block, or [`None`] if the node has no head yet.
    async fn latest_header(&self) -> Result<Option<Header>, L1ContractError>;
}

#[async_trait::async_trait]
impl<P: Provider> L1HeaderProvider for P {
    async fn latest_header(&self) -> Result<Option<Header>, L1ContractError> {
        let block = self.get_block_by_number(BlockNumberOrTag::Latest).await?;
        Ok(block.map(|block| block.header))
    }
}
