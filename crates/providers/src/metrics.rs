use crate::ContractGeneration;

use metrics::Counter;
use metrics_derive::Metrics;

/// The metrics for the [`super::L1Client`].
#[derive(Metrics, Clone)]
#[metrics(scope = "l1_client")]
pub struct L1ClientMetrics {
    /// A counter on the queries forwarded to the legacy contract after the rollup manager failed,
    /// whether the legacy contract answers or not.
    pub legacy_fallbacks: Counter,
    /// A counter on the queries forwarded to the rollup manager after the legacy contract was
    /// unusable, whether the rollup manager answers or not.
    pub manager_fallbacks: Counter,
    /// A counter on the verify batches calldata built.
    pub verify_calldata_builds: Counter,
}

impl L1ClientMetrics {
    /// Records a fallback to the provided contract generation.
    pub fn record_fallback(&self, to: ContractGeneration) {
        match to {
            ContractGeneration::Legacy => self.legacy_fallbacks.increment(1),
            ContractGeneration::Manager => self.manager_fallbacks.increment(1),
        }
    }
}
