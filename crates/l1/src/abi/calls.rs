use alloy_sol_types::sol;

sol! {
    /// The legacy contract tracking a single rollup, predating the rollup manager.
    #[allow(missing_docs)]
    #[derive(Debug)]
    interface LegacyRollup {
        function lastVerifiedBatch() external view returns (uint64);

        function chainID() external view returns (uint64);
    }
}

sol! {
    /// The rollup manager contract tracking the verification state of multiple rollups.
    #[allow(missing_docs)]
    #[derive(Debug)]
    interface RollupManager {
        struct SequencedBatchData {
            bytes32 accInputHash;
            uint64 sequencedTimestamp;
            uint64 previousLastBatchSequenced;
        }

        function rollupIDToRollupData(uint32 rollupID) external view returns (
            address rollupContract,
            uint64 chainID,
            address verifier,
            uint64 forkID,
            bytes32 lastLocalExitRoot,
            uint64 lastBatchSequenced,
            uint64 lastVerifiedBatch,
            uint64 lastPendingState,
            uint64 lastPendingStateConsolidated,
            uint64 lastVerifiedBatchBeforeUpgrade,
            uint64 rollupTypeID,
            uint8 rollupCompatibilityID
        );

        function getRollupSequencedBatches(uint32 rollupID, uint64 batchNum)
            external
            view
            returns (SequencedBatchData memory);

        function verifyBatchesTrustedAggregator(
            uint32 rollupID,
            uint64 pendingStateNum,
            uint64 initNumBatch,
            uint64 finalNewBatch,
            bytes32 newLocalExitRoot,
            bytes32 newStateRoot,
            address beneficiary,
            bytes32[24] calldata proof
        ) external;
    }
}
