use alloy_sol_types::sol;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    interface RollupManagerErrors {
        error AddressDoNotHaveRequiredRole();
        error ExceedMaxVerifyBatches();
        error FinalNumBatchBelowLastVerifiedBatch();
        error FinalNumBatchDoesNotMatchPendingState();
        error InitNumBatchAboveLastVerifiedBatch();
        error InitNumBatchDoesNotMatchPendingState();
        error InvalidProof();
        error NewAccInputHashDoesNotExist();
        error NewStateRootNotInsidePrime();
        error OldAccInputHashDoesNotExist();
        error OldStateRootDoesNotExist();
        error OnlyNotEmergencyState();
        error PendingStateDoesNotExist();
        error RollupMustExist();
        error StoredRootMustBeDifferentThanNewRoot();
        error TrustedAggregatorTimeoutNotExpired();
    }
}
