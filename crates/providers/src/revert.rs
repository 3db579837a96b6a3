use crate::L1ContractError;

use alloy_transport::RpcError;
use rollup_bridge_l1::{decode_revert_data, extract_revert_data, RevertReason};

/// Tries to decode a revert reason out of the contract error.
///
/// The revert data is looked up in the JSON-RPC error payload first, then in the error message.
pub fn try_parse_revert(err: &L1ContractError) -> Option<RevertReason> {
    let data = match err {
        L1ContractError::Reverted(_) => return None,
        L1ContractError::Rpc(RpcError::ErrorResp(payload)) => {
            payload.as_revert_data().or_else(|| extract_revert_data(&payload.message))
        }
        err => extract_revert_data(&err.to_string()),
    }?;
    decode_revert_data(&data)
}

/// Rewrites the contract error into [`L1ContractError::Reverted`] if it carries a known revert
/// reason, returns it unchanged otherwise.
pub fn normalize_contract_error(err: L1ContractError) -> L1ContractError {
    match try_parse_revert(&err) {
        Some(reason) => {
            tracing::debug!(target: "bridge::providers", %reason, ?err, "Decoded contract revert reason");
            L1ContractError::Reverted(reason)
        }
        None => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_json_rpc::ErrorPayload;
    use alloy_primitives::hex;
    use alloy_sol_types::{Revert, SolError};
    use alloy_transport::TransportErrorKind;
    use rollup_bridge_l1::abi::errors::RollupManagerErrors;

    #[test]
    fn test_normalize_error_string_revert() {
        let data = Revert { reason: "batch already verified".to_owned() }.abi_encode();
        let err = L1ContractError::Rpc(TransportErrorKind::custom_str(&format!(
            "execution reverted: 0x{}",
            hex::encode(data)
        )));

        let normalized = normalize_contract_error(err);
        assert!(matches!(
            normalized,
            L1ContractError::Reverted(RevertReason::Message(ref reason)) if reason == "batch already verified"
        ));
    }

    #[test]
    fn test_normalize_custom_error() {
        let data = RollupManagerErrors::FinalNumBatchBelowLastVerifiedBatch {}.abi_encode();
        let err = L1ContractError::Rpc(TransportErrorKind::custom_str(&format!(
            "execution reverted: 0x{}",
            hex::encode(data)
        )));

        assert_eq!(
            try_parse_revert(&err),
            Some(RevertReason::Custom("FinalNumBatchBelowLastVerifiedBatch()"))
        );
    }

    #[test]
    fn test_normalize_unknown_error_is_unchanged() {
        let err = L1ContractError::Rpc(TransportErrorKind::custom_str("connection refused"));

        let normalized = normalize_contract_error(err);
        assert!(matches!(normalized, L1ContractError::Rpc(_)));
        assert_eq!(normalized.to_string(), "l1 rpc error: connection refused");
    }

    #[test]
    fn test_normalize_error_payload_revert() {
        let data = Revert { reason: "batch already verified".to_owned() }.abi_encode();
        let payload: ErrorPayload = serde_json::from_str(&format!(
            r#"{{"code":3,"message":"execution reverted","data":"0x{}"}}"#,
            hex::encode(data)
        ))
        .unwrap();
        let err = L1ContractError::Rpc(RpcError::ErrorResp(payload));

        let normalized = normalize_contract_error(err);
        assert!(matches!(
            normalized,
            L1ContractError::Reverted(RevertReason::Message(ref reason)) if reason == "batch already verified"
        ));
    }

    #[test]
    fn test_normalize_revert_after_address() {
        let data = Revert { reason: "batch already verified".to_owned() }.abi_encode();
        let err = L1ContractError::Rpc(TransportErrorKind::custom_str(&format!(
            "eth_call to 0x5132A183E9F3CB7C848b0AAC5Ae0c4f0491B7aB2 failed: execution reverted: 0x{}",
            hex::encode(data)
        )));

        assert_eq!(
            try_parse_revert(&err),
            Some(RevertReason::Message("batch already verified".to_owned()))
        );
    }
}
