//! Decoding of revert reasons returned by the L1 contracts.

use crate::abi::errors::RollupManagerErrors;

use alloy_primitives::{hex, Bytes, U256};
use alloy_sol_types::{Panic, Revert, SolError};
use core::fmt;

/// The selectors and signatures of the rollup manager custom errors.
const KNOWN_ERRORS: &[([u8; 4], &str)] = &[
    known_error::<RollupManagerErrors::AddressDoNotHaveRequiredRole>(),
    known_error::<RollupManagerErrors::ExceedMaxVerifyBatches>(),
    known_error::<RollupManagerErrors::FinalNumBatchBelowLastVerifiedBatch>(),
    known_error::<RollupManagerErrors::FinalNumBatchDoesNotMatchPendingState>(),
    known_error::<RollupManagerErrors::InitNumBatchAboveLastVerifiedBatch>(),
    known_error::<RollupManagerErrors::InitNumBatchDoesNotMatchPendingState>(),
    known_error::<RollupManagerErrors::InvalidProof>(),
    known_error::<RollupManagerErrors::NewAccInputHashDoesNotExist>(),
    known_error::<RollupManagerErrors::NewStateRootNotInsidePrime>(),
    known_error::<RollupManagerErrors::OldAccInputHashDoesNotExist>(),
    known_error::<RollupManagerErrors::OldStateRootDoesNotExist>(),
    known_error::<RollupManagerErrors::OnlyNotEmergencyState>(),
    known_error::<RollupManagerErrors::PendingStateDoesNotExist>(),
    known_error::<RollupManagerErrors::RollupMustExist>(),
    known_error::<RollupManagerErrors::StoredRootMustBeDifferentThanNewRoot>(),
    known_error::<RollupManagerErrors::TrustedAggregatorTimeoutNotExpired>(),
];

const fn known_error<E: SolError>() -> ([u8; 4], &'static str) {
    (E::SELECTOR, E::SIGNATURE)
}

/// The decoded reason of a reverted contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertReason {
    /// A revert with an `Error(string)` message.
    Message(String),
    /// A `Panic(uint256)` with its code.
    Panic(U256),
    /// A known custom error of the rollup manager, identified by its signature.
    Custom(&'static str),
}

impl fmt::Display for RevertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Panic(code) => write!(f, "panic with code {code:#x}"),
            Self::Custom(signature) => f.write_str(signature),
        }
    }
}

/// Tries to decode the revert data into a [`RevertReason`].
///
/// Returns [`None`] if the data is neither an `Error(string)`, a `Panic(uint256)` nor a known
/// rollup manager error.
pub fn decode_revert_data(data: &[u8]) -> Option<RevertReason> {
    if let Ok(revert) = Revert::abi_decode(data) {
        return Some(RevertReason::Message(revert.reason));
    }
    if let Ok(panic) = Panic::abi_decode(data) {
        return Some(RevertReason::Panic(panic.code));
    }

    let selector: [u8; 4] = data.get(..4)?.try_into().ok()?;
    KNOWN_ERRORS
        .iter()
        .find(|(known, _)| *known == selector)
        .map(|(_, signature)| RevertReason::Custom(signature))
}

/// Extracts revert data embedded in an error message.
///
/// Nodes commonly report reverts as `execution reverted: 0x...`, and the message may carry other
/// `0x` prefixed values such as the called address. The first `0x` prefixed hex sequence that
/// decodes into a [`RevertReason`] is returned.
pub fn extract_revert_data(message: &str) -> Option<Bytes> {
    message.match_indices("0x").find_map(|(start, _)| {
        let hex_part = &message[start + 2..];
        let end = hex_part.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(hex_part.len());

        let data = hex::decode(&hex_part[..end]).ok()?;
        decode_revert_data(&data).map(|_| data.into())
    })
}
