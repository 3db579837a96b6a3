//! A library containing the contract interfaces and encodings required to interact with the L1
//! rollup contracts.

pub mod abi;

mod constants;
pub use constants::*;

pub mod proof;
pub use proof::{decode_proof, encode_proof, EncodedProof, ProofCodecError};

pub mod revert;
pub use revert::{decode_revert_data, extract_revert_data, RevertReason};
