//! Conversion between the hex encoded final proof and its on-chain representation.

use crate::{PROOF_HEX_LENGTH, PROOF_WORDS, PROOF_WORD_HEX_LENGTH};

use alloy_primitives::{hex, B256};

/// The on-chain representation of a final proof, as expected by the verifier.
pub type EncodedProof = [B256; PROOF_WORDS];

/// An error that occurred when encoding a final proof.
#[derive(Debug, thiserror::Error)]
pub enum ProofCodecError {
    /// The proof does not have the expected length.
    #[error("invalid proof length: expected {PROOF_HEX_LENGTH} hex characters, got {length}")]
    InvalidLength {
        /// The length of the provided proof, without its `0x` prefix.
        length: usize,
    },
    /// A word of the proof is not valid hex.
    #[error("failed to decode proof word {index}: {source}")]
    InvalidHex {
        /// The index of the offending word.
        index: usize,
        /// The underlying hex error.
        #[source]
        source: hex::FromHexError,
    },
}

/// Encodes the hex proof into [`PROOF_WORDS`] 32 byte words, preserving the order of the input.
///
/// The proof may carry a `0x` prefix. Its remaining length must be exactly [`PROOF_HEX_LENGTH`].
pub fn encode_proof(proof: &str) -> Result<EncodedProof, ProofCodecError> {
    let proof = proof.strip_prefix("0x").unwrap_or(proof);
    if proof.len() != PROOF_HEX_LENGTH {
        return Err(ProofCodecError::InvalidLength { length: proof.len() });
    }

    let mut encoded = [B256::ZERO; PROOF_WORDS];
    for (index, (word, chunk)) in
        encoded.iter_mut().zip(proof.as_bytes().chunks_exact(PROOF_WORD_HEX_LENGTH)).enumerate()
    {
        hex::decode_to_slice(chunk, word.as_mut_slice())
            .map_err(|source| ProofCodecError::InvalidHex { index, source })?;
    }

    Ok(encoded)
}

/// Returns the `0x` prefixed hex representation of the encoded proof.
pub fn decode_proof(proof: &EncodedProof) -> String {
    let mut decoded = String::with_capacity(2 + PROOF_HEX_LENGTH);
    decoded.push_str("0x");
    for word in proof {
        decoded.push_str(&hex::encode(word));
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a proof where every byte of word `i` equals `i`.
    fn sequential_proof() -> String {
        let mut proof = String::from("0x");
        for i in 0..PROOF_WORDS as u8 {
            proof.push_str(&hex::encode([i; 32]));
        }
        proof
    }

    #[test]
    fn test_encode_sequential_proof() {
        let encoded = encode_proof(&sequential_proof()).unwrap();

        assert_eq!(encoded.len(), PROOF_WORDS);
        for (i, word) in encoded.iter().enumerate() {
            assert_eq!(word, &B256::repeat_byte(i as u8));
        }
    }

    #[test]
    fn test_encode_without_prefix() {
        let proof = sequential_proof();
        let prefixed = encode_proof(&proof).unwrap();
        let unprefixed = encode_proof(proof.trim_start_matches("0x")).unwrap();

        assert_eq!(prefixed, unprefixed);
        assert_eq!(decode_proof(&unprefixed), proof);
    }

    #[test]
    fn test_encode_concatenation_matches_input() {
        let proof = "ab".repeat(PROOF_HEX_LENGTH / 2);
        let encoded = encode_proof(&proof).unwrap();

        let concatenated: Vec<u8> = encoded.iter().flat_map(|w| w.0).collect();
        assert_eq!(hex::encode(concatenated), proof);
    }

    #[test]
    fn test_encode_invalid_length() {
        for length in [0, 2, PROOF_HEX_LENGTH - 2, PROOF_HEX_LENGTH + 2, PROOF_HEX_LENGTH * 2] {
            let proof = format!("0x{}", "0".repeat(length));
            let err = encode_proof(&proof).unwrap_err();
            assert!(
                matches!(err, ProofCodecError::InvalidLength { length: l } if l == length),
                "unexpected error for length {length}: {err}"
            );
        }

        // a proof that only has the right length when counting its prefix.
        let proof = format!("0x{}", "0".repeat(PROOF_HEX_LENGTH - 2));
        assert!(matches!(encode_proof(&proof), Err(ProofCodecError::InvalidLength { .. })));
    }

    #[test]
    fn test_encode_invalid_hex() {
        let mut proof = sequential_proof();
        // corrupt the first character of word 5.
        let position = 2 + 5 * PROOF_WORD_HEX_LENGTH;
        proof.replace_range(position..position + 1, "z");

        let err = encode_proof(&proof).unwrap_err();
        assert!(matches!(err, ProofCodecError::InvalidHex { index: 5, .. }));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let proof = sequential_proof();
        assert_eq!(encode_proof(&proof).unwrap(), encode_proof(&proof).unwrap());
    }
}
