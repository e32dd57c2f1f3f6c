//! Commitment hashing and verification.
//!
//! A commitment is the Keccak-256 digest of the secret encoded as a
//! 32-byte big-endian word (the packed encoding of a single uint256).
//! The commitment is binding (the secret cannot be swapped afterwards)
//! and hiding (the digest discloses nothing about the secret until the
//! reveal phase).

use sha3::{Digest, Keccak256};
use shared_types::{Hash, U256};

/// Compute the commitment hash for a secret.
pub fn commitment_hash(secret: U256) -> Hash {
    let mut word = [0u8; 32];
    secret.to_big_endian(&mut word);

    let digest = Keccak256::digest(word);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Check that a revealed secret matches a stored commitment.
pub fn verify_commitment(commitment: &Hash, secret: U256) -> bool {
    commitment_hash(secret) == *commitment
}
