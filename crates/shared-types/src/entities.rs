//! # Core Domain Entities
//!
//! Defines the entities shared by the randomness subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`
//! - **Randomness**: `Hash`, `U256` secrets and final values
//! - **Rounds & Funds**: `RoundId`, `RequestId`, `Amount`

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
///
/// Callers are identified by address only; the ledger authenticates
/// the sender before any operation reaches a subsystem.
pub type Address = [u8; 20];

/// Identifier of a randomness round inside the round arena.
pub type RoundId = u64;

/// Identifier of an outstanding oracle randomness request.
pub type RequestId = u64;

/// An amount of funds in wei.
pub type Amount = u128;

/// One wei-denominated ether, for readable fee constants in tests.
pub const ETHER: Amount = 1_000_000_000_000_000_000;

/// Render an address as `0x`-prefixed hex (log output).
pub fn display_address(addr: &Address) -> String {
    format!("0x{}", hex::encode(addr))
}

/// A participant's entry as seen from outside the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub address: Address,
    pub commitment: Hash,
    pub deposit: Amount,
    pub revealed: bool,
    pub slashed: bool,
}
