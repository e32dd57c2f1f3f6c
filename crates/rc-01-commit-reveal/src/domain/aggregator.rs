//! Randomness aggregation.
//!
//! Folds every revealed secret into one value with bitwise XOR,
//! walking the ordering list in insertion order. Participants who
//! never revealed contribute nothing. This asymmetry is what makes
//! the last-revealer manipulation possible, and it is preserved here
//! on purpose so the slashing economics can be studied against it.
//!
//! Cost is O(n) in the number of entrants, the scalability contrast
//! point against the O(1) oracle baseline.

use super::registry::Registry;
use shared_types::U256;

/// XOR-combine the secrets of all revealed participants.
///
/// Deterministic for a fixed set of reveals; an empty or fully
/// withheld round aggregates to zero.
pub fn aggregate(registry: &Registry) -> U256 {
    registry
        .iter_ordered()
        .filter(|(_, p)| p.revealed)
        .filter_map(|(_, p)| p.secret)
        .fold(U256::zero(), |acc, secret| acc ^ secret)
}
