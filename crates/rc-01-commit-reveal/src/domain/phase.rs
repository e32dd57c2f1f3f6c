//! Round lifecycle phases.
//!
//! `Commit -> Reveal -> Finalized`, no transition reversible. Every
//! participant-facing operation is gated on the current phase.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a randomness round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting commitments (initial phase).
    Commit,
    /// Accepting reveals; slashing becomes possible after the deadline.
    Reveal,
    /// Final random value computed (terminal phase).
    Finalized,
}

impl Phase {
    /// Whether `self` may transition directly to `next`.
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Commit, Phase::Reveal) | (Phase::Reveal, Phase::Finalized)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Commit => write!(f, "Commit"),
            Phase::Reveal => write!(f, "Reveal"),
            Phase::Finalized => write!(f, "Finalized"),
        }
    }
}
