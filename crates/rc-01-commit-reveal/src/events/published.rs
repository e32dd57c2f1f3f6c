//! Published events (outgoing)
//!
//! Every state-changing outcome a collaborator may care about is
//! published through the `EventSink` port: reveals, finalization, and
//! slashing payouts. Measurement harnesses observe rounds exclusively
//! through these events.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, RoundId, U256};

/// Published after a successful reveal (the `LogReveal` notification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfirmedEvent {
    pub round_id: RoundId,
    pub participant: Address,
    /// The disclosed secret; public from this point on.
    pub secret: U256,
}

/// Published when a round finalizes (the `LogResult` notification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomnessFinalizedEvent {
    pub round_id: RoundId,
    /// XOR of all revealed secrets, in insertion order.
    pub value: U256,
}

/// Published when a deposit is forfeited to a slashing caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSlashedEvent {
    pub round_id: RoundId,
    pub target: Address,
    pub claimant: Address,
    pub amount: Amount,
}

/// All events the commit-reveal subsystem publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeaconEvent {
    RevealConfirmed(RevealConfirmedEvent),
    RandomnessFinalized(RandomnessFinalizedEvent),
    ParticipantSlashed(ParticipantSlashedEvent),
}

impl BeaconEvent {
    /// Round the event belongs to.
    pub fn round_id(&self) -> RoundId {
        match self {
            Self::RevealConfirmed(e) => e.round_id,
            Self::RandomnessFinalized(e) => e.round_id,
            Self::ParticipantSlashed(e) => e.round_id,
        }
    }
}
