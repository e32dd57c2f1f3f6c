//! # rc-01-commit-reveal
//!
//! RANDAO-style commit-reveal randomness engine.
//!
//! ## Architecture
//!
//! A round walks `Commit -> Reveal -> Finalized`. Entrants stake a
//! fixed deposit alongside a keccak commitment, later disclose the
//! preimage, and the round finalizes as the XOR of every revealed
//! secret in commit order:
//!
//! ```text
//! commit(hash) + fee ──► [Registry] ──► startRevealPhase ──► reveal(secret)
//!                                                                │
//!                        slash(target) ◄── deadline passed ──────┤
//!                                                                ▼
//!                                        getFinalRandom = XOR(revealed)
//! ```
//!
//! ## Threat Model
//!
//! Partial reveals still finalize, so the last revealer can compute
//! the outcome in advance and withhold an unfavorable secret. That
//! asymmetry is inherent to the protocol and deliberately kept; the
//! only counter-pressure is the slashing enforcer, which forfeits an
//! unrevealed deposit to whoever calls it after the deadline. The
//! deterrent works exactly when the penalty is at least the
//! attacker's expected gain.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rc_01_commit_reveal::{BeaconService, BeaconConfig};
//! use rc_01_commit_reveal::adapters::{InMemoryEventBus, InMemoryLedger};
//!
//! let service = BeaconService::new(event_bus, ledger, BeaconConfig::default());
//! let round = service.open_round(entry_fee);
//! service.submit_commit(round, alice, commitment, entry_fee)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{InMemoryEventBus, InMemoryLedger, ManualTimeSource};
pub use domain::{
    aggregate, commitment_hash, verify_commitment, Participant, Phase, Registry, Round,
    RoundError, RoundResult,
};
pub use events::{
    BeaconEvent, ParticipantSlashedEvent, RandomnessFinalizedEvent, RevealConfirmedEvent,
};
pub use ports::{EventSink, FundsLedger, LedgerError, RandomBeaconApi, TimeSource};
pub use service::{BeaconConfig, BeaconService};
