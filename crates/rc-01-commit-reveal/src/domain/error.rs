//! Error types for the commit-reveal subsystem.

use super::Phase;
use shared_types::{Address, Amount, RoundId};

/// Commit-reveal error types.
///
/// Every precondition violation maps to exactly one variant so callers
/// can distinguish the rejection reason. No variant leaves partial
/// state behind.
#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    #[error("unknown round: {0}")]
    UnknownRound(RoundId),

    #[error("wrong phase: expected {expected}, got {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("participant already committed: 0x{}", hex::encode(.0))]
    AlreadyCommitted(Address),

    #[error("deposit mismatch: required {required} wei, got {got} wei")]
    DepositMismatch { required: Amount, got: Amount },

    #[error("unknown participant: 0x{}", hex::encode(.0))]
    UnknownParticipant(Address),

    #[error("revealed secret does not match commitment of 0x{}", hex::encode(.0))]
    CommitmentMismatch(Address),

    #[error("participant already revealed: 0x{}", hex::encode(.0))]
    AlreadyRevealed(Address),

    #[error("participant already slashed: 0x{}", hex::encode(.0))]
    AlreadySlashed(Address),

    #[error("reveal window still open: {remaining_secs}s remaining")]
    RevealWindowOpen { remaining_secs: u64 },

    #[error("cannot slash a revealed participant: 0x{}", hex::encode(.0))]
    TargetRevealed(Address),

    #[error("ledger error: {0}")]
    Ledger(String),

    #[error("event sink error: {0}")]
    EventSink(String),
}

/// Result type for commit-reveal operations.
pub type RoundResult<T> = Result<T, RoundError>;
