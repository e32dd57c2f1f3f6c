//! Error types for the lottery subsystem.

use rc_01_commit_reveal::RoundError;
use rc_02_vrf_oracle::OracleError;
use shared_types::{Address, Amount};

/// Lottery error types.
#[derive(Debug, thiserror::Error)]
pub enum LotteryError {
    #[error(transparent)]
    Beacon(#[from] RoundError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("ticket price mismatch: required {required} wei, got {got} wei")]
    WrongTicketPrice { required: Amount, got: Amount },

    #[error("no players entered")]
    NoPlayers,

    #[error("a draw is already pending")]
    DrawPending,

    #[error("caller is not the owner: 0x{}", hex::encode(.0))]
    NotOwner(Address),

    #[error("ledger error: {0}")]
    Ledger(String),
}

/// Result type for lottery operations.
pub type LotteryResult<T> = Result<T, LotteryError>;
