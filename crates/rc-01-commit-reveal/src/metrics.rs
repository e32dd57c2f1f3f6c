//! # Commit-Reveal Metrics
//!
//! Prometheus metrics for monitoring the randomness rounds.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! rc-01-commit-reveal = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `beacon_rounds_created_total` - Counter of rounds opened
//! - `beacon_commits_total` - Counter of accepted commitments
//! - `beacon_reveals_total` - Counter of verified reveals
//! - `beacon_rounds_finalized_total` - Counter of finalized rounds
//! - `beacon_slashes_total` - Counter of forfeited deposits

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total rounds opened
    pub static ref ROUNDS_CREATED: IntCounter = register_int_counter!(
        "beacon_rounds_created_total",
        "Total number of randomness rounds opened"
    )
    .expect("Failed to create ROUNDS_CREATED metric");

    /// Total commitments accepted
    pub static ref COMMITS: IntCounter = register_int_counter!(
        "beacon_commits_total",
        "Total number of commitments accepted"
    )
    .expect("Failed to create COMMITS metric");

    /// Total reveals verified
    pub static ref REVEALS: IntCounter = register_int_counter!(
        "beacon_reveals_total",
        "Total number of reveals verified"
    )
    .expect("Failed to create REVEALS metric");

    /// Total rounds finalized
    pub static ref ROUNDS_FINALIZED: IntCounter = register_int_counter!(
        "beacon_rounds_finalized_total",
        "Total number of rounds finalized"
    )
    .expect("Failed to create ROUNDS_FINALIZED metric");

    /// Total deposits forfeited
    pub static ref SLASHES: IntCounter = register_int_counter!(
        "beacon_slashes_total",
        "Total number of deposits forfeited to slashing callers"
    )
    .expect("Failed to create SLASHES metric");
}

/// Record a round creation
#[cfg(feature = "metrics")]
pub fn record_round_created() {
    ROUNDS_CREATED.inc();
}

/// Record an accepted commitment
#[cfg(feature = "metrics")]
pub fn record_commit() {
    COMMITS.inc();
}

/// Record a verified reveal
#[cfg(feature = "metrics")]
pub fn record_reveal() {
    REVEALS.inc();
}

/// Record a finalized round
#[cfg(feature = "metrics")]
pub fn record_round_finalized() {
    ROUNDS_FINALIZED.inc();
}

/// Record a slashing payout
#[cfg(feature = "metrics")]
pub fn record_slash() {
    SLASHES.inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_round_created() {}

#[cfg(not(feature = "metrics"))]
pub fn record_commit() {}

#[cfg(not(feature = "metrics"))]
pub fn record_reveal() {}

#[cfg(not(feature = "metrics"))]
pub fn record_round_finalized() {}

#[cfg(not(feature = "metrics"))]
pub fn record_slash() {}
