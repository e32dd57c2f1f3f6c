//! # rc-03-lottery
//!
//! Lottery use case exercising both randomness sources.
//!
//! Two games with the same rules (buy a ticket, one entrant takes the
//! pot), differing only in where the winning index comes from:
//!
//! - [`RandaoLottery`]: the commit-reveal beacon (rc-01). Fully
//!   decentralized, O(n) draw, exposed to the last-revealer play.
//! - [`VrfLottery`]: the oracle baseline (rc-02). O(1) draw, immune to
//!   player manipulation, trusts the coordinator.

pub mod error;
pub mod randao;
pub mod vrf;

// Re-export main types
pub use error::{LotteryError, LotteryResult};
pub use randao::RandaoLottery;
pub use vrf::VrfLottery;
