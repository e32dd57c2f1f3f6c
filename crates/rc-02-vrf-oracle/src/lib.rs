//! # rc-02-vrf-oracle
//!
//! Oracle-based randomness baseline.
//!
//! The commit-reveal engine (rc-01) is compared against an external
//! verifiable-random-function service. That service is opaque here:
//! the entire surface is a capability interface: `request_random`
//! returning a request id, and a single inbound `fulfill_random`
//! callback per request. Alongside it sits a mock coordinator with
//! subscription accounting, in the shape of the Chainlink V2 mock.
//!
//! Trust/cost trade-off captured by the tests: a consumer cannot
//! manipulate the delivered word (no withholding move exists), but
//! every draw trusts the coordinator and costs a base fee, O(1) per
//! draw regardless of participant count.

pub mod coordinator;
pub mod error;
pub mod game;
pub mod ports;

/// Identifier of a funded oracle subscription.
pub type SubscriptionId = u64;

// Re-export main types
pub use coordinator::MockVrfCoordinator;
pub use error::{OracleError, OracleResult};
pub use game::VrfGame;
pub use ports::{RandomnessConsumer, RandomnessOracle};
