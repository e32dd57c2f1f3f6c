//! Domain layer for the commit-reveal subsystem.
//!
//! Pure round logic, no I/O:
//! - phase: round lifecycle state machine
//! - registry: entrants, deposits, ordering list
//! - commitment: keccak commitment hashing/verification
//! - aggregator: XOR combination of revealed secrets
//! - slashing: deadline-gated deposit forfeiture
//! - round: one round tying the above together

mod aggregator;
mod commitment;
mod error;
mod phase;
mod registry;
mod round;
mod slashing;

pub use aggregator::*;
pub use commitment::*;
pub use error::*;
pub use phase::*;
pub use registry::*;
pub use round::*;
pub use slashing::*;
