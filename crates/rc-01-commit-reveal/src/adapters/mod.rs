//! Adapters layer (hexagonal architecture)

mod clock;
mod event_bus;
mod ledger;

pub use clock::*;
pub use event_bus::*;
pub use ledger::*;
