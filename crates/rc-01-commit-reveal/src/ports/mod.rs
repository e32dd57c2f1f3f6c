//! Ports layer (hexagonal architecture)

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
