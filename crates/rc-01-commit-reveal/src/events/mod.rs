//! Event types published by this subsystem.

mod published;

pub use published::*;
