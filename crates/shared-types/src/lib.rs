//! # Shared Types Crate
//!
//! Domain entities shared by every subsystem crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-subsystem types live here.
//! - **Plain data**: entities carry no behavior beyond small helpers;
//!   the subsystem crates own the logic.

pub mod entities;

pub use entities::*;
