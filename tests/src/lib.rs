//! # Randao-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-subsystem flows
//! │   ├── full_round.rs # Commit → reveal → finalize happy paths
//! │   ├── oracle.rs     # Oracle request/callback baseline
//! │   ├── lottery.rs    # Both lottery variants end to end
//! │   └── fairness.rs   # Distribution checks under honest play
//! │
//! └── exploits/         # Attack simulations
//!     ├── last_revealer.rs      # Withholding manipulation
//!     └── slashing_economics.rs # When the deterrent does (not) pay
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rc-tests
//!
//! # By category
//! cargo test -p rc-tests integration::
//! cargo test -p rc-tests exploits::
//! ```

#![allow(dead_code)]

pub mod exploits;
