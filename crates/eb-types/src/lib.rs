//! # Shared Types Crate
//!
//! Primitives shared across the bridge crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Hash`, `ChainId` and the `Account`
//!   record are defined once here and re-used by every subsystem.
//! - **Foreign-Chain Compatibility**: `Address` and `U256` are the
//!   `primitive-types` values whose RLP encoding matches the foreign chain's.

pub mod chain;
pub mod entities;
pub mod errors;

pub use chain::ChainId;
pub use entities::*;
pub use errors::*;
