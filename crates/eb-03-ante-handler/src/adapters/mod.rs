//! # Adapters Layer
//!
//! - `memory_store`: in-memory `AccountStore` for tests and tooling
//! - `cache_store`: write buffer giving the caller a commit/rollback boundary
//! - `gas_store`: charges a gas meter for each store access

pub mod cache_store;
pub mod gas_store;
pub mod memory_store;
