//! # Error Types
//!
//! Errors shared across crates.

use crate::entities::Address;
use thiserror::Error;

/// Errors reported by an account store.
///
/// The ante handler surfaces these verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No account is stored for this address.
    #[error("Account for address {0:?} not in state")]
    UnknownAccount(Address),

    /// `create_account` was called for an existing address.
    #[error("Account for address {0:?} already exists")]
    AccountExists(Address),

    /// Sequence would exceed `i64::MAX`.
    #[error("Sequence overflow for account {0:?}")]
    SequenceOverflow(Address),

    /// Record could not be encoded or decoded.
    #[error("Account codec failure: {0}")]
    Codec(String),

    /// A store lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Errors parsing a chain identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainIdError {
    /// Input is not a base-10 integer.
    #[error("Chain id {0:?} is not a base-10 integer")]
    NotDecimal(String),

    /// Input does not fit in 256 bits.
    #[error("Chain id {0:?} exceeds 256 bits")]
    Overflow(String),
}
