//! # Chain Identifier
//!
//! The execution context carries the chain id as a string; signatures and the
//! EIP-155 `v` value need it as an integer.

use crate::entities::U256;
use crate::errors::ChainIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer chain identifier used by the replay-protected signature scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChainId(U256);

impl ChainId {
    /// Wrap an integer chain id.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Parse a base-10 chain id string.
    ///
    /// Only ASCII digits are accepted: no sign, no whitespace, no `0x` prefix.
    pub fn parse(s: &str) -> Result<Self, ChainIdError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChainIdError::NotDecimal(s.to_string()));
        }
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| ChainIdError::Overflow(s.to_string()))
    }

    /// Chain id 0 selects the legacy, unprotected signature scheme.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The chain id as a 256-bit integer.
    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for ChainId {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
