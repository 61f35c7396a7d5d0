//! # Carrier Address
//!
//! The reserved recipient that marks a wire transaction's payload as an
//! embedded batch. Fixed at construction of the ante handler.

use eb_types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved recipient address for embedded-batch carriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierAddress(Address);

impl CarrierAddress {
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn address(&self) -> Address {
        self.0
    }

    /// The zero address cannot be a carrier.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Address> for CarrierAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for CarrierAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
