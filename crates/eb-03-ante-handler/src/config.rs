//! # Ante Configuration
//!
//! Loaded by the host at start-up and passed to the handler's constructor.
//! Gas costs have defaults; the carrier address must be provided.

use eb_02_wire_transaction::CarrierAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gas charged by store access and signature checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasConfig {
    /// Flat cost of every read.
    pub read_cost_flat: u64,
    /// Cost per byte read.
    pub read_cost_per_byte: u64,
    /// Flat cost of every write.
    pub write_cost_flat: u64,
    /// Cost per byte written.
    pub write_cost_per_byte: u64,
    /// Cost of an existence check.
    pub has_cost: u64,
    /// Cost of one embedded signature verification.
    pub sig_verify_cost: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            read_cost_flat: 10,
            read_cost_per_byte: 1,
            write_cost_flat: 10,
            write_cost_per_byte: 10,
            has_cost: 10,
            sig_verify_cost: 100,
        }
    }
}

impl GasConfig {
    /// Cost of reading a record of `len` bytes.
    pub fn read_cost(&self, len: u64) -> u64 {
        self.read_cost_flat
            .saturating_add(self.read_cost_per_byte.saturating_mul(len))
    }

    /// Cost of writing a record of `len` bytes.
    pub fn write_cost(&self, len: u64) -> u64 {
        self.write_cost_flat
            .saturating_add(self.write_cost_per_byte.saturating_mul(len))
    }
}

/// Handler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnteConfig {
    /// Recipient that marks a transaction as an embedded-batch carrier.
    pub carrier_address: CarrierAddress,
    #[serde(default)]
    pub gas: GasConfig,
}

impl AnteConfig {
    pub fn new(carrier_address: CarrierAddress) -> Self {
        Self {
            carrier_address,
            gas: GasConfig::default(),
        }
    }

    pub fn with_gas(mut self, gas: GasConfig) -> Self {
        self.gas = gas;
        self
    }

    /// Reject configurations the handler cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carrier_address.is_zero() {
            return Err(ConfigError::ZeroCarrierAddress);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The zero address would turn contract creations into carriers.
    #[error("Carrier address must not be the zero address")]
    ZeroCarrierAddress,
}
