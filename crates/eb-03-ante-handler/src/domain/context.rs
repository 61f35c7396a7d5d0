//! # Execution Context
//!
//! Per-transaction state handed to the ante handler by the host: the chain
//! id string and the gas meter. The handler returns it, possibly with a new
//! meter installed.

use super::gas::GasMeter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    chain_id: String,
    gas_meter: GasMeter,
}

impl Context {
    /// Context with an infinite meter.
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            gas_meter: GasMeter::infinite(),
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn gas_meter(&self) -> &GasMeter {
        &self.gas_meter
    }

    pub fn gas_meter_mut(&mut self) -> &mut GasMeter {
        &mut self.gas_meter
    }

    /// Replace the gas meter.
    pub fn with_gas_meter(mut self, meter: GasMeter) -> Self {
        self.gas_meter = meter;
        self
    }
}
