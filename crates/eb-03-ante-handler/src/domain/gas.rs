//! # Gas Metering
//!
//! A bounded meter whose every charge reports exhaustion as a value. Callers
//! propagate `OutOfGas` with `?`; the ante handler converts it once, at its
//! outer boundary.

use thiserror::Error;

/// Labels attached to each charge.
pub mod descriptors {
    pub const READ_FLAT: &str = "ReadFlat";
    pub const READ_PER_BYTE: &str = "ReadPerByte";
    pub const WRITE_FLAT: &str = "WriteFlat";
    pub const WRITE_PER_BYTE: &str = "WritePerByte";
    pub const HAS: &str = "Has";
    pub const SIG_VERIFY: &str = "ante verify: secp256k1";
}

/// Raised when a charge takes consumption past the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("out of gas in location: {descriptor}; limit: {limit}, consumed: {consumed}")]
pub struct OutOfGas {
    /// What was being charged.
    pub descriptor: &'static str,
    pub limit: u64,
    pub consumed: u64,
}

/// Per-transaction gas meter.
///
/// A failing charge is still recorded, so `consumed` may exceed `limit`
/// once exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasMeter {
    limit: u64,
    consumed: u64,
}

impl GasMeter {
    pub fn new(limit: u64) -> Self {
        Self { limit, consumed: 0 }
    }

    /// A meter that never runs out.
    pub fn infinite() -> Self {
        Self::new(u64::MAX)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.consumed)
    }

    pub fn is_exhausted(&self) -> bool {
        self.consumed >= self.limit
    }

    /// Charge `amount`; fails if the total now exceeds the limit or
    /// overflows `u64`. An overflowing charge pins `consumed` at `u64::MAX`.
    pub fn consume(&mut self, amount: u64, descriptor: &'static str) -> Result<(), OutOfGas> {
        let Some(consumed) = self.consumed.checked_add(amount) else {
            self.consumed = u64::MAX;
            return Err(OutOfGas {
                descriptor,
                limit: self.limit,
                consumed: self.consumed,
            });
        };
        self.consumed = consumed;
        if self.consumed > self.limit {
            return Err(OutOfGas {
                descriptor,
                limit: self.limit,
                consumed: self.consumed,
            });
        }
        Ok(())
    }
}

impl Default for GasMeter {
    fn default() -> Self {
        Self::infinite()
    }
}
