//! # Gas-Metered Store
//!
//! Wraps an account store for the duration of one transaction and charges
//! the transaction's meter for every access. Reads are charged a flat cost
//! before the lookup and a per-byte cost after it; writes are charged in
//! full before the record is stored.

use crate::config::GasConfig;
use crate::domain::errors::Halt;
use crate::domain::gas::{descriptors, GasMeter};
use crate::ports::outbound::AccountStore;
use eb_types::{Account, Address, StoreError};

pub struct GasMeteredStore<'a, S: ?Sized> {
    store: &'a S,
    config: &'a GasConfig,
    meter: &'a mut GasMeter,
}

impl<'a, S: AccountStore + ?Sized> GasMeteredStore<'a, S> {
    pub fn new(store: &'a S, config: &'a GasConfig, meter: &'a mut GasMeter) -> Self {
        Self {
            store,
            config,
            meter,
        }
    }

    pub fn meter(&self) -> &GasMeter {
        &*self.meter
    }

    /// Charge a non-store cost against the same meter.
    pub fn consume(&mut self, amount: u64, descriptor: &'static str) -> Result<(), Halt> {
        self.meter.consume(amount, descriptor)?;
        Ok(())
    }

    pub fn get_account(&mut self, address: &Address) -> Result<Account, Halt> {
        self.meter
            .consume(self.config.read_cost_flat, descriptors::READ_FLAT)?;
        let account = self.store.get_account(address)?;
        let len = account.encoded_len()?;
        self.meter.consume(
            self.config.read_cost_per_byte.saturating_mul(len),
            descriptors::READ_PER_BYTE,
        )?;
        Ok(account)
    }

    pub fn has_account(&mut self, address: &Address) -> Result<bool, Halt> {
        self.meter.consume(self.config.has_cost, descriptors::HAS)?;
        Ok(self.store.has_account(address)?)
    }

    pub fn set_account(&mut self, account: Account) -> Result<(), Halt> {
        self.charge_write(&account)?;
        Ok(self.store.set_account(account)?)
    }

    /// Metered read-modify-write of the sequence. Returns the new value.
    ///
    /// Gas is charged for the read and the write up front; the increment
    /// itself is a single store call.
    pub fn increment_sequence(&mut self, address: &Address) -> Result<i64, Halt> {
        let mut account = self.get_account(address)?;
        account.sequence = account
            .sequence
            .checked_add(1)
            .ok_or(StoreError::SequenceOverflow(*address))?;
        self.charge_write(&account)?;
        Ok(self.store.increment_sequence(address)?)
    }

    fn charge_write(&mut self, account: &Account) -> Result<(), Halt> {
        let len = account.encoded_len()?;
        self.meter
            .consume(self.config.write_cost_flat, descriptors::WRITE_FLAT)?;
        self.meter.consume(
            self.config.write_cost_per_byte.saturating_mul(len),
            descriptors::WRITE_PER_BYTE,
        )?;
        Ok(())
    }
}
