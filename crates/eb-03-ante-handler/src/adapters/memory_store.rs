use crate::ports::outbound::AccountStore;
use eb_types::{Account, Address, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

/// In-memory account store holding encoded records.
///
/// Records round-trip through [`Account::encode`] so that codec failures
/// surface the same way they would from a byte-oriented backend.
pub struct InMemoryAccountStore {
    records: RwLock<HashMap<Address, Vec<u8>>>,
    next_number: AtomicI64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_number: AtomicI64::new(0),
        }
    }

    /// Create a store pre-populated with fresh accounts, numbered in order.
    pub fn with_accounts(addresses: &[Address]) -> Result<Self, StoreError> {
        let store = Self::new();
        for address in addresses {
            store.create_account(address)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get_account(&self, address: &Address) -> Result<Account, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let bytes = records
            .get(address)
            .ok_or(StoreError::UnknownAccount(*address))?;
        Account::decode(bytes)
    }

    fn set_account(&self, account: Account) -> Result<(), StoreError> {
        let bytes = account.encode()?;
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.insert(account.address, bytes);
        Ok(())
    }

    fn next_account_number(&self) -> Result<i64, StoreError> {
        Ok(self.next_number.fetch_add(1, Ordering::SeqCst))
    }

    fn increment_sequence(&self, address: &Address) -> Result<i64, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let bytes = records
            .get_mut(address)
            .ok_or(StoreError::UnknownAccount(*address))?;
        let mut account = Account::decode(bytes)?;
        account.sequence = account
            .sequence
            .checked_add(1)
            .ok_or(StoreError::SequenceOverflow(*address))?;
        *bytes = account.encode()?;
        Ok(account.sequence)
    }
}
