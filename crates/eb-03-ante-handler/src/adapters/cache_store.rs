//! # Cached Account Store
//!
//! Buffers writes over a parent store. The caller decides whether a
//! transaction's effects land: [`CachedAccountStore::commit`] flushes the
//! buffer, dropping the wrapper discards it.

use crate::ports::outbound::AccountStore;
use eb_types::{Account, Address, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;

pub struct CachedAccountStore<S> {
    parent: S,
    dirty: RwLock<HashMap<Address, Account>>,
}

impl<S: AccountStore> CachedAccountStore<S> {
    pub fn new(parent: S) -> Self {
        Self {
            parent,
            dirty: RwLock::new(HashMap::new()),
        }
    }

    pub fn parent(&self) -> &S {
        &self.parent
    }

    /// Number of buffered writes.
    pub fn pending(&self) -> usize {
        self.dirty.read().len()
    }

    /// Write every buffered account to the parent and clear the buffer.
    ///
    /// On a parent error the remaining writes stay buffered.
    pub fn commit(&self) -> Result<usize, StoreError> {
        let mut dirty = self.dirty.write();
        let mut written = 0;
        let addresses: Vec<Address> = dirty.keys().copied().collect();
        for address in addresses {
            if let Some(account) = dirty.remove(&address) {
                if let Err(e) = self.parent.set_account(account.clone()) {
                    dirty.insert(address, account);
                    return Err(e);
                }
                written += 1;
            }
        }
        Ok(written)
    }

    /// Drop all buffered writes.
    pub fn discard(&self) {
        self.dirty.write().clear();
    }
}

impl<S: AccountStore> AccountStore for CachedAccountStore<S> {
    fn get_account(&self, address: &Address) -> Result<Account, StoreError> {
        if let Some(account) = self.dirty.read().get(address) {
            return Ok(account.clone());
        }
        self.parent.get_account(address)
    }

    fn set_account(&self, account: Account) -> Result<(), StoreError> {
        self.dirty.write().insert(account.address, account);
        Ok(())
    }

    /// Numbers are reserved in the parent and are not returned on discard.
    fn next_account_number(&self) -> Result<i64, StoreError> {
        self.parent.next_account_number()
    }

    fn increment_sequence(&self, address: &Address) -> Result<i64, StoreError> {
        let mut dirty = self.dirty.write();
        let mut account = match dirty.get(address) {
            Some(account) => account.clone(),
            None => self.parent.get_account(address)?,
        };
        account.sequence = account
            .sequence
            .checked_add(1)
            .ok_or(StoreError::SequenceOverflow(*address))?;
        let sequence = account.sequence;
        dirty.insert(*address, account);
        Ok(sequence)
    }
}
