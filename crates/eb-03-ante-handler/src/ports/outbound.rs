//! # Outbound Ports (Driven Ports)
//!
//! The account store is owned by the host application. Each call is atomic;
//! the pipeline adds no locking of its own.

use eb_types::{Account, Address, StoreError};
use std::sync::Arc;

/// Durable `address -> account` storage.
pub trait AccountStore: Send + Sync {
    /// Load an account. Unknown addresses are an error, never a default.
    fn get_account(&self, address: &Address) -> Result<Account, StoreError>;

    /// Insert or replace an account.
    fn set_account(&self, account: Account) -> Result<(), StoreError>;

    /// Reserve the next account number.
    fn next_account_number(&self) -> Result<i64, StoreError>;

    fn has_account(&self, address: &Address) -> Result<bool, StoreError> {
        match self.get_account(address) {
            Ok(_) => Ok(true),
            Err(StoreError::UnknownAccount(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn get_sequence(&self, address: &Address) -> Result<i64, StoreError> {
        Ok(self.get_account(address)?.sequence)
    }

    /// Add one to the account's sequence and return the new value.
    ///
    /// The provided body is a separate get and set. Stores shared across
    /// threads override it so the whole update happens under one lock.
    fn increment_sequence(&self, address: &Address) -> Result<i64, StoreError> {
        let mut account = self.get_account(address)?;
        account.sequence = account
            .sequence
            .checked_add(1)
            .ok_or(StoreError::SequenceOverflow(*address))?;
        let sequence = account.sequence;
        self.set_account(account)?;
        Ok(sequence)
    }

    /// Create a fresh account with the next account number.
    fn create_account(&self, address: &Address) -> Result<Account, StoreError> {
        if self.has_account(address)? {
            return Err(StoreError::AccountExists(*address));
        }
        let account = Account::new(*address, self.next_account_number()?);
        self.set_account(account.clone())?;
        Ok(account)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for &S {
    fn get_account(&self, address: &Address) -> Result<Account, StoreError> {
        (**self).get_account(address)
    }

    fn set_account(&self, account: Account) -> Result<(), StoreError> {
        (**self).set_account(account)
    }

    fn next_account_number(&self) -> Result<i64, StoreError> {
        (**self).next_account_number()
    }

    fn increment_sequence(&self, address: &Address) -> Result<i64, StoreError> {
        (**self).increment_sequence(address)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for Arc<S> {
    fn get_account(&self, address: &Address) -> Result<Account, StoreError> {
        (**self).get_account(address)
    }

    fn set_account(&self, account: Account) -> Result<(), StoreError> {
        (**self).set_account(account)
    }

    fn next_account_number(&self) -> Result<i64, StoreError> {
        (**self).next_account_number()
    }

    fn increment_sequence(&self, address: &Address) -> Result<i64, StoreError> {
        (**self).increment_sequence(address)
    }
}
