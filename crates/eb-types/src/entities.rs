//! # Core Domain Entities
//!
//! - **Hashing**: `Hash`, `keccak256`
//! - **Identity**: `Address`
//! - **State**: `Account`

use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

// Re-export the big-integer and fixed-hash types for use across all crates
pub use primitive_types::{H160, H256, U256};

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = H160;

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// An account record as persisted by the account store.
///
/// `sequence` is the replay counter for embedded-batch signatures. It is
/// distinct from the wire transaction's own `nonce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Owner address (store key).
    pub address: Address,
    /// Number assigned when the account was created.
    pub account_number: i64,
    /// Number of embedded-batch signatures accepted for this account.
    pub sequence: i64,
}

impl Account {
    /// Create a fresh account with a zero sequence.
    pub fn new(address: Address, account_number: i64) -> Self {
        Self {
            address,
            account_number,
            sequence: 0,
        }
    }

    /// Serialize the record for a byte-oriented store.
    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::Codec(e.to_string()))
    }

    /// Deserialize a record previously produced by [`Account::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::Codec(e.to_string()))
    }

    /// Length of the encoded record, used for per-byte gas accounting.
    pub fn encoded_len(&self) -> Result<u64, StoreError> {
        bincode::serialized_size(self).map_err(|e| StoreError::Codec(e.to_string()))
    }
}
