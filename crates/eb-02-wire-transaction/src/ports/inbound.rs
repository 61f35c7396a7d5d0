//! # Inbound Ports
//!
//! Capability traits for transactions and embedded messages.

use crate::domain::errors::MsgError;
use crate::domain::transaction::WireTransaction;
use eb_types::Address;

/// Type tag of the wire transaction, as a transaction and as a message.
pub const TYPE_TX_ETHEREUM: &str = "Ethereum";

/// A message that can be carried in an embedded batch.
pub trait Msg {
    /// Type tag, also used as `"type"` in the sign bytes.
    fn msg_type(&self) -> &'static str;

    /// Addresses whose signatures are required, in declaration order.
    fn signers(&self) -> Vec<Address>;

    /// Canonical JSON rendering included verbatim in the sign document.
    fn sign_bytes(&self) -> Result<Vec<u8>, MsgError>;

    /// Stateless self-validation.
    fn validate_basic(&self) -> Result<(), MsgError>;
}

/// Anything submitted to the ante handler.
pub trait Tx: Send + Sync {
    /// Type tag of the submission.
    fn tx_type(&self) -> &'static str;

    /// The wire transaction, if this is one.
    fn as_wire(&self) -> Option<&WireTransaction> {
        None
    }
}

impl Tx for WireTransaction {
    fn tx_type(&self) -> &'static str {
        TYPE_TX_ETHEREUM
    }

    fn as_wire(&self) -> Option<&WireTransaction> {
        Some(self)
    }
}
