//! # Wire Transaction Subsystem (EB-02)
//!
//! The foreign-chain transaction record and the embedded batch it may carry.
//!
//! ## Wire Formats
//!
//! | Object | Encoding |
//! |--------|----------|
//! | `WireTransaction` | RLP, byte-identical to go-ethereum legacy transactions |
//! | `EmbeddedBatch` | bincode (fixed-width integers, no trailing bytes) in the payload |
//! | Embedded sign document | JSON, keys sorted |
//!
//! A transaction whose recipient equals the configured [`CarrierAddress`]
//! carries an `EmbeddedBatch`; any other transaction is a plain transfer.

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::carrier::CarrierAddress;
pub use domain::embedded::{EmbeddedBatch, MAX_EMBEDDED_BATCH_SIZE, TYPE_TX_EMBEDDED};
pub use domain::errors::{BatchError, MsgError, TxError};
pub use domain::messages::{
    EmbeddedMsg, MsgMultiSend, MsgSend, MultiSendEntry, TYPE_MSG_MULTI_SEND, TYPE_MSG_SEND,
};
pub use domain::transaction::{TxData, WireTransaction};
pub use ports::inbound::{Msg, Tx, TYPE_TX_ETHEREUM};
