//! # Transaction Errors
//!
//! - `TxError`: wire transaction codec, validation and signing
//! - `MsgError`: embedded message self-validation
//! - `BatchError`: embedded batch decoding and structural checks

use eb_01_signature_codec::SignatureError;
use eb_types::Address;
use thiserror::Error;

/// Errors raised by [`crate::WireTransaction`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TxError {
    /// Input is not valid RLP for a wire transaction
    #[error("RLP decoding failed: {0}")]
    Rlp(#[from] rlp::DecoderError),

    /// RLP list does not hold exactly nine items
    #[error("Expected 9 transaction fields, found {0}")]
    FieldCount(usize),

    /// Bytes remain after the transaction list
    #[error("Trailing bytes after transaction: list is {expected} bytes, input is {actual}")]
    TrailingBytes { expected: usize, actual: usize },

    /// Input decodes but does not re-encode to the same bytes
    #[error("Non-canonical transaction encoding")]
    NonCanonical,

    /// Price or amount is not strictly positive
    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),

    /// Signing or sender recovery failed
    #[error("Signature error: {0}")]
    Signature(#[from] SignatureError),
}

/// Errors raised by an embedded message's self-validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MsgError {
    /// A required address is the zero address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// An amount is zero or the sums overflow
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Sender and recipient are the same account
    #[error("Cannot send to self: {0:?}")]
    SelfTransfer(Address),

    /// Multi-send without inputs
    #[error("No inputs to multi-send")]
    NoInputs,

    /// Multi-send without outputs
    #[error("No outputs to multi-send")]
    NoOutputs,

    /// Multi-send input and output totals differ
    #[error("Sum of inputs does not equal sum of outputs")]
    InputOutputMismatch,

    /// Wrapped wire transaction failed its own checks
    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),

    /// Message could not be rendered to its canonical JSON form
    #[error("Sign bytes encoding failed: {0}")]
    Encoding(String),
}

impl MsgError {
    /// Numeric error code, in the layout of the host application's codes.
    pub fn code(&self) -> u32 {
        match self {
            MsgError::Encoding(_) => 1,
            MsgError::InvalidValue(_) => 1,
            MsgError::InvalidAddress(_) => 7,
            MsgError::InvalidAmount(_) => 10,
            MsgError::SelfTransfer(_) => 10,
            MsgError::NoInputs | MsgError::InputOutputMismatch => 101,
            MsgError::NoOutputs => 102,
        }
    }

    /// Codespace the code belongs to.
    pub fn codespace(&self) -> &'static str {
        match self {
            MsgError::Encoding(_) => "sdk",
            MsgError::InvalidValue(_) => "ethermint",
            MsgError::InvalidAddress(_) | MsgError::InvalidAmount(_) | MsgError::SelfTransfer(_) => {
                "sdk"
            }
            MsgError::NoInputs | MsgError::NoOutputs | MsgError::InputOutputMismatch => "bank",
        }
    }
}

/// Errors raised while decoding or structurally validating an embedded batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BatchError {
    /// Payload is not a valid batch encoding
    #[error("Embedded batch decoding failed: {0}")]
    Decode(String),

    /// Batch could not be encoded
    #[error("Embedded batch encoding failed: {0}")]
    Encode(String),

    /// Signature count differs from the required signer count
    #[error("Provided signature length {actual} does not match required length {expected}")]
    SignatureCountMismatch { expected: usize, actual: usize },

    /// A wire transaction was nested inside the batch
    #[error("Invalid embedded message at index {index}: cannot nest an Ethereum transaction")]
    InvalidNesting { index: usize },

    /// A message failed its own validation
    #[error(transparent)]
    Message(#[from] MsgError),

    /// The sign document could not be built
    #[error("Sign document encoding failed: {0}")]
    SignDoc(String),
}
