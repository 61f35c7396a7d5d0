//! # Ante Errors
//!
//! Every rejection maps to a numeric code within a codespace, following the
//! host application's result layout.

use super::gas::OutOfGas;
use eb_02_wire_transaction::{BatchError, MsgError};
use eb_types::StoreError;
use thiserror::Error;

/// Codespace of host-level errors.
pub const CODESPACE_SDK: &str = "sdk";
/// Codespace of bridge-specific errors.
pub const CODESPACE_BRIDGE: &str = "ethermint";

/// Host-level codes.
pub mod codes {
    pub const OK: u32 = 0;
    pub const INTERNAL: u32 = 1;
    pub const TX_DECODE: u32 = 2;
    pub const UNAUTHORIZED: u32 = 4;
    pub const OUT_OF_GAS: u32 = 12;
    /// Bridge codespace.
    pub const INVALID_VALUE: u32 = 1;
}

/// Why a transaction was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnteError {
    /// Submission is not a wire transaction
    #[error("tx must be an Ethereum transaction, got {0}")]
    TypeMismatch(String),

    /// Context chain id is not a base-10 integer
    #[error("invalid chainID: {0}")]
    InvalidChainId(String),

    /// Outer signature does not recover under the context chain id
    #[error("signature verification failed: {0}")]
    SignatureInvalid(String),

    /// Payload is not an embedded batch, or the batch nests a transaction
    #[error("{0}")]
    DecodeFailure(String),

    /// Embedded signature count or signer mismatch
    #[error("{0}")]
    Unauthorized(String),

    /// Gas meter exhausted
    #[error("out of gas in location: {descriptor}; gasWanted: {wanted}, gasUsed: {used}")]
    OutOfResource {
        descriptor: &'static str,
        wanted: u64,
        used: u64,
    },

    /// Gas price or amount not strictly positive
    #[error("{0}")]
    InvalidValue(String),

    /// Embedded message failed its own validation
    #[error(transparent)]
    Message(MsgError),

    /// Account store error, surfaced verbatim
    #[error(transparent)]
    Store(StoreError),

    /// Failure with no better classification
    #[error("internal error: {0}")]
    Internal(String),
}

impl AnteError {
    pub fn code(&self) -> u32 {
        match self {
            AnteError::TypeMismatch(_) | AnteError::InvalidChainId(_) | AnteError::Internal(_) => {
                codes::INTERNAL
            }
            AnteError::SignatureInvalid(_) | AnteError::Unauthorized(_) => codes::UNAUTHORIZED,
            AnteError::DecodeFailure(_) => codes::TX_DECODE,
            AnteError::OutOfResource { .. } => codes::OUT_OF_GAS,
            AnteError::InvalidValue(_) => codes::INVALID_VALUE,
            AnteError::Message(e) => e.code(),
            AnteError::Store(e) => match e {
                StoreError::UnknownAccount(_) => 9,
                StoreError::AccountExists(_) => 7,
                _ => codes::INTERNAL,
            },
        }
    }

    pub fn codespace(&self) -> &'static str {
        match self {
            AnteError::InvalidValue(_) => CODESPACE_BRIDGE,
            AnteError::Message(e) => e.codespace(),
            _ => CODESPACE_SDK,
        }
    }

    /// Short name of the failure kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnteError::TypeMismatch(_) => "TypeMismatch",
            AnteError::InvalidChainId(_) => "InvalidChainId",
            AnteError::SignatureInvalid(_) => "SignatureInvalid",
            AnteError::DecodeFailure(_) => "DecodeFailure",
            AnteError::Unauthorized(_) => "Unauthorized",
            AnteError::OutOfResource { .. } => "OutOfResource",
            AnteError::InvalidValue(_) => "InvalidValue",
            AnteError::Message(_) => "Message",
            AnteError::Store(_) => "Store",
            AnteError::Internal(_) => "Internal",
        }
    }
}

impl From<BatchError> for AnteError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::Decode(_) => {
                AnteError::DecodeFailure("embedded sdk transaction decoding failed".to_string())
            }
            BatchError::InvalidNesting { .. } => AnteError::DecodeFailure(format!(
                "invalid embedded message; cannot have Ethereum transaction in EmbeddedTx ({err})"
            )),
            BatchError::SignatureCountMismatch { .. } => AnteError::Unauthorized(err.to_string()),
            BatchError::Message(msg) => AnteError::Message(msg),
            BatchError::Encode(_) | BatchError::SignDoc(_) => AnteError::Internal(err.to_string()),
        }
    }
}

impl From<StoreError> for AnteError {
    fn from(err: StoreError) -> Self {
        AnteError::Store(err)
    }
}

/// How a pipeline stage stopped early.
///
/// Gas exhaustion is kept apart from rejections so that only the handler's
/// outer boundary turns it into [`AnteError::OutOfResource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    OutOfGas(OutOfGas),
    Rejected(AnteError),
}

impl From<OutOfGas> for Halt {
    fn from(err: OutOfGas) -> Self {
        Halt::OutOfGas(err)
    }
}

impl From<AnteError> for Halt {
    fn from(err: AnteError) -> Self {
        Halt::Rejected(err)
    }
}

impl From<StoreError> for Halt {
    fn from(err: StoreError) -> Self {
        Halt::Rejected(AnteError::Store(err))
    }
}

impl From<BatchError> for Halt {
    fn from(err: BatchError) -> Self {
        Halt::Rejected(err.into())
    }
}
