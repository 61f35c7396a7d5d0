//! # Signature Errors

use eb_types::Address;
use thiserror::Error;

/// Errors that can occur while signing or recovering a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// R or S is zero or not below the curve order
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Compact signature is not 65 bytes long
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// The `v` value does not decode to a recovery id under the given chain id
    #[error("Signature v value {v} is inconsistent with chain id {chain_id}")]
    InconsistentV { v: String, chain_id: String },

    /// Chain id is too large to encode into `v`
    #[error("Chain id {0} too large for v encoding")]
    ChainIdOverflow(String),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch: expected {expected:?}, got {actual:?}")]
    SignerMismatch { expected: Address, actual: Address },

    /// Private key bytes are not a valid secp256k1 scalar
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The signing primitive reported a failure
    #[error("Signing failed")]
    SigningFailed,
}
