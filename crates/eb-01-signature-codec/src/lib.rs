//! # Signature Codec Subsystem (EB-01)
//!
//! secp256k1 signing and public-key recovery for the wire-transaction bridge.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): the `SignatureCodecApi` trait consumed by
//!   the transaction and ante-handler crates
//! - **Service Layer** (`service.rs`): `Secp256k1Codec`, the default implementation
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: signatures with high S values are rejected
//! - **Scalar Range Validation**: R and S must be in `[1, n-1]`
//! - **Replay Protection (EIP-155)**: `v` binds a signature to one chain id

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::ecdsa::{
    address_from_pubkey, recover_address, sign_prehash, signing_key_from_bytes, verify_signer,
};
pub use domain::eip155::{decode_v, encode_v, extract_chain_id, is_protected};
pub use domain::entities::{EcdsaSignature, COMPACT_SIGNATURE_LEN};
pub use domain::errors::SignatureError;
pub use k256::ecdsa::SigningKey;
pub use ports::inbound::SignatureCodecApi;
pub use service::Secp256k1Codec;
