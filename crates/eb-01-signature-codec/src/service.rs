//! # Signature Codec Service
//!
//! Application service implementing `SignatureCodecApi` over the domain layer.

use crate::domain::ecdsa;
use crate::domain::entities::EcdsaSignature;
use crate::domain::errors::SignatureError;
use crate::ports::inbound::SignatureCodecApi;
use eb_types::{Address, Hash};
use k256::ecdsa::SigningKey;

/// secp256k1 signature codec. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Codec;

impl Secp256k1Codec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureCodecApi for Secp256k1Codec {
    fn recover_address(
        &self,
        message_hash: &Hash,
        signature: &EcdsaSignature,
    ) -> Result<Address, SignatureError> {
        ecdsa::recover_address(message_hash, signature)
    }

    fn verify_signer(
        &self,
        message_hash: &Hash,
        signature: &EcdsaSignature,
        expected: &Address,
    ) -> Result<(), SignatureError> {
        ecdsa::verify_signer(message_hash, signature, expected)
    }

    fn sign(
        &self,
        message_hash: &Hash,
        private_key: &SigningKey,
    ) -> Result<EcdsaSignature, SignatureError> {
        ecdsa::sign_prehash(message_hash, private_key)
    }
}
