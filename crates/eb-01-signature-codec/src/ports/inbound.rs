//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::EcdsaSignature;
use crate::domain::errors::SignatureError;
use eb_types::{Address, Hash};
use k256::ecdsa::SigningKey;

/// Signature codec API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SignatureCodecApi: Send + Sync {
    /// Recover the signer's address from a signature over a 32-byte hash.
    ///
    /// # Security
    /// - Rejects signatures with high S values (EIP-2 malleability protection)
    fn recover_address(
        &self,
        message_hash: &Hash,
        signature: &EcdsaSignature,
    ) -> Result<Address, SignatureError>;

    /// Recover the signer and check it equals `expected`.
    fn verify_signer(
        &self,
        message_hash: &Hash,
        signature: &EcdsaSignature,
        expected: &Address,
    ) -> Result<(), SignatureError>;

    /// Deterministically sign a 32-byte hash. `v` is the bare recovery id.
    fn sign(
        &self,
        message_hash: &Hash,
        private_key: &SigningKey,
    ) -> Result<EcdsaSignature, SignatureError>;

    /// Recover from a 65-byte compact `r ‖ s ‖ v` signature.
    fn recover_compact(&self, message_hash: &Hash, compact: &[u8]) -> Result<Address, SignatureError> {
        let signature = EcdsaSignature::from_compact(compact)?;
        self.recover_address(message_hash, &signature)
    }
}
