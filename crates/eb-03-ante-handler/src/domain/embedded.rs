//! # Embedded Batch Validation
//!
//! Authorizes the messages carried inside a carrier transaction. Each
//! required signer must have signed the batch's sign document at its current
//! account number and sequence; its sequence is bumped as soon as its
//! signature checks out.
//!
//! Sequence increments are not undone if a later signer fails. Discarding
//! them is the caller's job, through its commit boundary.

use super::errors::{AnteError, Halt};
use super::gas::{descriptors, GasMeter};
use crate::adapters::gas_store::GasMeteredStore;
use crate::config::GasConfig;
use crate::ports::outbound::AccountStore;
use eb_01_signature_codec::{EcdsaSignature, SignatureCodecApi};
use eb_02_wire_transaction::EmbeddedBatch;
use eb_types::{keccak256, Address};
use tracing::debug;

pub struct EmbeddedValidator<'a, S: AccountStore + ?Sized, C: SignatureCodecApi> {
    store: &'a S,
    codec: &'a C,
    gas: &'a GasConfig,
}

impl<'a, S: AccountStore + ?Sized, C: SignatureCodecApi> EmbeddedValidator<'a, S, C> {
    pub fn new(store: &'a S, codec: &'a C, gas: &'a GasConfig) -> Self {
        Self { store, codec, gas }
    }

    /// Validate `batch` under `chain_id`, charging `meter`.
    pub fn validate(
        &self,
        meter: &mut GasMeter,
        chain_id: &str,
        batch: &EmbeddedBatch,
    ) -> Result<(), Halt> {
        batch.validate_basic()?;

        let signers = batch.required_signers();
        let mut store = GasMeteredStore::new(self.store, self.gas, meter);

        for (index, (signer, signature)) in signers.iter().zip(&batch.signatures).enumerate() {
            let account = store.get_account(signer)?;
            let sign_bytes = batch.sign_bytes(chain_id, account.account_number, account.sequence)?;

            store.consume(self.gas.sig_verify_cost, descriptors::SIG_VERIFY)?;
            self.verify(&sign_bytes, signature, signer)?;

            let sequence = store.increment_sequence(signer)?;
            debug!(
                signer = ?signer,
                index,
                account_number = account.account_number,
                sequence,
                "Embedded signature accepted"
            );
        }

        Ok(())
    }

    fn verify(&self, sign_bytes: &[u8], signature: &[u8], signer: &Address) -> Result<(), Halt> {
        let hash = keccak256(sign_bytes);
        EcdsaSignature::from_compact(signature)
            .and_then(|sig| self.codec.verify_signer(&hash, &sig, signer))
            .map_err(|e| {
                AnteError::Unauthorized(format!("signature verification failed: {e}")).into()
            })
    }
}
