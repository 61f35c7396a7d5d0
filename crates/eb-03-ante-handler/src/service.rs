//! # Ante Handler Service
//!
//! `EthAnteHandler` is the pipeline the host runs before executing a
//! submitted transaction:
//!
//! ```text
//! Start → GasMetered → ChainIdResolved → SignerRecovered
//!       → PlainAccepted | EmbeddedDelegated
//! ```
//!
//! Any stage may end in `Rejected`. Gas exhaustion travels as
//! [`Halt::OutOfGas`] and becomes an `OutOfResource` rejection only in
//! [`EthAnteHandler::handle`].

use crate::config::{AnteConfig, ConfigError, GasConfig};
use crate::domain::context::Context;
use crate::domain::embedded::EmbeddedValidator;
use crate::domain::errors::{AnteError, Halt};
use crate::domain::gas::GasMeter;
use crate::domain::result::{AnteOutcome, AnteStage};
use crate::ports::inbound::AnteHandler;
use crate::ports::outbound::AccountStore;
use eb_01_signature_codec::{Secp256k1Codec, SignatureCodecApi};
use eb_02_wire_transaction::{CarrierAddress, Tx, TxError, WireTransaction};
use eb_types::{ChainId, H256};
use tracing::{debug, info, warn};

/// Ante handler for wire transactions and the embedded batches they carry.
pub struct EthAnteHandler<S, C = Secp256k1Codec> {
    carrier: CarrierAddress,
    gas: GasConfig,
    store: S,
    codec: C,
}

impl<S: AccountStore> EthAnteHandler<S> {
    /// Create a handler using the secp256k1 codec.
    pub fn new(config: AnteConfig, store: S) -> Result<Self, ConfigError> {
        Self::with_codec(config, store, Secp256k1Codec::new())
    }
}

impl<S: AccountStore, C: SignatureCodecApi> EthAnteHandler<S, C> {
    pub fn with_codec(config: AnteConfig, store: S, codec: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            carrier: config.carrier_address,
            gas: config.gas,
            store,
            codec,
        })
    }

    pub fn carrier(&self) -> CarrierAddress {
        self.carrier
    }

    pub fn gas_config(&self) -> &GasConfig {
        &self.gas
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stages after the gas meter is installed. Returns the terminal stage.
    fn run(&self, ctx: &mut Context, tx: &WireTransaction) -> Result<AnteStage, Halt> {
        tx.validate_basic().map_err(|e| match e {
            TxError::InvalidValue(reason) => AnteError::InvalidValue(reason.to_string()),
            other => AnteError::Internal(other.to_string()),
        })?;

        let chain_id = ChainId::parse(ctx.chain_id())
            .map_err(|e| AnteError::InvalidChainId(e.to_string()))?;
        debug!(chain_id = %chain_id, stage = %AnteStage::ChainIdResolved, "Ante stage");

        let sender = tx
            .derive_sender_with(&chain_id, &self.codec)
            .map_err(|e| AnteError::SignatureInvalid(e.to_string()))?;
        debug!(sender = ?sender, stage = %AnteStage::SignerRecovered, "Ante stage");

        if !tx.is_embedded_carrier(&self.carrier) {
            return Ok(AnteStage::PlainAccepted);
        }

        let batch = tx.decode_embedded_batch()?;
        debug!(
            messages = batch.messages.len(),
            signatures = batch.signatures.len(),
            "Delegating embedded batch"
        );

        let chain_id = ctx.chain_id().to_owned();
        EmbeddedValidator::new(&self.store, &self.codec, &self.gas).validate(
            ctx.gas_meter_mut(),
            &chain_id,
            &batch,
        )?;
        Ok(AnteStage::EmbeddedDelegated)
    }
}

impl<S: AccountStore, C: SignatureCodecApi> AnteHandler for EthAnteHandler<S, C> {
    fn handle(&self, ctx: Context, tx: &dyn Tx) -> AnteOutcome {
        let Some(wire) = tx.as_wire() else {
            let err = AnteError::TypeMismatch(tx.tx_type().to_string());
            warn!(reason = %err, kind = err.kind(), "Transaction rejected");
            return AnteOutcome::rejected(ctx, err, 0, 0);
        };

        let tx_hash = H256::from(wire.hash());
        let gas_limit = wire.gas_limit();
        let mut ctx = ctx.with_gas_meter(GasMeter::new(gas_limit));
        debug!(tx_hash = ?tx_hash, gas_limit, stage = %AnteStage::GasMetered, "Ante stage");

        match self.run(&mut ctx, wire) {
            Ok(stage) => {
                info!(
                    tx_hash = ?tx_hash,
                    stage = %stage,
                    gas_used = ctx.gas_meter().consumed(),
                    "Transaction accepted"
                );
                AnteOutcome::accepted(ctx, stage)
            }
            Err(halt) => {
                let used = ctx.gas_meter().consumed();
                let err = match halt {
                    Halt::OutOfGas(oog) => AnteError::OutOfResource {
                        descriptor: oog.descriptor,
                        wanted: gas_limit,
                        used,
                    },
                    Halt::Rejected(err) => err,
                };
                warn!(
                    tx_hash = ?tx_hash,
                    reason = %err,
                    kind = err.kind(),
                    "Transaction rejected"
                );
                AnteOutcome::rejected(ctx, err, gas_limit, used)
            }
        }
    }
}
