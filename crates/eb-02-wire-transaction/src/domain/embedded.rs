//! # Embedded Batch
//!
//! A list of messages plus one compact signature per required signer,
//! carried in the payload of a transaction addressed to the carrier.
//!
//! Signatures are matched to signers by position, so the signer order
//! produced by [`EmbeddedBatch::required_signers`] is part of the wire format.

use super::errors::BatchError;
use super::messages::EmbeddedMsg;
use crate::ports::inbound::{Msg, Tx, TYPE_TX_ETHEREUM};
use bincode::Options;
use eb_types::Address;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::collections::HashSet;

/// Type tag of a bare batch submitted outside a carrier.
pub const TYPE_TX_EMBEDDED: &str = "EmbeddedBatch";

/// Upper bound on an encoded batch.
pub const MAX_EMBEDDED_BATCH_SIZE: u64 = 1024 * 1024;

fn batch_codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .with_limit(MAX_EMBEDDED_BATCH_SIZE)
}

/// Messages and their signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedBatch {
    pub messages: Vec<EmbeddedMsg>,
    /// 65-byte `r ‖ s ‖ v` signatures, one per required signer.
    pub signatures: Vec<Vec<u8>>,
}

/// Document each signer signs over. Field order is alphabetical so the
/// serialized keys are sorted.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddedSignDoc<'a> {
    account_number: i64,
    chain_id: &'a str,
    msgs: Vec<Box<RawValue>>,
    sequence: i64,
}

impl EmbeddedBatch {
    pub fn new(messages: Vec<EmbeddedMsg>, signatures: Vec<Vec<u8>>) -> Self {
        Self {
            messages,
            signatures,
        }
    }

    /// Decode a batch from a carrier payload.
    pub fn decode(bytes: &[u8]) -> Result<Self, BatchError> {
        if bytes.len() as u64 > MAX_EMBEDDED_BATCH_SIZE {
            return Err(BatchError::Decode(format!(
                "payload of {} bytes exceeds limit",
                bytes.len()
            )));
        }
        batch_codec()
            .deserialize(bytes)
            .map_err(|e| BatchError::Decode(e.to_string()))
    }

    /// Encode the batch as a carrier payload.
    pub fn encode(&self) -> Result<Vec<u8>, BatchError> {
        batch_codec()
            .serialize(self)
            .map_err(|e| BatchError::Encode(e.to_string()))
    }

    /// Signers of all messages, in message order then declaration order,
    /// keeping the first occurrence of each address.
    pub fn required_signers(&self) -> Vec<Address> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .flat_map(|msg| msg.signers())
            .filter(|addr| seen.insert(*addr))
            .collect()
    }

    /// Bytes a signer signs: the JSON sign document for this batch.
    pub fn sign_bytes(
        &self,
        chain_id: &str,
        account_number: i64,
        sequence: i64,
    ) -> Result<Vec<u8>, BatchError> {
        let msgs = self
            .messages
            .iter()
            .map(|msg| {
                let bytes = msg.sign_bytes()?;
                let json = if bytes.is_empty() {
                    "null".to_string()
                } else {
                    String::from_utf8(bytes).map_err(|e| BatchError::SignDoc(e.to_string()))?
                };
                RawValue::from_string(json).map_err(|e| BatchError::SignDoc(e.to_string()))
            })
            .collect::<Result<Vec<_>, BatchError>>()?;

        let doc = EmbeddedSignDoc {
            account_number,
            chain_id,
            msgs,
            sequence,
        };
        serde_json::to_vec(&doc).map_err(|e| BatchError::SignDoc(e.to_string()))
    }

    /// Structural checks, in order:
    /// 1. one signature per required signer
    /// 2. no nested wire transactions
    /// 3. each message's own validation, first failure wins
    pub fn validate_basic(&self) -> Result<(), BatchError> {
        let expected = self.required_signers().len();
        if self.signatures.len() != expected {
            return Err(BatchError::SignatureCountMismatch {
                expected,
                actual: self.signatures.len(),
            });
        }

        for (index, msg) in self.messages.iter().enumerate() {
            if msg.msg_type() == TYPE_TX_ETHEREUM {
                return Err(BatchError::InvalidNesting { index });
            }
            msg.validate_basic()?;
        }

        Ok(())
    }
}

impl Tx for EmbeddedBatch {
    fn tx_type(&self) -> &'static str {
        TYPE_TX_EMBEDDED
    }
}
