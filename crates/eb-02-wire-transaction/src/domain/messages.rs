//! # Embedded Messages
//!
//! Message variants that may travel inside an embedded batch. Only the
//! authorization contract is implemented here; executing the messages is the
//! host application's job.

use super::errors::{MsgError, TxError};
use super::transaction::WireTransaction;
use crate::ports::inbound::{Msg, TYPE_TX_ETHEREUM};
use eb_types::{Address, U256};
use serde::{Deserialize, Serialize};

pub const TYPE_MSG_SEND: &str = "send";
pub const TYPE_MSG_MULTI_SEND: &str = "multisend";

/// Transfer `amount` from one account to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

/// One side of a multi-send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSendEntry {
    pub address: Address,
    pub amount: U256,
}

/// Transfer from several inputs to several outputs with equal totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMultiSend {
    pub inputs: Vec<MultiSendEntry>,
    pub outputs: Vec<MultiSendEntry>,
}

/// Tagged union of every message kind a batch can carry.
///
/// `Ethereum` exists so that nesting can be detected and refused; a batch
/// containing it never validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbeddedMsg {
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    Ethereum(WireTransaction),
}

/// Render `{"type": .., "value": ..}` with keys sorted at every level.
fn canonical_sign_bytes<T: Serialize>(msg_type: &str, value: &T) -> Result<Vec<u8>, MsgError> {
    let value = serde_json::to_value(value).map_err(|e| MsgError::Encoding(e.to_string()))?;

    let mut doc = serde_json::Map::new();
    doc.insert("type".to_string(), serde_json::Value::from(msg_type));
    doc.insert("value".to_string(), value);

    serde_json::to_vec(&doc).map_err(|e| MsgError::Encoding(e.to_string()))
}

fn checked_total(entries: &[MultiSendEntry]) -> Result<U256, MsgError> {
    entries.iter().try_fold(U256::zero(), |acc, entry| {
        acc.checked_add(entry.amount)
            .ok_or_else(|| MsgError::InvalidAmount("total overflows".to_string()))
    })
}

fn validate_entry(entry: &MultiSendEntry) -> Result<(), MsgError> {
    if entry.address.is_zero() {
        return Err(MsgError::InvalidAddress("zero address".to_string()));
    }
    if entry.amount.is_zero() {
        return Err(MsgError::InvalidAmount(format!(
            "{:?} has zero amount",
            entry.address
        )));
    }
    Ok(())
}

impl Msg for MsgSend {
    fn msg_type(&self) -> &'static str {
        TYPE_MSG_SEND
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.from]
    }

    fn sign_bytes(&self) -> Result<Vec<u8>, MsgError> {
        canonical_sign_bytes(TYPE_MSG_SEND, self)
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.from.is_zero() {
            return Err(MsgError::InvalidAddress("missing sender".to_string()));
        }
        if self.to.is_zero() {
            return Err(MsgError::InvalidAddress("missing recipient".to_string()));
        }
        if self.from == self.to {
            return Err(MsgError::SelfTransfer(self.from));
        }
        if self.amount.is_zero() {
            return Err(MsgError::InvalidAmount("amount must be positive".to_string()));
        }
        Ok(())
    }
}

impl Msg for MsgMultiSend {
    fn msg_type(&self) -> &'static str {
        TYPE_MSG_MULTI_SEND
    }

    fn signers(&self) -> Vec<Address> {
        self.inputs.iter().map(|input| input.address).collect()
    }

    fn sign_bytes(&self) -> Result<Vec<u8>, MsgError> {
        canonical_sign_bytes(TYPE_MSG_MULTI_SEND, self)
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.inputs.is_empty() {
            return Err(MsgError::NoInputs);
        }
        if self.outputs.is_empty() {
            return Err(MsgError::NoOutputs);
        }
        for entry in self.inputs.iter().chain(self.outputs.iter()) {
            validate_entry(entry)?;
        }
        if checked_total(&self.inputs)? != checked_total(&self.outputs)? {
            return Err(MsgError::InputOutputMismatch);
        }
        Ok(())
    }
}

impl Msg for WireTransaction {
    fn msg_type(&self) -> &'static str {
        TYPE_TX_ETHEREUM
    }

    /// The cached sender. Empty until `derive_sender` has succeeded.
    fn signers(&self) -> Vec<Address> {
        self.cached_sender().into_iter().collect()
    }

    /// Wire transactions sign over their RLP pre-image, not a JSON document.
    fn sign_bytes(&self) -> Result<Vec<u8>, MsgError> {
        Ok(Vec::new())
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        WireTransaction::validate_basic(self).map_err(|e| match e {
            TxError::InvalidValue(reason) => MsgError::InvalidValue(reason),
            other => MsgError::Encoding(other.to_string()),
        })
    }
}

impl Msg for EmbeddedMsg {
    fn msg_type(&self) -> &'static str {
        match self {
            EmbeddedMsg::Send(msg) => msg.msg_type(),
            EmbeddedMsg::MultiSend(msg) => msg.msg_type(),
            EmbeddedMsg::Ethereum(tx) => Msg::msg_type(tx),
        }
    }

    fn signers(&self) -> Vec<Address> {
        match self {
            EmbeddedMsg::Send(msg) => msg.signers(),
            EmbeddedMsg::MultiSend(msg) => msg.signers(),
            EmbeddedMsg::Ethereum(tx) => Msg::signers(tx),
        }
    }

    fn sign_bytes(&self) -> Result<Vec<u8>, MsgError> {
        match self {
            EmbeddedMsg::Send(msg) => msg.sign_bytes(),
            EmbeddedMsg::MultiSend(msg) => msg.sign_bytes(),
            EmbeddedMsg::Ethereum(tx) => Msg::sign_bytes(tx),
        }
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        match self {
            EmbeddedMsg::Send(msg) => msg.validate_basic(),
            EmbeddedMsg::MultiSend(msg) => msg.validate_basic(),
            EmbeddedMsg::Ethereum(tx) => Msg::validate_basic(tx),
        }
    }
}

impl From<MsgSend> for EmbeddedMsg {
    fn from(msg: MsgSend) -> Self {
        EmbeddedMsg::Send(msg)
    }
}

impl From<MsgMultiSend> for EmbeddedMsg {
    fn from(msg: MsgMultiSend) -> Self {
        EmbeddedMsg::MultiSend(msg)
    }
}
