//! # Wire Transaction
//!
//! Legacy Ethereum transaction, byte-compatible with go-ethereum's encoding:
//! an RLP list of `[nonce, gasPrice, gas, to, value, input, v, r, s]`.
//!
//! Signing follows EIP-155. The signing hash covers the first six fields
//! followed by `(chain_id, 0, 0)`, or only the first six for chain id 0.

use super::carrier::CarrierAddress;
use super::embedded::EmbeddedBatch;
use super::errors::{BatchError, TxError};
use super::messages::EmbeddedMsg;
use eb_01_signature_codec::{
    decode_v, encode_v, extract_chain_id, is_protected, sign_prehash, EcdsaSignature,
    Secp256k1Codec, SignatureCodecApi, SigningKey,
};
use eb_types::{keccak256, Address, ChainId, Hash, U256};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Number of RLP fields in a signed transaction.
const TX_FIELD_COUNT: usize = 9;

// =============================================================================
// TRANSACTION DATA
// =============================================================================

/// The authoritative fields of a wire transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxData {
    /// Sender's account nonce on the foreign chain.
    pub nonce: u64,
    #[serde(rename = "gasPrice")]
    pub gas_price: U256,
    #[serde(rename = "gas")]
    pub gas_limit: u64,
    /// `None` means contract creation.
    #[serde(rename = "to")]
    pub recipient: Option<Address>,
    #[serde(rename = "value")]
    pub amount: U256,
    #[serde(rename = "input")]
    pub payload: Vec<u8>,
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

impl TxData {
    fn append_unsigned_fields(&self, s: &mut RlpStream) {
        s.append(&self.nonce);
        s.append(&self.gas_price);
        s.append(&self.gas_limit);
        match &self.recipient {
            Some(address) => s.append(address),
            None => s.append_empty_data(),
        };
        s.append(&self.amount);
        s.append(&self.payload);
    }
}

impl Encodable for TxData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(TX_FIELD_COUNT);
        self.append_unsigned_fields(s);
        s.append(&self.v);
        s.append(&self.r);
        s.append(&self.s);
    }
}

impl Decodable for TxData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if rlp.item_count()? != TX_FIELD_COUNT {
            return Err(DecoderError::RlpIncorrectListLen);
        }

        let to = rlp.at(3)?;
        let recipient = if to.is_empty() {
            None
        } else {
            Some(to.as_val()?)
        };

        Ok(TxData {
            nonce: rlp.val_at(0)?,
            gas_price: rlp.val_at(1)?,
            gas_limit: rlp.val_at(2)?,
            recipient,
            amount: rlp.val_at(4)?,
            payload: rlp.val_at(5)?,
            v: rlp.val_at(6)?,
            r: rlp.val_at(7)?,
            s: rlp.val_at(8)?,
        })
    }
}

// =============================================================================
// WIRE TRANSACTION
// =============================================================================

/// A foreign-chain transaction with memoized hash, size and sender.
///
/// Caches are write-once cells. `sign` replaces the whole set, so a cached
/// value always describes the current fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "TxData", into = "TxData")]
pub struct WireTransaction {
    data: TxData,
    hash: OnceLock<Hash>,
    size: OnceLock<usize>,
    from: OnceLock<(ChainId, Address)>,
}

impl WireTransaction {
    /// Build an unsigned transaction (`v = r = s = 0`).
    pub fn new(
        nonce: u64,
        recipient: Option<Address>,
        amount: U256,
        gas_limit: u64,
        gas_price: U256,
        payload: Vec<u8>,
    ) -> Self {
        Self::from_data(TxData {
            nonce,
            gas_price,
            gas_limit,
            recipient,
            amount,
            payload,
            ..TxData::default()
        })
    }

    /// Wrap raw transaction data.
    pub fn from_data(data: TxData) -> Self {
        Self {
            data,
            hash: OnceLock::new(),
            size: OnceLock::new(),
            from: OnceLock::new(),
        }
    }

    /// Decode a transaction from its RLP wire encoding.
    ///
    /// The input must be exactly one canonical transaction list.
    pub fn decode(raw: &[u8]) -> Result<Self, TxError> {
        let rlp = Rlp::new(raw);

        let expected = rlp.payload_info()?.total();
        if expected != raw.len() {
            return Err(TxError::TrailingBytes {
                expected,
                actual: raw.len(),
            });
        }

        let fields = rlp.item_count()?;
        if fields != TX_FIELD_COUNT {
            return Err(TxError::FieldCount(fields));
        }

        let data: TxData = rlp.as_val()?;
        let tx = Self {
            size: OnceLock::from(raw.len()),
            ..Self::from_data(data)
        };

        if tx.rlp_bytes() != raw {
            return Err(TxError::NonCanonical);
        }
        Ok(tx)
    }

    // -------------------------------------------------------------------------
    // Field access
    // -------------------------------------------------------------------------

    pub fn data(&self) -> &TxData {
        &self.data
    }

    pub fn into_data(self) -> TxData {
        self.data
    }

    pub fn nonce(&self) -> u64 {
        self.data.nonce
    }

    pub fn gas_price(&self) -> U256 {
        self.data.gas_price
    }

    pub fn gas_limit(&self) -> u64 {
        self.data.gas_limit
    }

    pub fn recipient(&self) -> Option<Address> {
        self.data.recipient
    }

    pub fn amount(&self) -> U256 {
        self.data.amount
    }

    pub fn payload(&self) -> &[u8] {
        &self.data.payload
    }

    /// Raw signature values `(v, r, s)`.
    pub fn signature_values(&self) -> (U256, U256, U256) {
        (self.data.v, self.data.r, self.data.s)
    }

    /// Overwrite the raw signature values without signing.
    pub fn set_signature_values(&mut self, v: U256, r: U256, s: U256) {
        self.data.v = v;
        self.data.r = r;
        self.data.s = s;
        self.reset_caches();
    }

    /// Chain id encoded in `v`; `None` for unsigned or malformed `v`.
    pub fn chain_id(&self) -> Option<ChainId> {
        extract_chain_id(&self.data.v)
    }

    /// Whether `v` carries EIP-155 replay protection.
    pub fn is_protected(&self) -> bool {
        is_protected(&self.data.v)
    }

    // -------------------------------------------------------------------------
    // Encoding
    // -------------------------------------------------------------------------

    /// Full RLP encoding including the signature.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        rlp::encode(&self.data).to_vec()
    }

    /// RLP pre-image of the signing hash for `chain_id`.
    pub fn signing_rlp(&self, chain_id: &ChainId) -> Vec<u8> {
        let mut s = if chain_id.is_zero() {
            RlpStream::new_list(6)
        } else {
            RlpStream::new_list(TX_FIELD_COUNT)
        };
        self.data.append_unsigned_fields(&mut s);
        if !chain_id.is_zero() {
            s.append(&chain_id.as_u256());
            s.append(&0u8);
            s.append(&0u8);
        }
        s.out().to_vec()
    }

    /// Hash signed by the sender under `chain_id`.
    pub fn signing_hash(&self, chain_id: &ChainId) -> Hash {
        keccak256(&self.signing_rlp(chain_id))
    }

    /// Keccak-256 of the full encoding. Memoized.
    pub fn hash(&self) -> Hash {
        *self.hash.get_or_init(|| keccak256(&self.rlp_bytes()))
    }

    /// Encoded length in bytes. Memoized, and recorded from the input on decode.
    pub fn size(&self) -> usize {
        *self.size.get_or_init(|| self.rlp_bytes().len())
    }

    // -------------------------------------------------------------------------
    // Signing
    // -------------------------------------------------------------------------

    /// Sign in place for `chain_id`, replacing any previous signature.
    pub fn sign(&mut self, chain_id: &ChainId, private_key: &SigningKey) -> Result<(), TxError> {
        let signature = sign_prehash(&self.signing_hash(chain_id), private_key)?;
        let v = encode_v(signature.v, chain_id)?;
        self.set_signature_values(v, signature.r_u256(), signature.s_u256());
        Ok(())
    }

    /// Recover the sender under `chain_id`.
    ///
    /// Fails if `v` was not produced for `chain_id` or if recovery fails.
    /// The first successful result is memoized together with its chain id.
    pub fn derive_sender(&self, chain_id: &ChainId) -> Result<Address, TxError> {
        self.derive_sender_with(chain_id, &Secp256k1Codec::new())
    }

    /// [`derive_sender`](Self::derive_sender) with recovery done by `codec`.
    pub fn derive_sender_with<C: SignatureCodecApi + ?Sized>(
        &self,
        chain_id: &ChainId,
        codec: &C,
    ) -> Result<Address, TxError> {
        if let Some((cached_chain, sender)) = self.from.get() {
            if cached_chain == chain_id {
                return Ok(*sender);
            }
        }

        let recovery_id = decode_v(&self.data.v, chain_id)?;
        let signature = EcdsaSignature::from_scalars(&self.data.r, &self.data.s, recovery_id);
        let sender = codec.recover_address(&self.signing_hash(chain_id), &signature)?;

        let _ = self.from.set((*chain_id, sender));
        Ok(sender)
    }

    /// Sender from a previous successful [`derive_sender`](Self::derive_sender).
    pub fn cached_sender(&self) -> Option<Address> {
        self.from.get().map(|(_, sender)| *sender)
    }

    fn reset_caches(&mut self) {
        self.hash = OnceLock::new();
        self.size = OnceLock::new();
        self.from = OnceLock::new();
    }

    // -------------------------------------------------------------------------
    // Validation and routing
    // -------------------------------------------------------------------------

    /// Stateless checks: gas price and amount must be strictly positive.
    pub fn validate_basic(&self) -> Result<(), TxError> {
        if self.data.gas_price.is_zero() {
            return Err(TxError::InvalidValue("price must be positive"));
        }
        if self.data.amount.is_zero() {
            return Err(TxError::InvalidValue("amount must be positive"));
        }
        Ok(())
    }

    /// Whether the payload carries an embedded batch.
    pub fn is_embedded_carrier(&self, carrier: &CarrierAddress) -> bool {
        self.data.recipient == Some(carrier.address())
    }

    /// Decode the payload as an embedded batch.
    pub fn decode_embedded_batch(&self) -> Result<EmbeddedBatch, BatchError> {
        EmbeddedBatch::decode(&self.data.payload)
    }

    /// Messages carried by this transaction: the embedded batch's messages
    /// for carriers, otherwise the transaction itself.
    pub fn messages(&self, carrier: &CarrierAddress) -> Result<Vec<EmbeddedMsg>, BatchError> {
        if self.is_embedded_carrier(carrier) {
            return Ok(self.decode_embedded_batch()?.messages);
        }
        Ok(vec![EmbeddedMsg::Ethereum(self.clone())])
    }
}

impl PartialEq for WireTransaction {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for WireTransaction {}

impl From<TxData> for WireTransaction {
    fn from(data: TxData) -> Self {
        Self::from_data(data)
    }
}

impl From<WireTransaction> for TxData {
    fn from(tx: WireTransaction) -> Self {
        tx.data
    }
}

impl Encodable for WireTransaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        self.data.rlp_append(s);
    }
}
