//! Shared fixtures for flows and benchmarks.

use eb_01_signature_codec::{address_from_pubkey, Secp256k1Codec, SignatureCodecApi, SigningKey};
use eb_02_wire_transaction::{EmbeddedBatch, EmbeddedMsg, MsgSend, WireTransaction};
use eb_types::{keccak256, Account, Address, ChainId, U256};

/// Carrier address used throughout the suite.
pub const CARRIER: Address = Address::repeat_byte(0xca);

/// EIP-155 example transaction, signed for chain 1 with key `0x46` repeated.
pub const EIP155_SIGNED_RLP: &str = concat!(
    "f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a7640000",
    "8025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d899",
    "7f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83",
);

/// Sender of [`EIP155_SIGNED_RLP`].
pub const EIP155_SENDER: &str = "9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f";

pub fn random_key() -> (SigningKey, Address) {
    let key = SigningKey::random(&mut rand::thread_rng());
    let address = address_from_pubkey(key.verifying_key());
    (key, address)
}

/// A transfer of 1000 at price 1, signed for `chain_id`.
pub fn signed_tx(
    key: &SigningKey,
    chain_id: u64,
    recipient: Address,
    payload: Vec<u8>,
    gas_limit: u64,
) -> WireTransaction {
    let mut tx = WireTransaction::new(
        0,
        Some(recipient),
        U256::from(1_000u64),
        gas_limit,
        U256::one(),
        payload,
    );
    tx.sign(&ChainId::from(chain_id), key)
        .expect("signing with a valid key");
    tx
}

pub fn send(from: Address, to: Address, amount: u64) -> EmbeddedMsg {
    EmbeddedMsg::Send(MsgSend {
        from,
        to,
        amount: U256::from(amount),
    })
}

/// Fill `batch.signatures` with one signature per `(key, account)` pair.
pub fn sign_batch(batch: &mut EmbeddedBatch, chain_id: &str, signers: &[(&SigningKey, &Account)]) {
    let codec = Secp256k1Codec::new();
    batch.signatures = signers
        .iter()
        .map(|(key, account)| {
            let bytes = batch
                .sign_bytes(chain_id, account.account_number, account.sequence)
                .expect("sign document");
            codec
                .sign(&keccak256(&bytes), key)
                .expect("signing with a valid key")
                .to_compact()
                .to_vec()
        })
        .collect();
}
