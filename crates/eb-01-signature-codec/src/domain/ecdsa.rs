//! # ECDSA (secp256k1)
//!
//! Signing and public-key recovery over 32-byte prehashed messages.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must not exceed half the curve order
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Constant-Time Operations**: range checks use the `subtle` crate
//! - Signing is deterministic (RFC 6979) and always emits low-S signatures

use super::entities::EcdsaSignature;
use super::errors::SignatureError;
use eb_types::{keccak256, Address, Hash};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (for malleability check).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// RECOVERY
// =============================================================================

/// Recover the signer's address from a signature over `message_hash`.
///
/// Checks performed before recovery:
/// 1. R and S are in `[1, n-1]`
/// 2. S is in the lower half of the order (EIP-2)
/// 3. `v` is a valid recovery id (0, 1, 27 or 28)
pub fn recover_address(
    message_hash: &Hash,
    signature: &EcdsaSignature,
) -> Result<Address, SignatureError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(SignatureError::InvalidFormat);
    }

    if !is_low_s(&signature.s) {
        return Err(SignatureError::MalleableSignature);
    }

    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let sig = Signature::from_slice(&sig_bytes).map_err(|_| SignatureError::InvalidFormat)?;

    let recovered_key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Recover the signer and check it against `expected`.
pub fn verify_signer(
    message_hash: &Hash,
    signature: &EcdsaSignature,
    expected: &Address,
) -> Result<(), SignatureError> {
    let actual = recover_address(message_hash, signature)?;
    if actual != *expected {
        return Err(SignatureError::SignerMismatch {
            expected: *expected,
            actual,
        });
    }
    Ok(())
}

// =============================================================================
// SIGNING
// =============================================================================

/// Sign a 32-byte prehash. The returned `v` is the bare recovery id (0 or 1).
pub fn sign_prehash(
    message_hash: &Hash,
    private_key: &SigningKey,
) -> Result<EcdsaSignature, SignatureError> {
    let (sig, recid) = private_key
        .sign_prehash_recoverable(message_hash)
        .map_err(|_| SignatureError::SigningFailed)?;

    // Flipping S to n - S mirrors R's point, so the y-parity bit flips too
    let (sig, recid) = match sig.normalize_s() {
        Some(normalized) => (
            normalized,
            RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
        ),
        None => (sig, recid),
    };

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    Ok(EcdsaSignature {
        r,
        s,
        v: recid.to_byte(),
    })
}

/// Parse a raw 32-byte private key.
pub fn signing_key_from_bytes(bytes: &[u8]) -> Result<SigningKey, SignatureError> {
    if bytes.len() != 32 {
        return Err(SignatureError::InvalidPrivateKey);
    }
    let mut buf = Zeroizing::new([0u8; 32]);
    buf.copy_from_slice(bytes);
    SigningKey::from_slice(buf.as_slice()).map_err(|_| SignatureError::InvalidPrivateKey)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Derive Ethereum address from public key: last 20 bytes of
/// keccak256 over the uncompressed point without its 0x04 prefix.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// Check if S value is at most half the curve order (EIP-2).
///
/// Runs in constant time regardless of the input value.
pub(crate) fn is_low_s(s: &[u8; 32]) -> bool {
    (!ct_less_than(&SECP256K1_HALF_ORDER, s)).into()
}

/// Check if a scalar value is in valid range [1, n-1] for ECDSA.
///
/// Runs in constant time regardless of the input value.
pub(crate) fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    (!is_zero & ct_less_than(scalar, &SECP256K1_ORDER)).into()
}

/// Constant-time big-endian `a < b`.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for (a_byte, b_byte) in a.iter().zip(b.iter()) {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a_byte < b_byte) as u8);
        let byte_greater = Choice::from((a_byte > b_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::from_byte(id).ok_or(SignatureError::InvalidRecoveryId(v))
}

// =============================================================================
// TEST HELPERS
// =============================================================================
