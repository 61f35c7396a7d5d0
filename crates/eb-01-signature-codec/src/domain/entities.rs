//! # Domain Entities

use super::errors::SignatureError;
use eb_types::U256;
use serde::{Deserialize, Serialize};

/// Length of a compact `r ‖ s ‖ v` signature.
pub const COMPACT_SIGNATURE_LEN: usize = 65;

/// ECDSA signature on the secp256k1 curve.
///
/// `v` is the raw recovery id. Both the bare form (0, 1) and the
/// Ethereum offset form (27, 28) are accepted on recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes, big-endian)
    pub r: [u8; 32],
    /// S component (32 bytes, big-endian)
    pub s: [u8; 32],
    /// Recovery ID
    pub v: u8,
}

impl EcdsaSignature {
    /// Build a signature from big-integer components.
    pub fn from_scalars(r: &U256, s: &U256, v: u8) -> Self {
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r.to_big_endian(&mut r_bytes);
        s.to_big_endian(&mut s_bytes);
        Self {
            r: r_bytes,
            s: s_bytes,
            v,
        }
    }

    /// R as a big integer.
    pub fn r_u256(&self) -> U256 {
        U256::from_big_endian(&self.r)
    }

    /// S as a big integer.
    pub fn s_u256(&self) -> U256 {
        U256::from_big_endian(&self.s)
    }

    /// Serialize into the 65-byte compact form `r ‖ s ‖ v`.
    pub fn to_compact(&self) -> [u8; COMPACT_SIGNATURE_LEN] {
        let mut out = [0u8; COMPACT_SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Parse the 65-byte compact form.
    pub fn from_compact(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != COMPACT_SIGNATURE_LEN {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_layout() {
        let sig = EcdsaSignature {
            r: [0x11; 32],
            s: [0x22; 32],
            v: 1,
        };
        let compact = sig.to_compact();
        assert_eq!(&compact[..32], &[0x11; 32]);
        assert_eq!(&compact[32..64], &[0x22; 32]);
        assert_eq!(compact[64], 1);
        assert_eq!(EcdsaSignature::from_compact(&compact).unwrap(), sig);
    }

    #[test]
    fn test_from_compact_wrong_length() {
        assert_eq!(
            EcdsaSignature::from_compact(&[0u8; 64]),
            Err(SignatureError::InvalidLength(64))
        );
        assert_eq!(
            EcdsaSignature::from_compact(&[]),
            Err(SignatureError::InvalidLength(0))
        );
    }

    #[test]
    fn test_from_scalars_left_pads() {
        let sig = EcdsaSignature::from_scalars(&U256::from(0x0102u64), &U256::one(), 0);
        assert_eq!(sig.r[30..], [0x01, 0x02]);
        assert!(sig.r[..30].iter().all(|b| *b == 0));
        assert_eq!(sig.s[31], 1);
        assert_eq!(sig.r_u256(), U256::from(0x0102u64));
        assert_eq!(sig.s_u256(), U256::one());
    }
}
