//! # EIP-155 `v` Encoding
//!
//! Protected signatures encode `v = recovery_id + 35 + 2 * chain_id`. Chain id
//! zero selects the legacy scheme, `v = recovery_id + 27`.

use super::errors::SignatureError;
use eb_types::{ChainId, U256};

const LEGACY_V_OFFSET: u64 = 27;
const PROTECTED_V_OFFSET: u64 = 35;

/// Encode a bare recovery id (0 or 1) into `v` for `chain_id`.
pub fn encode_v(recovery_id: u8, chain_id: &ChainId) -> Result<U256, SignatureError> {
    let recovery_id = U256::from(recovery_id);
    if chain_id.is_zero() {
        return Ok(recovery_id + U256::from(LEGACY_V_OFFSET));
    }

    chain_id
        .as_u256()
        .checked_mul(U256::from(2u64))
        .and_then(|doubled| doubled.checked_add(U256::from(PROTECTED_V_OFFSET)))
        .and_then(|base| base.checked_add(recovery_id))
        .ok_or_else(|| SignatureError::ChainIdOverflow(chain_id.to_string()))
}

/// Reverse [`encode_v`], returning the bare recovery id.
///
/// Fails if `v` was not produced under `chain_id`, including the unsigned
/// case `v = 0`.
pub fn decode_v(v: &U256, chain_id: &ChainId) -> Result<u8, SignatureError> {
    let inconsistent = || SignatureError::InconsistentV {
        v: v.to_string(),
        chain_id: chain_id.to_string(),
    };

    let offset = if chain_id.is_zero() {
        U256::from(LEGACY_V_OFFSET)
    } else {
        chain_id
            .as_u256()
            .checked_mul(U256::from(2u64))
            .and_then(|doubled| doubled.checked_add(U256::from(PROTECTED_V_OFFSET)))
            .ok_or_else(inconsistent)?
    };

    let recovery_id = v.checked_sub(offset).ok_or_else(inconsistent)?;
    if recovery_id > U256::one() {
        return Err(inconsistent());
    }
    Ok(recovery_id.low_u32() as u8)
}

/// Whether `v` carries a chain id (anything other than the legacy 27/28).
pub fn is_protected(v: &U256) -> bool {
    *v != U256::from(27u64) && *v != U256::from(28u64)
}

/// Chain id a signature's `v` was produced under.
///
/// Legacy `v` (27/28) yields chain id zero; `v` values below 35 that are not
/// legacy (the unsigned `0` among them) yield `None`.
pub fn extract_chain_id(v: &U256) -> Option<ChainId> {
    if !is_protected(v) {
        return Some(ChainId::default());
    }
    v.checked_sub(U256::from(PROTECTED_V_OFFSET))
        .map(|rest| ChainId::new(rest / 2))
}
