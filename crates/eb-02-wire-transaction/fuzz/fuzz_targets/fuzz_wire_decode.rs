//! Fuzz target for the RLP wire-transaction decoder.
//!
//! ## Running
//!
//! ```bash
//! cd crates/eb-02-wire-transaction
//! cargo +nightly fuzz run fuzz_wire_decode
//! ```

#![no_main]

use eb_02_wire_transaction::WireTransaction;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic, and anything accepted must re-encode exactly
    if let Ok(tx) = WireTransaction::decode(data) {
        assert_eq!(tx.rlp_bytes(), data);
        assert_eq!(tx.size(), data.len());
    }
});
