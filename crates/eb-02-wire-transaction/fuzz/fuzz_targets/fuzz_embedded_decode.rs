//! Fuzz target for the embedded batch payload decoder.

#![no_main]

use eb_02_wire_transaction::EmbeddedBatch;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(batch) = EmbeddedBatch::decode(data) {
        // Signer derivation and validation must not panic on decoded input
        let _ = batch.required_signers();
        let _ = batch.validate_basic();
    }
});
