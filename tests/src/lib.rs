//! # Wire-Bridge Test Suite
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks
//! └── src/
//!     ├── fixtures.rs   # keys, signed transactions, signed batches
//!     └── integration/  # end-to-end flows through EthAnteHandler
//! ```
//!
//! ```bash
//! cargo test -p eb-tests
//! cargo bench -p eb-tests
//! ```

pub mod fixtures;
pub mod integration;
