//! # Ante Handler Subsystem (EB-03)
//!
//! The pre-execution gate for wire transactions. A plain transfer is accepted
//! once its EIP-155 signature recovers under the context's chain id. A
//! transaction sent to the carrier address has its payload decoded as an
//! embedded batch, and every signer in that batch is authorized against the
//! account store.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): gas meter, context, embedded validation,
//!   outcome and error types
//! - **Ports Layer** (`ports/`): `AnteHandler` (inbound), `AccountStore` (outbound)
//! - **Adapters Layer** (`adapters/`): in-memory, cached and gas-metered stores
//! - **Service Layer** (`service.rs`): `EthAnteHandler`
//!
//! ## State Changes
//!
//! Only embedded batches touch state: each accepted signer's sequence is
//! incremented. Nothing is rolled back on a later failure; wrap the store in
//! a [`CachedAccountStore`] and commit only accepted transactions to get
//! all-or-nothing behaviour.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::cache_store::CachedAccountStore;
pub use adapters::gas_store::GasMeteredStore;
pub use adapters::memory_store::InMemoryAccountStore;
pub use config::{AnteConfig, ConfigError, GasConfig};
pub use domain::context::Context;
pub use domain::embedded::EmbeddedValidator;
pub use domain::errors::{codes, AnteError, Halt, CODESPACE_BRIDGE, CODESPACE_SDK};
pub use domain::gas::{descriptors, GasMeter, OutOfGas};
pub use domain::result::{AnteOutcome, AnteResult, AnteStage};
pub use ports::inbound::AnteHandler;
pub use ports::outbound::AccountStore;
pub use service::EthAnteHandler;
