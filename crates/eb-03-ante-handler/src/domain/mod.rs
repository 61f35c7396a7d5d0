//! # Domain Layer
//!
//! Gas accounting, the execution context, embedded-batch authorization and
//! the outcome types returned to the host.

pub mod context;
pub mod embedded;
pub mod errors;
pub mod gas;
pub mod result;
