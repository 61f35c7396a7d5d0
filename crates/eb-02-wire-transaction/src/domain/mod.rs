//! # Domain Layer
//!
//! Transaction model and codecs. No I/O.

pub mod carrier;
pub mod embedded;
pub mod errors;
pub mod messages;
pub mod transaction;
