//! # Ports Layer
//!
//! - **Inbound (Driving)**: `AnteHandler`, called by the host per transaction
//! - **Outbound (Driven)**: `AccountStore`, provided by the host

pub mod inbound;
pub mod outbound;
