//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that the transaction and ante-handler crates use

pub mod inbound;
