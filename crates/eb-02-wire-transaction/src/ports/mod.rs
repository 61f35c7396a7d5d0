//! # Ports Layer
//!
//! - **Inbound (Driving)**: capability traits the ante handler consumes

pub mod inbound;
