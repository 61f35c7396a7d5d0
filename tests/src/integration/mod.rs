//! # Integration Flows
//!
//! End-to-end runs of the ante handler over real codecs and stores.

pub mod flows;
