//! # Pipeline Outcome
//!
//! The handler always returns `(context, result, abort)`. A rejection sets
//! `abort` and carries a non-zero code whose log names the failure.

use super::context::Context;
use super::errors::{codes, AnteError, CODESPACE_SDK};
use std::fmt;

/// Pipeline progress. Terminal states are `PlainAccepted`,
/// `EmbeddedDelegated` and `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnteStage {
    Start,
    GasMetered,
    ChainIdResolved,
    SignerRecovered,
    PlainAccepted,
    EmbeddedDelegated,
    Rejected,
}

impl AnteStage {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AnteStage::PlainAccepted | AnteStage::EmbeddedDelegated | AnteStage::Rejected
        )
    }
}

impl fmt::Display for AnteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Result reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnteResult {
    /// Zero on success.
    pub code: u32,
    pub codespace: &'static str,
    /// Human-readable failure reason; empty on success.
    pub log: String,
    pub gas_wanted: u64,
    pub gas_used: u64,
    /// Typed failure, for callers that branch on the kind.
    pub error: Option<AnteError>,
}

impl AnteResult {
    pub fn ok(gas_wanted: u64, gas_used: u64) -> Self {
        Self {
            code: codes::OK,
            codespace: CODESPACE_SDK,
            log: String::new(),
            gas_wanted,
            gas_used,
            error: None,
        }
    }

    pub fn from_error(error: AnteError, gas_wanted: u64, gas_used: u64) -> Self {
        Self {
            code: error.code(),
            codespace: error.codespace(),
            log: error.to_string(),
            gas_wanted,
            gas_used,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == codes::OK
    }
}

/// What the handler hands back to the host.
#[derive(Debug, Clone)]
pub struct AnteOutcome {
    /// Context with the transaction's gas meter installed.
    pub ctx: Context,
    pub result: AnteResult,
    /// True on every rejection.
    pub abort: bool,
    /// Terminal stage reached.
    pub stage: AnteStage,
}

impl AnteOutcome {
    pub fn accepted(ctx: Context, stage: AnteStage) -> Self {
        let meter = ctx.gas_meter();
        let result = AnteResult::ok(meter.limit(), meter.consumed());
        Self {
            ctx,
            result,
            abort: false,
            stage,
        }
    }

    pub fn rejected(ctx: Context, error: AnteError, gas_wanted: u64, gas_used: u64) -> Self {
        Self {
            ctx,
            result: AnteResult::from_error(error, gas_wanted, gas_used),
            abort: true,
            stage: AnteStage::Rejected,
        }
    }

    /// The typed failure, if rejected.
    pub fn error(&self) -> Option<&AnteError> {
        self.result.error.as_ref()
    }
}
