//! # Inbound Ports (Driving Ports / API)

use crate::domain::context::Context;
use crate::domain::result::AnteOutcome;
use eb_02_wire_transaction::Tx;

/// Pre-execution gate for submitted transactions.
pub trait AnteHandler: Send + Sync {
    /// Validate `tx` under `ctx`.
    ///
    /// Never returns an error: rejections are reported in the outcome with
    /// `abort = true`. Panics raised inside the handler are not caught.
    fn handle(&self, ctx: Context, tx: &dyn Tx) -> AnteOutcome;
}
