//! Diagnostic log backed by `tracing`

use tracing::error;

use crate::ports::DiagnosticLog;

/// Forwards diagnostic records to the `tracing` subscriber as error events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticLog for TracingDiagnostics {
    fn log(&self, tag: &str, message: &str) {
        error!(target: "bankview::diagnostics", tag, "{}", message);
    }
}
