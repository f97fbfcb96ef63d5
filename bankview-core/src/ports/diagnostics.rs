//! Diagnostic log port

/// Sink for diagnostic records
///
/// Writes are fire-and-forget: implementations must swallow their own
/// failures.
pub trait DiagnosticLog: Send + Sync {
    /// Record `message` under `tag`
    fn log(&self, tag: &str, message: &str);
}
