//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the AccountClient port
//! - tracing for the DiagnosticLog port

pub mod http;
pub mod tracing_log;

#[cfg(test)]
pub mod mock_server;
