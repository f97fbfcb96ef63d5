//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The services
//! depend only on these traits, not on concrete implementations.

mod account_client;
mod diagnostics;

pub use account_client::{AccountClient, RawResponse};
pub use diagnostics::DiagnosticLog;
