//! Bankview Core - account data access for the Bankview banking client
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core entities (Account, AccountsResult)
//! - **wire**: API wire model and the declarative key tables used to decode it
//! - **ports**: Trait definitions for external dependencies (AccountClient, DiagnosticLog)
//! - **services**: Business logic orchestration (AccountService)
//! - **adapters**: Concrete implementations (reqwest, tracing)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod wire;

#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::http::HttpAccountClient;
use adapters::tracing_log::TracingDiagnostics;
use config::Config;
use services::AccountService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Account, AccountsResult};
pub use wire::{AccountWire, AccountsWire};

/// Main context for Bankview operations
///
/// Holds the loaded configuration and the wired services.
pub struct BankviewContext {
    pub config: Config,
    pub account_service: AccountService,
}

impl BankviewContext {
    /// Create a new Bankview context from the settings in `bankview_dir`
    pub fn new(bankview_dir: &Path) -> Result<Self> {
        let config = Config::load(bankview_dir)?;
        Self::from_config(config)
    }

    /// Create a context from an already loaded configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let client = Arc::new(HttpAccountClient::from_config(&config)?);
        let account_service = AccountService::new(client, Arc::new(TracingDiagnostics::new()));

        Ok(Self {
            config,
            account_service,
        })
    }
}
