//! CLI command implementations

pub mod accounts;
pub mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bankview_core::BankviewContext;

/// Get the bankview directory from environment or default
pub fn get_bankview_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("BANKVIEW_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".bankview"))
        .context("Could not find home directory")
}

/// Get or create the bankview directory, creating it if needed
pub fn ensure_bankview_dir() -> Result<PathBuf> {
    let bankview_dir = get_bankview_dir()?;
    std::fs::create_dir_all(&bankview_dir)
        .with_context(|| format!("Failed to create bankview directory: {:?}", bankview_dir))?;
    Ok(bankview_dir)
}

/// Build the bankview context
pub fn get_context() -> Result<BankviewContext> {
    let bankview_dir = ensure_bankview_dir()?;
    BankviewContext::new(&bankview_dir).context("Failed to initialize bankview context")
}
