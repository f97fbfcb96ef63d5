//! Configuration management
//!
//! Settings live in `settings.json` inside the bankview directory:
//! ```json
//! {
//!   "api": { "baseUrl": "https://bank.example/api/v1", "apiKey": "...", "timeoutSecs": 30 }
//! }
//! ```
//! Keys the client doesn't manage are preserved when saving.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default account API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "BANKVIEW_BASE_URL";

/// Environment variable overriding the API key
pub const API_KEY_ENV: &str = "BANKVIEW_API_KEY";

const SETTINGS_FILE: &str = "settings.json";

/// Shortest API key whose last four characters may be shown
const MIN_KEY_LEN_FOR_TAIL: usize = 8;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Bankview client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn read_settings(settings_path: &Path) -> Result<SettingsFile> {
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(settings_path)?;
    // A malformed file falls back to defaults
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

impl Config {
    /// Load config from the bankview directory
    ///
    /// `BANKVIEW_BASE_URL` and `BANKVIEW_API_KEY` take precedence over the file.
    pub fn load(bankview_dir: &Path) -> Result<Self> {
        Self::load_with_env(bankview_dir, |key| std::env::var(key).ok())
    }

    fn load_with_env(bankview_dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = read_settings(&bankview_dir.join(SETTINGS_FILE))?;

        let base_url = non_empty(env(BASE_URL_ENV))
            .or_else(|| non_empty(raw.api.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = non_empty(env(API_KEY_ENV)).or_else(|| non_empty(raw.api.api_key));
        let timeout_secs = raw.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            anyhow::bail!("api.timeoutSecs in settings.json must be at least 1");
        }
        let timeout = Duration::from_secs(timeout_secs);

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }

    /// Save config to the bankview directory
    /// Preserves other settings that the client doesn't manage
    pub fn save(&self, bankview_dir: &Path) -> Result<()> {
        let settings_path = bankview_dir.join(SETTINGS_FILE);
        let mut settings = read_settings(&settings_path)?;

        settings.api.base_url = Some(self.base_url.clone());
        settings.api.api_key = self.api_key.clone();
        settings.api.timeout_secs = Some(self.timeout.as_secs());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// API key with everything but the last four characters hidden
    ///
    /// Keys shorter than [`MIN_KEY_LEN_FOR_TAIL`] are hidden entirely.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            if key.chars().count() < MIN_KEY_LEN_FOR_TAIL {
                return "****".to_string();
            }
            let visible: String = key
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("****{}", visible)
        })
    }
}
