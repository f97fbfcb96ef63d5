//! Config command - show or change client configuration

use std::time::Duration;

use anyhow::Result;
use bankview_core::config::Config;
use clap::Subcommand;
use serde::Serialize;

use super::ensure_bankview_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update settings.json
    Set {
        /// Account API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// API key sent as x-api-key
        #[arg(long)]
        api_key: Option<String>,
        /// Request timeout in seconds (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigView {
    settings_path: String,
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let bankview_dir = ensure_bankview_dir()?;
    let mut config = Config::load(&bankview_dir)?;

    match command {
        ConfigCommands::Show { json } => {
            let view = ConfigView {
                settings_path: bankview_dir.join("settings.json").display().to_string(),
                base_url: config.base_url.clone(),
                api_key: config.masked_api_key(),
                timeout_secs: config.timeout.as_secs(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.add_row(vec!["Settings", &view.settings_path]);
            table.add_row(vec!["Base URL", &view.base_url]);
            table.add_row(vec!["API key", view.api_key.as_deref().unwrap_or("(none)")]);
            table.add_row(vec!["Timeout", &format!("{}s", view.timeout_secs)]);
            println!("{}", table);
        }
        ConfigCommands::Set {
            base_url,
            api_key,
            timeout_secs,
        } => {
            if base_url.is_none() && api_key.is_none() && timeout_secs.is_none() {
                anyhow::bail!("Nothing to set. Pass --base-url, --api-key or --timeout-secs");
            }
            if let Some(url) = base_url {
                config.base_url = url;
            }
            if let Some(key) = api_key {
                config.api_key = Some(key).filter(|k| !k.is_empty());
            }
            if let Some(secs) = timeout_secs {
                config.timeout = Duration::from_secs(secs);
            }

            config.save(&bankview_dir)?;
            output::success("Configuration saved");
        }
    }

    Ok(())
}
