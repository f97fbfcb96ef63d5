//! Bankview CLI - your bank accounts in the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{accounts, config};

/// Environment variable selecting the log format (`json` or `pretty`)
const LOG_FORMAT_ENV: &str = "BANKVIEW_LOG_FORMAT";

/// Bankview - your bank accounts in the terminal
#[derive(Parser)]
#[command(name = "bv", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and show the accounts of a user
    Accounts {
        /// User identifier
        user_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

/// Install the tracing subscriber (stderr, `RUST_LOG` filter, default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        output::warning(&format!("Logging disabled: {}", e));
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Accounts { user_id, json } => accounts::run(&user_id, json).await,
        Commands::Config { command } => config::run(command),
    }
}
