//! RepoNote client: document sharing from the command line
//!
//! Main entry point that loads configuration, initializes logging, and
//! dispatches the requested command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use reponote_cli::Cli;
use reponote_core::config::ClientConfig;
use reponote_core::config::logging::LoggingConfig;
use reponote_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(&config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        eprintln!("Error: {}", e.message);
        std::process::exit(1);
    }
}

/// Load configuration from the `--config` file or `REPONOTE_CONFIG`
fn load_configuration(cli: &Cli) -> Result<ClientConfig, AppError> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("REPONOTE_CONFIG").ok());

    ClientConfig::load(path.as_deref())
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
