//! Blue Ocean CLI
//!
//! Command-line interface for encoding and decoding pipeline API requests.

mod commands;
mod config;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blueocean")]
#[command(about = "Blue Ocean pipeline request tool", long_about = None)]
struct Cli {
    /// Log filter (e.g. "debug" or "blueocean_core=trace")
    #[arg(long, env = "BLUEOCEAN_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        log_filter: cli.log_level,
    };

    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    handle_command(cli.command, &config).await
}
