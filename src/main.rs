//! form-relay server binary.

use std::path::PathBuf;

use clap::Parser;
use form_relay::lifecycle::{self, StartupOptions};

#[derive(Parser)]
#[command(name = "form-relay")]
#[command(about = "Relays form submissions to a secret destination URL", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the log level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    lifecycle::run(StartupOptions {
        config_path: cli.config,
        bind_address: cli.bind,
        log_level: cli.log_level,
    })
    .await?;

    Ok(())
}
