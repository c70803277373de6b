use std::path::PathBuf;

use clap::{Parser, Subcommand};

use payment_relay::config::{load_config, RelayChainConfig};
use payment_relay::lifecycle::{self, Role, Shutdown};
use payment_relay::observability::init_logging;

#[derive(Parser)]
#[command(name = "payment-relay")]
#[command(about = "HTTP → relay → validator payment notice chain", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP ingress (POST /send)
    Ingress,
    /// Run the middle relay
    Relay,
    /// Run the terminal validator
    Validator,
}

impl From<Commands> for Role {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Ingress => Role::Ingress,
            Commands::Relay => Role::Relay,
            Commands::Validator => Role::Validator,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayChainConfig::default(),
    };

    init_logging(&config.logging)?;

    tracing::info!(
        config = ?cli.config,
        "payment-relay v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    lifecycle::run(cli.command.into(), config, &shutdown).await?;
    Ok(())
}
