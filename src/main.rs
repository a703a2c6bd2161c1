//! storage-broker host CLI.
//!
//! Loads a host configuration file, instantiates the selected broker through
//! the registry and answers a single query.
//!
//! ```text
//!   config file ──▶ loader ──▶ registry.new_broker(name, payload)
//!                                        │
//!   --user ──▶ RequestContext ──────────▶ ▼
//!                                 list / find ──▶ JSON on stdout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use storage_broker::config::loader::load_config;
use storage_broker::observability::logging;
use storage_broker::{Broker, BrokerRegistry, HostConfig, RequestContext, User};

#[derive(Parser)]
#[command(name = "storage-broker")]
#[command(about = "Resolve virtual paths to storage providers", long_about = None)]
struct Cli {
    /// Host configuration file (TOML).
    #[arg(short, long)]
    config: PathBuf,

    /// Authenticated username; omit for an anonymous request.
    #[arg(short, long)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every provider visible to the user
    List,
    /// Find the provider responsible for a path
    Find { path: String },
    /// List registered broker names
    Brokers,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init(&config.observability)?;

    let registry = BrokerRegistry::with_builtin();
    let ctx = match cli.user {
        Some(username) => RequestContext::with_user(User::new(username)),
        None => RequestContext::anonymous(),
    };

    match cli.command {
        Commands::Brokers => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Commands::List => {
            let broker = build_broker(&registry, &config)?;
            let providers = broker.list_providers(&ctx)?;
            println!("{}", serde_json::to_string_pretty(&providers)?);
        }
        Commands::Find { path } => {
            let broker = build_broker(&registry, &config)?;
            match broker.find_provider(&ctx, &path) {
                Ok(provider) => println!("{}", serde_json::to_string_pretty(&provider)?),
                Err(e) => {
                    tracing::error!(
                        path = %path,
                        error = %e,
                        not_found = e.is_not_found(),
                        "Lookup failed"
                    );
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

fn build_broker(
    registry: &BrokerRegistry,
    config: &HostConfig,
) -> Result<Box<dyn Broker>, Box<dyn std::error::Error>> {
    let broker = registry.new_broker(&config.broker, config.driver_config()?)?;
    tracing::info!(broker = %config.broker, "Broker ready");
    Ok(broker)
}
