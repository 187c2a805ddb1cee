//! Chain deployment parameter CLI.
//!
//! Inspects the per-chain parameters, development chains and network
//! endpoints used by deployment tooling.
//!
//! # Usage
//!
//! ```bash
//! # Show every registered chain and the default bundle
//! chainparams list
//!
//! # Parameters for a chain ID (falls back to the default bundle)
//! chainparams resolve 137
//!
//! # Is a network a local development chain?
//! chainparams is-dev localhost
//!
//! # Networks with RPC endpoints resolved from the environment / .env
//! chainparams networks
//!
//! # Write the builtin table as an editable config file
//! chainparams init --output chainparams.toml
//! ```

mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chainparams::config::{self, DEFAULT_CONFIG_FILE};
use chainparams::{ChainParameterResolver, DEFAULT_NETWORK, NetworkEnv};
use clap::{Parser, Subcommand};

/// Chain deployment parameter inspector.
#[derive(Debug, Parser)]
#[command(name = "chainparams", version, about)]
struct Cli {
    /// Parameter config file. The builtin table is used if it does not exist.
    #[arg(long, global = true, env = "CHAINPARAMS_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List all registered chains and the default bundle.
    List,

    /// Print the parameters for a chain ID as JSON.
    Resolve {
        /// EIP-155 chain ID. Unregistered IDs resolve to the default bundle.
        chain_id: u64,
    },

    /// Print whether a chain name is a local development chain.
    IsDev {
        /// Chain name, e.g. `localhost`.
        name: String,
    },

    /// List networks with endpoints resolved from the environment.
    Networks,

    /// Write the builtin parameter table as a config file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            cmd_list(&load_resolver(&cli.config)?);
            Ok(())
        }
        Command::Resolve { chain_id } => cmd_resolve(&load_resolver(&cli.config)?, chain_id),
        Command::IsDev { name } => {
            cmd_is_dev(&load_resolver(&cli.config)?, &name);
            Ok(())
        }
        Command::Networks => {
            cmd_networks();
            Ok(())
        }
        Command::Init { output, force } => cmd_init(&output, force),
    }
}

fn load_resolver(path: &Path) -> Result<ChainParameterResolver> {
    config::load(path).with_context(|| format!("loading {}", path.display()))
}

/// Execute the `list` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_list(resolver: &ChainParameterResolver) {
    println!("{}", output::chain_table(resolver));
}

/// Execute the `resolve` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_resolve(resolver: &ChainParameterResolver, chain_id: u64) -> Result<()> {
    let params = resolver.resolve(chain_id);
    if params.is_default() {
        tracing::info!(chain_id, "chain not registered, showing default bundle");
    }
    println!("{}", serde_json::to_string_pretty(params)?);
    Ok(())
}

/// Execute the `is-dev` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_is_dev(resolver: &ChainParameterResolver, name: &str) {
    println!("{}", resolver.is_development_chain(name));
}

/// Execute the `networks` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_networks() {
    let env = NetworkEnv::from_process_env();
    let endpoints = env.endpoints();
    for ep in &endpoints {
        if env.uses_placeholder(ep.network) {
            tracing::warn!(network = %ep.network, "RPC URL not set, using placeholder");
        }
    }
    println!("{}", output::network_table(&endpoints, DEFAULT_NETWORK.name()));
}

/// Execute the `init` subcommand.
fn cmd_init(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        );
    }
    let content = config::generate_default_config()?;
    std::fs::write(output, content).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(path = %output.display(), "config file written");
    Ok(())
}
