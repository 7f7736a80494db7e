//! CLI command definitions and handlers.

mod address;
mod balance;

pub use address::{ListCommand, NewCommand};
pub use balance::BalanceCommand;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solarium_wallet::{WalletConfig, WalletService};

/// Solarium - deterministic Solana wallet operations.
#[derive(Parser)]
#[command(name = "solarium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available wallet commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Derive the next address and register it.
    New(NewCommand),

    /// Look up a balance by address or label.
    Balance(BalanceCommand),

    /// List all registered accounts.
    List(ListCommand),
}

impl Cli {
    /// Load configuration, build the wallet service, and dispatch.
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let config = WalletConfig::load(&self.config)?;
        let service = WalletService::from_config(&config)?;

        match self.command {
            Commands::New(cmd) => cmd.execute(&service)?,
            Commands::Balance(cmd) => cmd.execute(&service)?,
            Commands::List(cmd) => cmd.execute(&service),
        }
        Ok(())
    }
}
