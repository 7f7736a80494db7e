//! Solarium - a deterministic Solana wallet CLI.
//!
//! Derives addresses from the configured mnemonic and queries balances
//! from the configured RPC endpoint.

mod commands;

use clap::Parser;
use commands::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
