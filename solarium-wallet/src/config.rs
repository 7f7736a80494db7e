//! JSON configuration loading.
//!
//! The configuration is constructed once at startup and passed by value
//! into the wallet facade; there is no process-wide singleton. Field names
//! follow the historical `config.json` layout.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_RPC_URL: &str = "https://api.testnet.solana.com";

/// Wallet configuration: operator mnemonic, RPC endpoint, and timeouts.
#[derive(Clone, Deserialize)]
pub struct WalletConfig {
    /// Space-delimited mnemonic phrase. Required.
    #[serde(rename = "Mnemonic")]
    pub mnemonic: String,

    /// Ledger RPC endpoint URL.
    #[serde(rename = "SolanaRpcUrl", default = "default_rpc_url")]
    pub rpc_url: String,

    /// Read timeout in milliseconds.
    #[serde(rename = "ReadTimeoutMs", default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(rename = "ConnectTimeoutMs", default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Write timeout in milliseconds.
    #[serde(rename = "WriteTimeoutMs", default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_owned()
}

const fn default_read_timeout_ms() -> u64 {
    20_000
}

const fn default_connect_timeout_ms() -> u64 {
    10_000
}

const fn default_write_timeout_ms() -> u64 {
    20_000
}

impl WalletConfig {
    /// Load and validate configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// the mnemonic field is blank.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingMnemonic`] if the mnemonic is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mnemonic.trim().is_empty() {
            return Err(ConfigError::MissingMnemonic);
        }
        Ok(())
    }

    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Read timeout as a [`Duration`].
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

// The mnemonic reconstructs every derived key, so Debug redacts it.
impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("mnemonic", &"***")
            .field("rpc_url", &self.rpc_url)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("write_timeout_ms", &self.write_timeout_ms)
            .finish()
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON.
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),

    /// The `Mnemonic` field is absent or blank.
    #[error("a mnemonic is required in the configuration (field \"Mnemonic\")")]
    MissingMnemonic,
}
