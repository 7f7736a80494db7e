//! Hierarchical keypair derivation along the Solana account path.

use crate::slip10::{ExtendedKey, HARDENED_OFFSET};
use crate::{Error, Keypair, Mnemonic, Seed};

/// BIP44 purpose level.
pub const PURPOSE: u32 = 44;

/// Registered coin type for Solana.
pub const COIN_TYPE: u32 = 501;

/// Account level used when callers do not choose one.
pub const DEFAULT_ACCOUNT: u32 = 0;

/// Change level used when callers do not choose one.
pub const DEFAULT_CHANGE: u32 = 0;

/// Derives keypairs at `m/44'/501'/account'/change'/index'`.
///
/// Owns the seed for its lifetime; derivation is pure and deterministic,
/// with no network or disk access. Every level is hardened; Ed25519
/// supports no other derivation mode.
#[derive(Debug)]
pub struct Deriver {
    seed: Seed,
}

impl Deriver {
    /// Create a deriver over an existing seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// Create a deriver from a mnemonic and passphrase, fixing the seed
    /// once at construction.
    #[must_use]
    pub fn from_mnemonic(mnemonic: &Mnemonic, passphrase: &str) -> Self {
        Self::new(mnemonic.to_seed(passphrase))
    }

    /// Derive the keypair at `m/44'/501'/account'/change'/index'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathComponent`] if any coordinate collides
    /// with the hardening offset (>= 2^31).
    pub fn derive(&self, account: u32, change: u32, index: u32) -> Result<Keypair, Error> {
        validate_component("account", account)?;
        validate_component("change", change)?;
        validate_component("index", index)?;

        let master = ExtendedKey::from_seed(&self.seed)?;
        let purpose = master.derive_hardened(PURPOSE)?;
        let coin_type = purpose.derive_hardened(COIN_TYPE)?;
        let account_key = coin_type.derive_hardened(account)?;
        let change_key = account_key.derive_hardened(change)?;
        let leaf = change_key.derive_hardened(index)?;

        Ok(Keypair::from_ed25519_seed(leaf.key_bytes()))
    }

    /// Derive only the base58 address at the given coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`Deriver::derive`].
    pub fn derive_address(&self, account: u32, change: u32, index: u32) -> Result<String, Error> {
        self.derive(account, change, index).map(|kp| kp.address())
    }

    /// Format the derivation path string for the given coordinates.
    #[must_use]
    pub fn format_path(account: u32, change: u32, index: u32) -> String {
        format!("m/{PURPOSE}'/{COIN_TYPE}'/{account}'/{change}'/{index}'")
    }
}

fn validate_component(level: &'static str, value: u32) -> Result<(), Error> {
    if value >= HARDENED_OFFSET {
        return Err(Error::InvalidPathComponent { level, value });
    }
    Ok(())
}
