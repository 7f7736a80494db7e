//! SLIP-0010 Ed25519 key derivation.
//!
//! Implements SLIP-0010 for deriving Ed25519 keys from a seed.
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::{Error, Seed};

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Offset applied to every child index; Ed25519 supports only hardened
/// derivation, so a child key can never be computed from the parent public
/// key alone.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// A SLIP-0010 extended key: 32 bytes of key material plus the chain code
/// needed to derive further children.
pub struct ExtendedKey {
    key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    /// Derive the master extended key from a seed.
    pub fn from_seed(seed: &Seed) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(ED25519_CURVE).map_err(|_| Error::Hmac)?;
        mac.update(seed.as_bytes());
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive the hardened child at `index`.
    ///
    /// The index must be below [`HARDENED_OFFSET`]; the offset is applied
    /// here before the index is mixed with the parent key material.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        let hardened_index = index | HARDENED_OFFSET;

        let mut mac = HmacSha512::new_from_slice(&*self.chain_code).map_err(|_| Error::Hmac)?;

        // For hardened derivation: 0x00 || private_key || index
        mac.update(&[0x00]);
        mac.update(&*self.key);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// 32-byte key material, used as an Ed25519 seed at the leaf.
    pub fn key_bytes(&self) -> &[u8; 32] {
        &self.key
    }

    fn split(digest: &[u8]) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);

        Self { key, chain_code }
    }
}
