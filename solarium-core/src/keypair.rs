//! Ed25519 keypair and base58 address handling.

use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroizing;

use crate::Error;

/// Length of a Solana public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// An Ed25519 keypair derived from a SLIP-0010 leaf.
///
/// The 32-byte leaf key material acts as the Ed25519 seed; expansion to the
/// 64-byte signing key and 32-byte public key follows the standard Ed25519
/// scheme. The signing key zeroizes its secret on drop.
#[derive(Clone)]
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    /// Expand a 32-byte Ed25519 seed into a keypair.
    #[must_use]
    pub fn from_ed25519_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(seed),
        }
    }

    /// Raw 32-byte public key.
    #[must_use]
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        let verifying: VerifyingKey = self.signing.verifying_key();
        verifying.to_bytes()
    }

    /// Base58-encoded public key, the external address format.
    #[must_use]
    pub fn address(&self) -> String {
        encode_address(&self.public_key())
    }

    /// 64-byte secret || public keypair encoding, zeroized on drop.
    #[must_use]
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing.to_keypair_bytes())
    }
}

impl core::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

/// Encode a raw public key as a base58 address string.
#[must_use]
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    bs58::encode(public_key).into_string()
}

/// Decode a base58 address string into a raw public key.
///
/// # Errors
///
/// Returns [`Error::InvalidAddress`] if the string is not valid base58 or
/// does not decode to exactly 32 bytes.
pub fn decode_address(address: &str) -> Result<[u8; PUBLIC_KEY_LEN], Error> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|_| Error::InvalidAddress)?;

    bytes.try_into().map_err(|_| Error::InvalidAddress)
}
