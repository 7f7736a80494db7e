//! Error types for key derivation.

use core::fmt;

/// Errors that can occur during seed generation or key derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Mnemonic phrase has too few words.
    InvalidMnemonic {
        /// Number of words found after whitespace splitting.
        words: usize,
    },
    /// Derivation path component collides with the hardening offset.
    InvalidPathComponent {
        /// Path level name (`account`, `change`, or `index`).
        level: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// String is not a base58-encoded 32-byte public key.
    InvalidAddress,
    /// HMAC key setup failed.
    Hmac,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMnemonic { words } => {
                write!(f, "mnemonic must contain at least 12 words, found {words}")
            }
            Self::InvalidPathComponent { level, value } => {
                write!(f, "derivation path {level} {value} exceeds the hardened index range")
            }
            Self::InvalidAddress => write!(f, "not a valid base58-encoded public key"),
            Self::Hmac => write!(f, "HMAC key setup failed"),
        }
    }
}

impl std::error::Error for Error {}
