//! Mnemonic handling and seed generation.
//!
//! A mnemonic is an ordered sequence of at least 12 lowercase words. The
//! 64-byte seed is derived with PBKDF2-HMAC-SHA512 over the NFKD-normalized
//! phrase, salted with `"mnemonic"` plus the normalized passphrase, for
//! 2048 rounds. The same mnemonic and passphrase always yield the same
//! seed; every downstream derivation relies on that.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::Error;

/// PBKDF2 round count fixed by BIP39.
const PBKDF2_ROUNDS: u32 = 2048;

/// Minimum accepted word count.
const MIN_WORDS: usize = 12;

/// Seed length in bytes.
const SEED_LEN: usize = 64;

/// A validated mnemonic phrase.
///
/// Holds the whitespace-normalized phrase and zeroizes it on drop. The
/// phrase can reconstruct every derived key, so it is treated as a secret
/// and never appears in error payloads or `Debug` output.
pub struct Mnemonic {
    phrase: Zeroizing<String>,
    words: usize,
}

impl Mnemonic {
    /// Parse a space-delimited mnemonic phrase.
    ///
    /// The input is trimmed and split on whitespace; at least 12 words are
    /// required. No wordlist or checksum validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if fewer than 12 words remain
    /// after splitting.
    pub fn parse(phrase: &str) -> Result<Self, Error> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.len() < MIN_WORDS {
            return Err(Error::InvalidMnemonic { words: words.len() });
        }

        Ok(Self {
            phrase: Zeroizing::new(words.join(" ")),
            words: words.len(),
        })
    }

    /// Derive the 64-byte seed for this mnemonic and passphrase.
    ///
    /// The passphrase may be empty. No caching is performed across calls.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let normalized_phrase: Zeroizing<String> = Zeroizing::new(self.phrase.nfkd().collect());
        let normalized_passphrase: String = passphrase.nfkd().collect();
        let salt = Zeroizing::new(format!("mnemonic{normalized_passphrase}"));

        let mut bytes = Zeroizing::new([0u8; SEED_LEN]);
        pbkdf2_hmac::<Sha512>(
            normalized_phrase.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut *bytes,
        );

        Seed(bytes)
    }

    /// Number of words in the phrase.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words
    }
}

impl core::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Mnemonic({} words)", self.words)
    }
}

/// A 64-byte derivation seed, zeroized on drop.
///
/// Derived once per mnemonic + passphrase pair and held in memory only.
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// Seed length in bytes.
    pub const LEN: usize = SEED_LEN;

    /// Raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl core::fmt::Debug for Seed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Seed(64 bytes)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "urge pulp usage sister evidence arrest palm math please chief egg abuse";

    #[test]
    fn parses_twelve_words() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
    }

    #[test]
    fn normalizes_interior_whitespace() {
        let padded = "  urge  pulp usage sister evidence arrest palm math please chief egg  abuse ";
        let a = Mnemonic::parse(padded).unwrap();
        let b = Mnemonic::parse(TEST_MNEMONIC).unwrap();

        assert_eq!(a.to_seed("").as_bytes(), b.to_seed("").as_bytes());
    }

    #[test]
    fn rejects_blank_phrase() {
        let result = Mnemonic::parse("   ");
        assert_eq!(result.unwrap_err(), Error::InvalidMnemonic { words: 0 });
    }

    #[test]
    fn rejects_short_phrase() {
        let result = Mnemonic::parse("word");
        assert_eq!(result.unwrap_err(), Error::InvalidMnemonic { words: 1 });
    }

    #[test]
    fn seed_is_deterministic() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        assert_eq!(
            mnemonic.to_seed("pass").as_bytes(),
            mnemonic.to_seed("pass").as_bytes()
        );
    }

    #[test]
    fn passphrase_changes_seed() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        assert_ne!(
            mnemonic.to_seed("").as_bytes(),
            mnemonic.to_seed("password").as_bytes()
        );
    }

    #[test]
    fn known_bip39_seed_vector() {
        // BIP39 reference vector: all-"abandon" mnemonic with passphrase "TREZOR".
        let mnemonic = Mnemonic::parse(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )
        .unwrap();
        let seed = mnemonic.to_seed("TREZOR");

        assert_eq!(
            hex::encode(seed.as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }
}
