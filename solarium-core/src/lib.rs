//! Deterministic Solana key derivation primitives.
//!
//! Provides the cryptographic core for a Solana HD wallet: BIP39-style seed
//! generation from a mnemonic phrase, SLIP-0010 Ed25519 hierarchical
//! derivation along `m/44'/501'/account'/change'/index'`, and lamport
//! amount handling.
//!
//! # Usage
//!
//! ```
//! use solarium_core::{Deriver, Mnemonic};
//!
//! let mnemonic = Mnemonic::parse(
//!     "urge pulp usage sister evidence arrest palm math please chief egg abuse",
//! )?;
//! let deriver = Deriver::from_mnemonic(&mnemonic, "");
//!
//! let keypair = deriver.derive(0, 0, 0)?;
//! println!("Address: {}", keypair.address());
//! # Ok::<(), solarium_core::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod amount;
mod deriver;
mod error;
mod keypair;
mod seed;
mod slip10;

pub use amount::{Lamports, Sol, LAMPORTS_PER_SOL};
pub use deriver::{Deriver, COIN_TYPE, DEFAULT_ACCOUNT, DEFAULT_CHANGE, PURPOSE};
pub use error::Error;
pub use keypair::{decode_address, encode_address, Keypair};
pub use seed::{Mnemonic, Seed};
