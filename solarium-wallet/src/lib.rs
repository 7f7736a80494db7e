//! Wallet service layer over the solarium derivation core.
//!
//! Composes the deterministic key deriver with an in-memory account
//! registry and a ledger RPC client into the four operations a caller
//! needs: list accounts, allocate a new address, and look up balances by
//! address or label.
//!
//! The registry and key storage are capability traits with in-memory
//! implementations; the RPC transport is a capability trait with an HTTP
//! JSON-RPC implementation. Nothing in this crate persists to disk.

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod keystore;
mod registry;
mod rpc;
mod service;

pub use config::{ConfigError, WalletConfig};
pub use error::WalletError;
pub use keystore::{InMemoryKeyStorage, KeyStorage};
pub use registry::{AccountRegistry, DerivedAccount, InMemoryAccountRegistry};
pub use rpc::{HttpRpcClient, LedgerRpc, RpcError};
pub use service::WalletService;
