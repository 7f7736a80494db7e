//! Wallet service error taxonomy.
//!
//! Every failure is terminal for the operation that raised it; nothing is
//! retried internally. Messages carry the offending label or address but
//! never mnemonic or private key material.

use crate::rpc::RpcError;

/// Errors surfaced by the wallet facade.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WalletError {
    /// Label is blank.
    #[error("label must not be blank")]
    InvalidLabel,

    /// Label is already registered.
    #[error("label already exists: {0}")]
    DuplicateLabel(String),

    /// No account is registered under the label.
    #[error("unknown account label: {0}")]
    UnknownLabel(String),

    /// Address is blank or not a base58-encoded public key.
    #[error("not a valid base58-encoded public key: {0}")]
    InvalidAddress(String),

    /// Key derivation failed.
    #[error("derivation failed")]
    Derivation(#[from] solarium_core::Error),

    /// The ledger RPC collaborator failed; transient, caller may retry.
    #[error("ledger RPC unavailable")]
    RpcUnavailable(#[from] RpcError),
}
