//! The wallet facade.
//!
//! Composes the deriver, account registry, key storage, and ledger RPC
//! client. Purely request/response; the only mutable shared state is the
//! registry, and the only blocking call is the RPC lookup.

use std::sync::Arc;

use parking_lot::Mutex;
use solarium_core::{decode_address, Deriver, Mnemonic, Sol, DEFAULT_ACCOUNT, DEFAULT_CHANGE};

use crate::keystore::{InMemoryKeyStorage, KeyStorage};
use crate::registry::{AccountRegistry, DerivedAccount, InMemoryAccountRegistry};
use crate::rpc::{HttpRpcClient, LedgerRpc};
use crate::{WalletConfig, WalletError};

/// Wallet operations over one operator mnemonic.
pub struct WalletService {
    deriver: Deriver,
    registry: Arc<dyn AccountRegistry>,
    keys: Arc<dyn KeyStorage>,
    rpc: Arc<dyn LedgerRpc>,
    /// Serializes index allocation against registration. Without it two
    /// concurrent `new_address` calls could both read the same next index
    /// and register duplicate coordinates under distinct public keys.
    alloc_gate: Mutex<()>,
}

impl WalletService {
    /// Compose a service from explicit collaborators.
    #[must_use]
    pub fn new(
        deriver: Deriver,
        registry: Arc<dyn AccountRegistry>,
        keys: Arc<dyn KeyStorage>,
        rpc: Arc<dyn LedgerRpc>,
    ) -> Self {
        Self {
            deriver,
            registry,
            keys,
            rpc,
            alloc_gate: Mutex::new(()),
        }
    }

    /// Build a service from configuration, with in-memory storage and an
    /// HTTP RPC client.
    ///
    /// # Errors
    ///
    /// Fails if the configured mnemonic is invalid or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &WalletConfig) -> Result<Self, WalletError> {
        let mnemonic = Mnemonic::parse(&config.mnemonic)?;
        let rpc = HttpRpcClient::new(
            &config.rpc_url,
            config.connect_timeout(),
            config.read_timeout(),
        )?;

        Ok(Self::new(
            Deriver::from_mnemonic(&mnemonic, ""),
            Arc::new(InMemoryAccountRegistry::new()),
            Arc::new(InMemoryKeyStorage::new()),
            Arc::new(rpc),
        ))
    }

    /// Snapshot of all registered accounts.
    #[must_use]
    pub fn list_accounts(&self) -> Vec<DerivedAccount> {
        self.registry.find_all()
    }

    /// Derive the next address under `(account 0, change 0)` and register
    /// it under `label`. Returns the base58 public key.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidLabel`] for a blank label and
    /// [`WalletError::DuplicateLabel`] if the label is already registered;
    /// neither mutates the registry.
    pub fn new_address(&self, label: &str) -> Result<String, WalletError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(WalletError::InvalidLabel);
        }

        let _gate = self.alloc_gate.lock();
        self.register_next(label.to_owned())
    }

    /// Derive the next address and auto-label it `account-{index}`.
    /// Returns the assigned label and the base58 public key.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::DuplicateLabel`] if a caller already claimed
    /// the generated label for a different entry.
    pub fn new_address_auto(&self) -> Result<(String, String), WalletError> {
        let _gate = self.alloc_gate.lock();
        let index = self.registry.next_index(DEFAULT_ACCOUNT, DEFAULT_CHANGE);
        let label = format!("account-{index}");
        let address = self.register_next(label.clone())?;
        Ok((label, address))
    }

    // Allocate-derive-save as one unit. Caller holds the allocation gate.
    fn register_next(&self, label: String) -> Result<String, WalletError> {
        if self.registry.find_by_label(&label).is_some() {
            return Err(WalletError::DuplicateLabel(label));
        }

        let index = self.registry.next_index(DEFAULT_ACCOUNT, DEFAULT_CHANGE);
        let keypair = self.deriver.derive(DEFAULT_ACCOUNT, DEFAULT_CHANGE, index)?;
        let public_key = keypair.address();

        self.keys.store(keypair);
        self.registry.save(DerivedAccount {
            label: label.clone(),
            account: DEFAULT_ACCOUNT,
            change: DEFAULT_CHANGE,
            index,
            public_key: public_key.clone(),
        });

        tracing::debug!(%label, index, %public_key, "registered derived account");
        Ok(public_key)
    }

    /// Fetch the balance of a base58 address in SOL.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidAddress`] for a blank or undecodable
    /// address and [`WalletError::RpcUnavailable`] if the ledger RPC call
    /// fails.
    pub fn get_balance(&self, address: &str) -> Result<Sol, WalletError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(WalletError::InvalidAddress(address.to_owned()));
        }

        let public_key = decode_address(address)
            .map_err(|_| WalletError::InvalidAddress(address.to_owned()))?;

        let lamports = self.rpc.get_balance(&public_key)?;
        Ok(lamports.to_sol())
    }

    /// Fetch the balance of the account registered under `label`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidLabel`] for a blank label,
    /// [`WalletError::UnknownLabel`] if no account carries it, then
    /// behaves as [`WalletService::get_balance`].
    pub fn get_balance_by_label(&self, label: &str) -> Result<Sol, WalletError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(WalletError::InvalidLabel);
        }

        let account = self
            .registry
            .find_by_label(label)
            .ok_or_else(|| WalletError::UnknownLabel(label.to_owned()))?;

        self.get_balance(&account.public_key)
    }
}
