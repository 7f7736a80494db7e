//! Storage for derived keypairs.
//!
//! The facade stores every keypair it derives so a later signing layer can
//! use them. Signing itself is out of scope here; this is a capability
//! seam for a future persistent store.

use parking_lot::Mutex;
use solarium_core::Keypair;

/// Abstraction for holding derived keypairs.
pub trait KeyStorage: Send + Sync {
    /// Retain the keypair for the process lifetime.
    fn store(&self, keypair: Keypair);
}

/// Key storage that keeps keypairs in process memory only.
#[derive(Default)]
pub struct InMemoryKeyStorage {
    keypairs: Mutex<Vec<Keypair>>,
}

impl InMemoryKeyStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keypairs held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypairs.lock().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Addresses of all held keypairs, in insertion order.
    #[must_use]
    pub fn addresses(&self) -> Vec<String> {
        self.keypairs.lock().iter().map(Keypair::address).collect()
    }
}

impl KeyStorage for InMemoryKeyStorage {
    fn store(&self, keypair: Keypair) {
        self.keypairs.lock().push(keypair);
    }
}
