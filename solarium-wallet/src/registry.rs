//! In-memory account registry.
//!
//! Tracks which derivation indices are in use, keyed both by label and by
//! public key. The two directions always agree: every mutation happens
//! under one lock, so `find_by_public_key` can never observe a label that
//! `find_by_label` cannot resolve.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Metadata for one derived account: its label, the path coordinates that
/// produced it, and the resulting base58 public key.
///
/// Entries are immutable once created; deletion removes an entry entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAccount {
    /// Caller-assigned unique label.
    pub label: String,
    /// Account level of the derivation path.
    pub account: u32,
    /// Change level of the derivation path.
    pub change: u32,
    /// Address index of the derivation path.
    pub index: u32,
    /// Base58-encoded public key.
    pub public_key: String,
}

/// Storage contract for derived account metadata.
///
/// Implementations must keep the label and public-key lookup directions
/// consistent with each other under concurrent use. `next_index` on its own
/// is only a read; callers that allocate must serialize the
/// read-derive-save sequence themselves (see `WalletService`).
pub trait AccountRegistry: Send + Sync {
    /// Insert an entry unconditionally. Callers must have already checked
    /// label uniqueness.
    fn save(&self, account: DerivedAccount) -> DerivedAccount;

    /// Snapshot of all entries.
    fn find_all(&self) -> Vec<DerivedAccount>;

    /// Look up an entry by label.
    fn find_by_label(&self, label: &str) -> Option<DerivedAccount>;

    /// Look up an entry by base58 public key.
    fn find_by_public_key(&self, public_key: &str) -> Option<DerivedAccount>;

    /// Remove an entry by label. Returns whether an entry was removed;
    /// both lookup directions are updated together.
    fn delete_by_label(&self, label: &str) -> bool;

    /// Remove an entry by public key. Returns whether an entry was removed;
    /// both lookup directions are updated together.
    fn delete_by_public_key(&self, public_key: &str) -> bool;

    /// One past the highest index recorded for `(account, change)`, or 0
    /// if none exist.
    fn next_index(&self, account: u32, change: u32) -> u32;
}

#[derive(Default)]
struct Inner {
    by_label: HashMap<String, DerivedAccount>,
    label_by_key: HashMap<String, String>,
}

/// Registry keeping all entries in process memory.
#[derive(Default)]
pub struct InMemoryAccountRegistry {
    inner: RwLock<Inner>,
}

impl InMemoryAccountRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRegistry for InMemoryAccountRegistry {
    fn save(&self, account: DerivedAccount) -> DerivedAccount {
        let mut inner = self.inner.write();
        inner
            .label_by_key
            .insert(account.public_key.clone(), account.label.clone());
        inner.by_label.insert(account.label.clone(), account.clone());
        account
    }

    fn find_all(&self) -> Vec<DerivedAccount> {
        self.inner.read().by_label.values().cloned().collect()
    }

    fn find_by_label(&self, label: &str) -> Option<DerivedAccount> {
        self.inner.read().by_label.get(label).cloned()
    }

    fn find_by_public_key(&self, public_key: &str) -> Option<DerivedAccount> {
        let inner = self.inner.read();
        let label = inner.label_by_key.get(public_key)?;
        inner.by_label.get(label).cloned()
    }

    fn delete_by_label(&self, label: &str) -> bool {
        let mut inner = self.inner.write();
        match inner.by_label.remove(label) {
            Some(removed) => {
                inner.label_by_key.remove(&removed.public_key);
                true
            }
            None => false,
        }
    }

    fn delete_by_public_key(&self, public_key: &str) -> bool {
        let mut inner = self.inner.write();
        match inner.label_by_key.remove(public_key) {
            Some(label) => inner.by_label.remove(&label).is_some(),
            None => false,
        }
    }

    fn next_index(&self, account: u32, change: u32) -> u32 {
        self.inner
            .read()
            .by_label
            .values()
            .filter(|entry| entry.account == account && entry.change == change)
            .map(|entry| entry.index)
            .max()
            .map_or(0, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, index: u32, public_key: &str) -> DerivedAccount {
        DerivedAccount {
            label: label.to_owned(),
            account: 0,
            change: 0,
            index,
            public_key: public_key.to_owned(),
        }
    }

    #[test]
    fn saves_and_finds_by_both_keys() {
        let registry = InMemoryAccountRegistry::new();
        let account = entry("first", 0, "pubKey1");

        registry.save(account.clone());

        assert_eq!(registry.find_by_label("first").unwrap(), account);
        assert_eq!(registry.find_by_public_key("pubKey1").unwrap(), account);
    }

    #[test]
    fn deletes_by_either_key() {
        let registry = InMemoryAccountRegistry::new();
        let account = entry("first", 0, "pubKey1");

        registry.save(account.clone());
        assert!(registry.delete_by_public_key("pubKey1"));
        assert!(registry.find_all().is_empty());

        registry.save(account);
        assert!(registry.delete_by_label("first"));
        assert!(registry.find_by_label("first").is_none());
        assert!(registry.find_by_public_key("pubKey1").is_none());
    }

    #[test]
    fn delete_of_missing_entry_reports_false() {
        let registry = InMemoryAccountRegistry::new();

        assert!(!registry.delete_by_label("ghost"));
        assert!(!registry.delete_by_public_key("ghost"));
    }

    #[test]
    fn find_by_public_key_resolves_through_label() {
        let registry = InMemoryAccountRegistry::new();
        registry.save(entry("primary", 1, "pubKey2"));

        let found = registry.find_by_public_key("pubKey2").unwrap();
        assert_eq!(found.label, "primary");
        assert_eq!(found.index, 1);
    }

    #[test]
    fn next_index_starts_at_zero() {
        let registry = InMemoryAccountRegistry::new();
        assert_eq!(registry.next_index(0, 0), 0);
    }

    #[test]
    fn next_index_is_one_past_max_per_pair() {
        let registry = InMemoryAccountRegistry::new();
        registry.save(entry("a", 0, "k0"));
        registry.save(entry("b", 1, "k1"));

        let mut other = entry("c", 5, "k2");
        other.account = 1;
        registry.save(other);

        assert_eq!(registry.next_index(0, 0), 2);
        assert_eq!(registry.next_index(1, 0), 6);
        assert_eq!(registry.next_index(2, 2), 0);
    }

    #[test]
    fn deletion_frees_no_index() {
        let registry = InMemoryAccountRegistry::new();
        registry.save(entry("a", 0, "k0"));
        registry.save(entry("b", 1, "k1"));

        registry.delete_by_label("a");

        // Indices stay dense going forward; deleting an old entry must not
        // cause index 0 to be reissued while 1 is still recorded.
        assert_eq!(registry.next_index(0, 0), 2);
    }
}
