//! End-to-end tests for the wallet facade with a stubbed ledger RPC.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use solarium_core::{decode_address, Deriver, Lamports, Mnemonic};
use solarium_wallet::{
    AccountRegistry, InMemoryAccountRegistry, InMemoryKeyStorage, LedgerRpc, RpcError,
    WalletError, WalletService,
};

const TEST_MNEMONIC: &str =
    "urge pulp usage sister evidence arrest palm math please chief egg abuse";

/// Ledger stub returning a fixed balance and recording the queried key.
struct StubRpc {
    lamports: u64,
    queried: Mutex<Vec<[u8; 32]>>,
}

impl StubRpc {
    fn new(lamports: u64) -> Self {
        Self {
            lamports,
            queried: Mutex::new(Vec::new()),
        }
    }
}

impl LedgerRpc for StubRpc {
    fn get_balance(&self, public_key: &[u8; 32]) -> Result<Lamports, RpcError> {
        self.queried.lock().push(*public_key);
        Ok(Lamports::new(self.lamports))
    }
}

/// Ledger stub that always fails at the transport level.
struct DownRpc;

impl LedgerRpc for DownRpc {
    fn get_balance(&self, _public_key: &[u8; 32]) -> Result<Lamports, RpcError> {
        Err(RpcError::Transport("connection refused".to_owned()))
    }
}

struct Harness {
    service: Arc<WalletService>,
    registry: Arc<InMemoryAccountRegistry>,
    keys: Arc<InMemoryKeyStorage>,
    rpc: Arc<StubRpc>,
}

fn harness(lamports: u64) -> Harness {
    let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
    let registry = Arc::new(InMemoryAccountRegistry::new());
    let keys = Arc::new(InMemoryKeyStorage::new());
    let rpc = Arc::new(StubRpc::new(lamports));

    let service = WalletService::new(
        Deriver::from_mnemonic(&mnemonic, ""),
        registry.clone(),
        keys.clone(),
        rpc.clone(),
    );

    Harness {
        service: Arc::new(service),
        registry,
        keys,
        rpc,
    }
}

#[test]
fn new_address_uses_next_index_and_persists_metadata() {
    let h = harness(0);

    let first = h.service.new_address("primary").unwrap();
    let second = h.service.new_address("secondary").unwrap();

    assert_eq!(first, "2bahaF9qfc6pE5DJCKQ7AcZF1nXx5Jvf4NwkQib8uwbL");
    assert_eq!(second, "9LCBeEKbr17HV3Us8cWR7JrnNP6tLK6QDFtMv8RevjP1");

    let primary = h.registry.find_by_label("primary").unwrap();
    let secondary = h.registry.find_by_label("secondary").unwrap();
    assert_eq!(primary.index, 0);
    assert_eq!(secondary.index, 1);

    assert_eq!(h.service.list_accounts().len(), 2);
    assert_eq!(h.keys.len(), 2);
}

#[test]
fn duplicate_label_is_rejected_without_mutation() {
    let h = harness(0);
    h.service.new_address("primary").unwrap();

    let err = h.service.new_address("primary").unwrap_err();
    assert!(matches!(err, WalletError::DuplicateLabel(label) if label == "primary"));

    // The failed call must not have burned an index or stored a key.
    assert_eq!(h.service.list_accounts().len(), 1);
    assert_eq!(h.keys.len(), 1);
    h.service.new_address("other").unwrap();
    assert_eq!(h.registry.find_by_label("other").unwrap().index, 1);
}

#[test]
fn blank_label_is_rejected() {
    let h = harness(0);
    assert!(matches!(
        h.service.new_address("  "),
        Err(WalletError::InvalidLabel)
    ));
    assert!(h.service.list_accounts().is_empty());
}

#[test]
fn auto_label_allocates_index_based_names() {
    let h = harness(0);

    let (label, address) = h.service.new_address_auto().unwrap();
    assert_eq!(label, "account-0");
    assert_eq!(address, "2bahaF9qfc6pE5DJCKQ7AcZF1nXx5Jvf4NwkQib8uwbL");

    let (label, _) = h.service.new_address_auto().unwrap();
    assert_eq!(label, "account-1");
}

#[test]
fn balance_is_converted_with_nine_digit_truncation() {
    let h = harness(2_500_000_000);

    let balance = h
        .service
        .get_balance("11111111111111111111111111111111")
        .unwrap();

    assert_eq!(balance.to_string(), "2.500000000");
    assert_eq!(h.rpc.queried.lock().as_slice(), &[[0u8; 32]]);
}

#[test]
fn one_lamport_renders_nine_decimals() {
    let h = harness(1);

    let balance = h
        .service
        .get_balance("11111111111111111111111111111111")
        .unwrap();

    assert_eq!(balance.to_string(), "0.000000001");
}

#[test]
fn balance_by_label_resolves_the_stored_public_key() {
    let h = harness(1_000_000_000);
    let address = h.service.new_address("labeled").unwrap();

    let balance = h.service.get_balance_by_label("labeled").unwrap();

    assert_eq!(balance.to_string(), "1.000000000");
    let expected = decode_address(&address).unwrap();
    assert_eq!(h.rpc.queried.lock().as_slice(), &[expected]);
}

#[test]
fn blank_address_is_rejected() {
    let h = harness(0);
    assert!(matches!(
        h.service.get_balance("  "),
        Err(WalletError::InvalidAddress(_))
    ));
}

#[test]
fn non_base58_address_is_rejected() {
    let h = harness(0);
    assert!(matches!(
        h.service.get_balance("not-base58"),
        Err(WalletError::InvalidAddress(_))
    ));
}

#[test]
fn unknown_label_is_rejected() {
    let h = harness(0);
    assert!(matches!(
        h.service.get_balance_by_label("missing"),
        Err(WalletError::UnknownLabel(label)) if label == "missing"
    ));
}

#[test]
fn blank_label_lookup_is_rejected() {
    let h = harness(0);
    assert!(matches!(
        h.service.get_balance_by_label(" "),
        Err(WalletError::InvalidLabel)
    ));
}

#[test]
fn rpc_failure_surfaces_as_unavailable() {
    let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
    let service = WalletService::new(
        Deriver::from_mnemonic(&mnemonic, ""),
        Arc::new(InMemoryAccountRegistry::new()),
        Arc::new(InMemoryKeyStorage::new()),
        Arc::new(DownRpc),
    );

    let err = service
        .get_balance("11111111111111111111111111111111")
        .unwrap_err();
    assert!(matches!(err, WalletError::RpcUnavailable(_)));
}

#[test]
fn concurrent_allocation_yields_dense_distinct_indices() {
    let h = harness(0);
    let threads = 8;

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let service = h.service.clone();
            thread::spawn(move || service.new_address(&format!("worker-{i}")).unwrap())
        })
        .collect();

    let addresses: BTreeSet<String> = handles.into_iter().map(|t| t.join().unwrap()).collect();
    assert_eq!(addresses.len(), threads);

    let indices: BTreeSet<u32> = h
        .service
        .list_accounts()
        .into_iter()
        .map(|a| a.index)
        .collect();
    assert_eq!(indices, (0..threads as u32).collect());
}
