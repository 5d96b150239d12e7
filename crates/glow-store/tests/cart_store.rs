//! End-to-end persistence scenarios over the file backend.

use glow_commerce::cart::Cart;
use glow_commerce::{CommerceError, ProductId};
use glow_store::{CartAction, CartStore, FileBackend, StoreError};

fn id(n: u64) -> ProductId {
    ProductId::new(n)
}

fn file_store(dir: &std::path::Path) -> CartStore<FileBackend> {
    CartStore::new(FileBackend::new(dir).unwrap())
}

#[test]
fn round_trip_preserves_ids_quantities_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(dir.path());

    let mut cart = Cart::new();
    cart.add_or_increment(id(3)).unwrap();
    cart.add_or_increment(id(1)).unwrap();
    cart.add_or_increment(id(1)).unwrap();
    cart.add_or_increment(id(8)).unwrap();

    store.save(&cart).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, cart);

    let ids: Vec<u64> = loaded.lines().iter().map(|l| l.product_id.value()).collect();
    assert_eq!(ids, vec![3, 1, 8]);
}

#[test]
fn persisted_format_is_an_array_of_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(dir.path());

    store.add_or_increment(id(1)).unwrap();
    store.add_or_increment(id(1)).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    assert_eq!(raw, r#"[{"productId":1,"quantity":2}]"#);
}

#[test]
fn survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = file_store(dir.path());
        store.add_or_increment(id(2)).unwrap();
        store.change_quantity(id(2), 4).unwrap();
    }

    // a fresh store over the same directory sees the same cart
    let store = file_store(dir.path());
    assert_eq!(store.load().unwrap().quantity(id(2)), Some(5));
}

#[test]
fn malformed_file_recovers_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let store = file_store(dir.path());
    let cart = store.load().unwrap();
    assert!(cart.is_empty());

    // the next save replaces the damaged file with valid state
    store.add_or_increment(id(1)).unwrap();
    assert_eq!(store.load().unwrap().quantity(id(1)), Some(1));
}

#[test]
fn record_missing_quantity_is_dropped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"productId":1},{"productId":2,"quantity":3}]"#,
    )
    .unwrap();

    let store = file_store(dir.path());
    let cart = store.load().unwrap();
    assert_eq!(cart.quantity(id(1)), None);
    assert_eq!(cart.quantity(id(2)), Some(3));
}

#[test]
fn legacy_duplicates_and_overflow_normalize_on_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"productId":1,"quantity":60},{"productId":1,"quantity":60},{"productId":2,"quantity":500}]"#,
    )
    .unwrap();

    let store = file_store(dir.path());
    let cart = store.load().unwrap();
    assert_eq!(cart.quantity(id(1)), Some(99));
    assert_eq!(cart.quantity(id(2)), Some(99));
    assert_eq!(cart.unique_item_count(), 2);
}

#[test]
fn rejected_mutation_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(dir.path());

    store.add_or_increment(id(1)).unwrap();
    let before = std::fs::read(dir.path().join("cart.json")).unwrap();

    let err = store.set_quantity(id(1), 150).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Commerce(CommerceError::QuantityCapped { .. })
    ));

    let after = std::fs::read(dir.path().join("cart.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn remove_then_load_is_empty_and_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(dir.path());

    store.add_or_increment(id(1)).unwrap();
    store.set_quantity(id(1), 3).unwrap();
    store.remove(id(1)).unwrap();
    assert!(store.load().unwrap().is_empty());

    store.clear().unwrap();
    store.clear().unwrap(); // no file left, still fine
    assert!(!dir.path().join("cart.json").exists());
}

#[test]
fn quantity_input_truncates_like_a_form_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(dir.path());

    store.add_or_increment(id(1)).unwrap();
    let cart = store.set_quantity_from_input(id(1), "3.5").unwrap();
    assert_eq!(cart.quantity(id(1)), Some(3));

    let cart = store.set_quantity_from_input(id(1), "12 pcs").unwrap();
    assert_eq!(cart.quantity(id(1)), Some(12));

    // nothing numeric up front clears the line
    let cart = store.set_quantity_from_input(id(1), "a few").unwrap();
    assert!(cart.is_empty());
}

#[test]
fn action_sequence_through_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(dir.path());

    let actions = [
        CartAction::Add(id(1)),
        CartAction::Add(id(1)),
        CartAction::Change(id(1), 5),
        CartAction::Add(id(4)),
        CartAction::SetFromInput(id(4), "2".to_string()),
    ];
    let mut cart = Cart::new();
    for action in actions {
        cart = store.apply(action).unwrap();
    }

    assert_eq!(cart.quantity(id(1)), Some(7));
    assert_eq!(cart.quantity(id(4)), Some(2));
    assert_eq!(cart.item_count(), 9);
    assert_eq!(store.item_count().unwrap(), 9);
}
