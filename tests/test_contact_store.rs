//! Integration tests for `ContactStore` through the public API.
//!
//! Covers validated CRUD, positional numbering, and the CSV file round trip.

use address_book::{Contact, ContactStore, LoadOutcome, StoreError};
use tempfile::TempDir;

fn sample_contacts() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Alan Turing", "0212345678", "alan@example.com"),
        ("Ada Lovelace", "0298765432", "ada@x.co"),
        ("Hopper, Grace", "0387654321", "grace+navy@mil.example.org"),
        ("Edsger \"EWD\" Dijkstra", "0811112222", "ewd@utexas.edu"),
    ]
}

fn populated_store() -> ContactStore {
    let mut store = ContactStore::new();
    for (name, phone, email) in sample_contacts() {
        store.add(name, phone, email).unwrap();
    }
    store
}

#[test]
fn test_add_then_show_returns_inputs() {
    let mut store = ContactStore::new();
    for (name, phone, email) in sample_contacts() {
        store.add(name, phone, email).unwrap();
        let shown = store.show(store.len()).unwrap();
        assert_eq!(shown, &Contact::new(name, phone, email));
    }
}

#[test]
fn test_scenario_from_empty() {
    let mut store = ContactStore::new();

    store.add("Ada Lovelace", "0298765432", "ada@x.co").unwrap();
    assert_eq!(store.len(), 1);

    let err = store.add("Bad", "123", "bad@@x").unwrap_err();
    assert!(matches!(err, StoreError::InvalidEmail(_)));
    assert_eq!(store.len(), 1);

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.name, "Ada Lovelace");
    assert_eq!(store.len(), 0);

    let err = store.remove(1).unwrap_err();
    assert!(matches!(err, StoreError::OutOfRange { index: 1, len: 0 }));
}

#[test]
fn test_entry_numbers_follow_position() {
    let mut store = populated_store();
    store.remove(1).unwrap();

    let names: Vec<(usize, String)> = store
        .list()
        .map(|(n, name)| (n, name.to_string()))
        .collect();
    assert_eq!(
        names,
        vec![
            (1, "Ada Lovelace".to_string()),
            (2, "Hopper, Grace".to_string()),
            (3, "Edsger \"EWD\" Dijkstra".to_string()),
        ]
    );
}

#[test]
fn test_clear_then_list_is_empty() {
    let mut store = populated_store();
    store.clear();
    assert_eq!(store.list().count(), 0);
    assert!(matches!(
        store.show(1),
        Err(StoreError::OutOfRange { .. })
    ));
}

#[test]
fn test_save_load_roundtrip_into_fresh_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.csv");

    let store = populated_store();
    store.save(&path).unwrap();

    let mut fresh = ContactStore::new();
    let outcome = fresh.load(&path).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(4));
    assert_eq!(fresh.contacts(), store.contacts());
}

#[test]
fn test_saved_file_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.csv");

    let mut store = ContactStore::new();
    store
        .add("Alan Turing", "0212345678", "alan@example.com")
        .unwrap();
    store
        .add("Hopper, Grace", "0387654321", "grace@navy.mil")
        .unwrap();
    store.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "name,phone,email",
            "Alan Turing,0212345678,alan@example.com",
            "\"Hopper, Grace\",0387654321,grace@navy.mil",
        ]
    );
}

#[test]
fn test_load_missing_path_keeps_populated_store() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store();
    let before: Vec<Contact> = store.contacts().to_vec();

    let outcome = store.load(dir.path().join("does-not-exist.csv")).unwrap();
    assert_eq!(outcome, LoadOutcome::Missing);
    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store();

    let result = store.load(dir.path());
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert_eq!(store.len(), 4);
}

#[test]
fn test_load_empty_file_clears_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let mut store = populated_store();
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded(0));
    assert!(store.is_empty());
}
