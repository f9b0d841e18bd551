//! Integration tests for the JSON-file store.

use identia_core::storage::KeyValueStore;
use identia_store::FileStore;
use tempfile::tempdir;

#[test]
fn values_survive_reopening() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("identia.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("identia_user", "{\"id\":\"user-001\"}").unwrap();
    drop(store);

    let store = FileStore::open(&path).unwrap();
    assert_eq!(
        store.get("identia_user").unwrap().as_deref(),
        Some("{\"id\":\"user-001\"}")
    );
}

#[test]
fn delete_removes_the_persisted_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("identia.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("identia_user", "{}").unwrap();
    store.delete("identia_user").unwrap();
    drop(store);

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("identia_user").unwrap(), None);
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nonexistent.json")).unwrap();
    assert_eq!(store.get("identia_user").unwrap(), None);
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("identia.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let mut store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("identia_user").unwrap(), None);

    // Writing through the recovered store replaces the corrupt file.
    store.set("identia_user", "{}").unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("identia_user").unwrap().as_deref(), Some("{}"));
}
