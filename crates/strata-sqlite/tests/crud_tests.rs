//! CRUD operation tests for SqliteStore

use chrono::{TimeZone, Utc};
use strata_core::{
    storage::{StoreError, StringStore},
    StringRecord,
};
use strata_sqlite::SqliteStore;

/// Helper to create a record with a fixed creation time
fn create_test_record(value: &str, secs: i64) -> StringRecord {
    StringRecord::with_created_at(value, Utc.timestamp_opt(secs, 0).unwrap())
}

#[test]
fn test_put_and_get() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_record("Never odd or even", 1704067200);
    let id = record.id.clone();

    store.put(record.clone()).unwrap();

    let retrieved = store.get(&id).unwrap();
    assert_eq!(retrieved, Some(record));
}

#[test]
fn test_put_duplicate_fails() {
    let mut store = SqliteStore::in_memory().unwrap();

    store.put(create_test_record("hello", 1000)).unwrap();

    let result = store.put(create_test_record("hello", 2000));
    assert!(matches!(result, Err(StoreError::AlreadyExists(_))));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_get_nonexistent() {
    let store = SqliteStore::in_memory().unwrap();
    assert!(store.get("missing").unwrap().is_none());
}

#[test]
fn test_delete() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_record("hello", 1000);
    let id = record.id.clone();
    store.put(record).unwrap();

    assert!(store.delete(&id).unwrap());
    assert!(store.get(&id).unwrap().is_none());
}

#[test]
fn test_delete_nonexistent() {
    let mut store = SqliteStore::in_memory().unwrap();
    assert!(!store.delete("missing").unwrap());
}

#[test]
fn test_ids_oldest_first() {
    let mut store = SqliteStore::in_memory().unwrap();
    let newer = create_test_record("newer", 2000);
    let older = create_test_record("older", 1000);

    store.put(newer.clone()).unwrap();
    store.put(older.clone()).unwrap();

    assert_eq!(store.ids().unwrap(), vec![older.id, newer.id]);
}

#[test]
fn test_count_and_clear() {
    let mut store = SqliteStore::in_memory().unwrap();
    store.put(create_test_record("one", 1)).unwrap();
    store.put(create_test_record("two", 2)).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_exists() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_record("hello", 1000);
    let id = record.id.clone();

    assert!(!store.exists(&id).unwrap());
    store.put(record).unwrap();
    assert!(store.exists(&id).unwrap());
}

#[test]
fn test_timestamp_preservation() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = StringRecord::new("now");
    let id = record.id.clone();
    let created_at = record.created_at;

    store.put(record).unwrap();

    assert_eq!(store.get(&id).unwrap().unwrap().created_at, created_at);
}

#[test]
fn test_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strata.db");
    let record = create_test_record("racecar", 1000);
    let id = record.id.clone();

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.put(record.clone()).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get(&id).unwrap(), Some(record));
}
