use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
    store.remove("k");
    assert_eq!(store.get("k"), None);
    assert!(!store.contains("k"));
}

#[test]
fn memory_storage_set_overwrites_last_write_wins() {
    let store = MemoryStorage::new();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("second"));
}

#[test]
fn rejecting_storage_fails_only_for_its_key() {
    let store = MemoryStorage::rejecting("user");
    assert!(store.set("token", "abc").is_ok());
    assert!(matches!(store.set("user", "{}"), Err(StorageError::Write(_))));
    assert!(store.contains("token"));
    assert!(!store.contains("user"));
}

#[test]
fn json_helpers_persist_structured_values() {
    let store = MemoryStorage::new();
    let value = Sample { name: "draft".to_owned(), count: 3 };
    save_json(&store, "sample", &value).unwrap();
    assert_eq!(store.get("sample").as_deref(), Some(r#"{"name":"draft","count":3}"#));
    assert_eq!(load_json::<Sample>(&store, "sample"), Some(value));
}

#[test]
fn load_json_returns_none_for_missing_or_corrupt_values() {
    let store = MemoryStorage::new();
    assert_eq!(load_json::<Sample>(&store, "sample"), None);
    store.set("sample", "{not json").unwrap();
    assert_eq!(load_json::<Sample>(&store, "sample"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_outside_browser() {
    let store = BrowserStorage;
    assert!(store.set("token", "abc").is_ok());
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
