use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_read_missing_key_is_none() {
    let store = MemoryStore::new();
    assert!(store.read("favorites").is_none());
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    store.write("favorites", "[1,2]");
    assert_eq!(store.read("favorites").as_deref(), Some("[1,2]"));
}

#[test]
fn memory_store_write_replaces_prior_value() {
    let store = MemoryStore::new();
    store.write("favorites", "[1]");
    store.write("favorites", "[2]");
    assert_eq!(store.read("favorites").as_deref(), Some("[2]"));
}

#[test]
fn memory_store_clones_share_one_map() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.write("favorites", "[7]");
    assert_eq!(other.read("favorites").as_deref(), Some("[7]"));
}

// =============================================================
// BrowserStorage
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_absent_outside_the_browser() {
    assert!(BrowserStorage::open().is_none());
}
