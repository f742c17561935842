use super::*;

use crate::util::storage::{KeyValueStore, MemoryStore};

fn parsed_slot(store: &MemoryStore) -> Vec<u32> {
    let raw = store.read(STORAGE_KEY).expect("slot should exist after a toggle");
    serde_json::from_str(&raw).expect("slot should be a JSON array of numbers")
}

// =============================================================
// Reads
// =============================================================

#[test]
fn unseen_id_is_not_favorite() {
    let favorites = Favorites::with_store(MemoryStore::new());
    assert!(!favorites.is_favorite(25));
}

#[test]
fn missing_slot_reads_as_empty_set_not_error() {
    let favorites = Favorites::with_store(MemoryStore::new());
    assert!(!favorites.is_favorite(1));
    assert!(favorites.ids().is_empty());
}

#[test]
fn is_favorite_has_no_side_effects() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());
    let _ = favorites.is_favorite(7);
    assert!(store.read(STORAGE_KEY).is_none());
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_absent_id_adds_exactly_one_entry() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());

    favorites.toggle(25);

    assert!(favorites.is_favorite(25));
    assert_eq!(parsed_slot(&store), vec![25]);
}

#[test]
fn toggle_present_id_removes_exactly_one_entry() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());
    favorites.toggle(1);
    favorites.toggle(4);

    favorites.toggle(1);

    assert!(!favorites.is_favorite(1));
    assert!(favorites.is_favorite(4));
    assert_eq!(parsed_slot(&store), vec![4]);
}

#[test]
fn toggle_twice_restores_previous_state() {
    let favorites = Favorites::with_store(MemoryStore::new());
    favorites.toggle(7);

    let before = favorites.is_favorite(151);
    favorites.toggle(151);
    favorites.toggle(151);

    assert_eq!(favorites.is_favorite(151), before);
    assert!(favorites.is_favorite(7));
}

#[test]
fn toggle_accumulates_distinct_ids() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());

    favorites.toggle(1);
    favorites.toggle(4);
    favorites.toggle(7);

    let mut stored = parsed_slot(&store);
    stored.sort_unstable();
    assert_eq!(stored, vec![1, 4, 7]);
}

// =============================================================
// Environment without storage
// =============================================================

#[test]
fn detached_reads_false_and_never_panics() {
    let favorites = Favorites::<MemoryStore>::detached();
    for id in [0, 1, 25, 151, u32::MAX] {
        assert!(!favorites.is_favorite(id));
    }
    assert!(favorites.ids().is_empty());
}

#[test]
fn detached_toggle_is_dropped() {
    let favorites = Favorites::<MemoryStore>::detached();
    favorites.toggle(25);
    assert!(!favorites.is_favorite(25));
}

// =============================================================
// Persistence format
// =============================================================

#[test]
fn round_trip_set_survives_a_fresh_parse() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());
    favorites.toggle(5);
    favorites.toggle(2);
    favorites.toggle(3);

    let reopened = Favorites::with_store(store);
    let mut ids = reopened.ids();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3, 5]);
}

#[test]
fn slot_serializes_as_a_json_array_of_numbers() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());
    favorites.toggle(25);

    let raw = store.read(STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().expect("slot should be an array");
    assert!(array.iter().all(serde_json::Value::is_number));
}

#[test]
fn full_scenario_for_id_25() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());

    assert!(!favorites.is_favorite(25));

    favorites.toggle(25);
    assert!(favorites.is_favorite(25));
    assert_eq!(parsed_slot(&store), vec![25]);

    favorites.toggle(25);
    assert!(!favorites.is_favorite(25));
    assert_eq!(parsed_slot(&store), Vec::<u32>::new());
}

// =============================================================
// Corrupt slot recovery
// =============================================================

#[test]
fn corrupt_non_json_reads_as_empty_set() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, "not json");
    let favorites = Favorites::with_store(store);
    assert!(!favorites.is_favorite(1));
    assert!(favorites.ids().is_empty());
}

#[test]
fn corrupt_wrong_shape_reads_as_empty_set() {
    for raw in ["{\"a\":1}", "[\"pikachu\"]", "\"[1]\"", "25"] {
        let store = MemoryStore::new();
        store.write(STORAGE_KEY, raw);
        let favorites = Favorites::with_store(store);
        assert!(!favorites.is_favorite(25), "raw {raw:?} should read as empty");
    }
}

#[test]
fn next_toggle_replaces_a_corrupt_slot() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, "not json");
    let favorites = Favorites::with_store(store.clone());

    favorites.toggle(7);

    assert_eq!(parsed_slot(&store), vec![7]);
}

#[test]
fn externally_seeded_duplicates_are_removed_entirely() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, "[4,4,4]");
    let favorites = Favorites::with_store(store.clone());

    favorites.toggle(4);

    assert!(!favorites.is_favorite(4));
    assert_eq!(parsed_slot(&store), Vec::<u32>::new());
}

// =============================================================
// Shared-slot behavior
// =============================================================

// Two browser tabs write the whole slot; there is no merge. The second
// flush wins and silently drops the first tab's favorites.
#[test]
fn concurrent_writers_last_writer_wins() {
    let store = MemoryStore::new();
    let favorites = Favorites::with_store(store.clone());
    favorites.toggle(1);
    favorites.toggle(4);

    store.write(STORAGE_KEY, "[7]");

    assert!(!favorites.is_favorite(1));
    assert!(!favorites.is_favorite(4));
    assert!(favorites.is_favorite(7));
}

#[test]
fn two_handles_over_one_slot_observe_each_other() {
    let store = MemoryStore::new();
    let first = Favorites::with_store(store.clone());
    let second = Favorites::with_store(store);

    first.toggle(25);

    assert!(second.is_favorite(25));
}
