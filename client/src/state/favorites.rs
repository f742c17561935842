//! Client-local favorites store.
//!
//! DESIGN
//! ======
//! Favorites never touch the server: the set of favorited catalog ids lives
//! in a single `localStorage` slot as a JSON array of numbers. The storage
//! medium is injected, so pages construct a browser-backed handle while
//! tests run against [`MemoryStore`](crate::util::storage::MemoryStore).
//! A handle without a medium is the server-side-rendering case: reads
//! report nothing favorited and writes are dropped.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::util::storage::{BrowserStorage, KeyValueStore};

/// `localStorage` slot holding the serialized favorite set.
pub const STORAGE_KEY: &str = "favorites";

/// Favorite-set handle over an injected key-value medium.
pub struct Favorites<S> {
    store: Option<S>,
}

impl Favorites<BrowserStorage> {
    /// Handle backed by the browser's `localStorage`, when available.
    #[must_use]
    pub fn browser() -> Self {
        Self { store: BrowserStorage::open() }
    }
}

impl<S: KeyValueStore> Favorites<S> {
    /// Handle over an explicit medium.
    pub fn with_store(store: S) -> Self {
        Self { store: Some(store) }
    }

    /// Handle without any medium: every read is `false`, writes are dropped.
    #[must_use]
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Whether `id` is currently favorited. No side effects.
    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        let Some(store) = &self.store else {
            return false;
        };
        read_set(store).contains(&id)
    }

    /// Flip membership for `id` and persist the new set in one write.
    /// Toggling twice restores the previous set.
    pub fn toggle(&self, id: u32) {
        let Some(store) = &self.store else {
            return;
        };
        let mut ids = read_set(store);
        if ids.contains(&id) {
            ids.retain(|favorite| *favorite != id);
        } else {
            ids.push(id);
        }
        let Ok(raw) = serde_json::to_string(&ids) else {
            return;
        };
        store.write(STORAGE_KEY, &raw);
    }

    /// Snapshot of every favorited id, in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        match &self.store {
            Some(store) => read_set(store),
            None => Vec::new(),
        }
    }
}

/// Decode the persisted set. A missing key is the empty set; a value that is
/// not a JSON array of ids is corrupt, reads as empty, and is replaced
/// wholesale by the next [`Favorites::toggle`] write.
fn read_set<S: KeyValueStore>(store: &S) -> Vec<u32> {
    store
        .read(STORAGE_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<u32>>(&raw).ok())
        .unwrap_or_default()
}
