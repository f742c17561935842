//! Key-value storage capability over browser `localStorage`.
//!
//! DESIGN
//! ======
//! Persistence consumers hold a [`KeyValueStore`] implementation instead of
//! reaching for `localStorage` directly. Whether a medium exists at all is
//! decided once, at construction ([`BrowserStorage::open`]); callers model
//! the storage-less environment (server-side rendering, storage disabled)
//! by holding no store rather than by probing per call. [`MemoryStore`]
//! substitutes for the browser in native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous string key-value capability backing client persistence.
pub trait KeyValueStore {
    /// Raw value for `key`, if present.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`.
    fn write(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Only obtainable in hydrate builds with a live
/// window whose storage is accessible.
pub struct BrowserStorage {
    #[cfg(feature = "hydrate")]
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// `None` outside a browser or when storage access is denied.
    #[must_use]
    pub fn open() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            Some(Self { storage })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Shared in-memory store. Clones share one map, the way every browser tab
/// shares one `localStorage` slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
