//! Durable key-value storage for the theme preference.
//!
//! In the browser this is `localStorage` (see `web::LocalStore`). The
//! in-memory store backs native tests and hosts without durable storage.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Per-origin string store that survives page reloads.
pub trait PreferenceStore {
    /// Read `key`. Absence and read failures both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose writes always fail, like `localStorage` over quota.
    #[must_use]
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::StorageWrite { key: key.to_owned(), detail: "store is read-only".to_owned() });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
