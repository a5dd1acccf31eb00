// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use crate::backend::KeyValueStore;
use crate::error::PersistenceError;

/// A [`KeyValueStore`] held entirely in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `document` under `key`.
    #[must_use]
    pub fn with_document(key: &str, document: &str) -> Self {
        let mut entries: HashMap<String, String> = HashMap::new();
        entries.insert(key.to_string(), document.to_string());
        Self { entries }
    }

    /// Returns the raw document under `key` without going through the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
