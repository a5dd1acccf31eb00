// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage backends.
//!
//! Every backend is a flat key-value store holding whole documents. The
//! document format is owned by `crate::document`; backends never look inside.
//!
//! ## Backends
//!
//! - `sqlite`: `SQLite` via Diesel, file-based or in-memory
//! - `memory`: a plain map, for tests and throwaway sessions

pub mod memory;
pub mod sqlite;

use crate::error::PersistenceError;

/// A flat store of documents addressed by key.
pub trait KeyValueStore {
    /// Reads the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `document` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, document: &str) -> Result<(), PersistenceError>;
}
