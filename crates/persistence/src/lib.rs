// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for ShiftDesk.
//!
//! The whole aggregate is saved as one JSON document under a fixed key.
//! [`Store`] owns the current aggregate and writes the full document after
//! every successful command.
//!
//! ## Backends
//!
//! - **`SQLite`** (default): a single `kv_store` table managed by Diesel
//!   migrations; file-based or in-memory
//! - **Memory**: a plain map, used by tests
//!
//! ## Loading
//!
//! Loading never fails on bad data. A document that is missing or is not a
//! JSON object degrades to the seed root account. Each collection decodes
//! independently; one that does not decode is emptied. The seed root is
//! re-inserted whenever no root account survives.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod diesel_schema;
mod document;
mod error;
mod store;

#[cfg(test)]
mod tests;

pub use backend::KeyValueStore;
pub use backend::memory::MemoryKeyValueStore;
pub use backend::sqlite::SqliteKeyValueStore;
pub use document::{Decoded, FieldOutcome, STORAGE_KEY, decode, encode};
pub use error::PersistenceError;
pub use store::Store;
