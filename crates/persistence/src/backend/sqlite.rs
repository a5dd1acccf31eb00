// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-backed document store.
//!
//! This module is limited to:
//! - Connection initialization
//! - Migration execution
//! - SQLite-specific configuration (PRAGMA statements)
//! - Reading and replacing rows of `kv_store`

use diesel::prelude::*;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use crate::backend::KeyValueStore;
use crate::diesel_schema::kv_store;
use crate::error::PersistenceError;

/// Embedded `SQLite` migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Counter for unique in-memory database names, so each store is isolated.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Opens a `SQLite` database at `database_url` and runs migrations.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (Diesel has no PRAGMA DSL)
    diesel::sql_query("PRAGMA journal_mode = WAL").execute(conn)?;
    Ok(())
}

/// A [`KeyValueStore`] over the `kv_store` table.
pub struct SqliteKeyValueStore {
    conn: SqliteConnection,
}

impl SqliteKeyValueStore {
    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:shiftdesk_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = initialize_database(&shared_memory_url)?;
        Ok(Self { conn })
    }

    /// Opens (or creates) a file-based database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = initialize_database(path_str)?;
        enable_wal_mode(&mut conn)?;
        Ok(Self { conn })
    }

    /// Opens the database named by `location`; `:memory:` selects a private
    /// in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(location: &str) -> Result<Self, PersistenceError> {
        if location == ":memory:" {
            Self::new_in_memory()
        } else {
            Self::new_with_file(location)
        }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        let document: Option<String> = kv_store::table
            .find(key)
            .select(kv_store::document)
            .first::<String>(&mut self.conn)
            .optional()?;
        debug!(key, found = document.is_some(), "Read document");
        Ok(document)
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), PersistenceError> {
        diesel::replace_into(kv_store::table)
            .values((
                kv_store::storage_key.eq(key),
                kv_store::document.eq(document),
            ))
            .execute(&mut self.conn)?;
        debug!(key, bytes = document.len(), "Wrote document");
        Ok(())
    }
}
