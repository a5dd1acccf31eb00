// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised by a storage backend.
///
/// Malformed stored documents are never an error; they are repaired on load.
/// Only backend I/O and encoding failures surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database could not be opened.
    #[error("Database connection failed: {0}")]
    DatabaseConnectionFailed(String),

    /// Schema migrations could not be applied.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A read or write against the backend failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The aggregate could not be encoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The backend was configured with an unusable location.
    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
