// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk::AppData;
use shiftdesk_domain::Clock;
use tracing::{debug, info, warn};

use crate::backend::KeyValueStore;
use crate::document::{self, Decoded, STORAGE_KEY};
use crate::error::PersistenceError;

/// Owns the current aggregate and the backend it is saved to.
///
/// The in-memory aggregate always matches the last document written. A
/// failed write leaves both untouched.
pub struct Store<K: KeyValueStore> {
    backend: K,
    data: AppData,
}

impl<K: KeyValueStore> Store<K> {
    /// Loads the aggregate from `backend`, repairing it as needed.
    ///
    /// A missing or malformed document yields the seed root account alone.
    /// Collections that are not arrays are emptied, and undecodable records
    /// are skipped while their siblings are kept. If no root account
    /// survives, the seed root is re-inserted with `clock`'s current time.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    pub fn load(mut backend: K, clock: &dyn Clock) -> Result<Self, PersistenceError> {
        let now: i64 = clock.now_millis();

        let data: AppData = match backend.read(STORAGE_KEY)? {
            None => {
                info!("No stored document found, starting from seed data");
                AppData::seeded(now)
            }
            Some(raw) => {
                let decoded: Decoded = document::decode(&raw);
                if !decoded.well_formed {
                    warn!("Stored document is not a JSON object, starting from seed data");
                }
                for name in decoded.discarded() {
                    warn!(collection = name, "Discarded collection that is not an array");
                }
                for (name, skipped) in decoded.skipped() {
                    warn!(collection = name, skipped, "Kept collection with skipped records");
                }

                let mut data: AppData = decoded.data;
                if data.ensure_root(now) {
                    warn!("No root account in stored document, re-inserted seed root");
                }
                data
            }
        };

        debug!(snapshot = %data.to_snapshot().data, "Loaded aggregate");
        Ok(Self { backend, data })
    }

    /// The current aggregate.
    #[must_use]
    pub const fn data(&self) -> &AppData {
        &self.data
    }

    /// Persists `new_data`, then makes it the current aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails; the current
    /// aggregate is unchanged in that case.
    pub fn replace(&mut self, new_data: AppData) -> Result<(), PersistenceError> {
        let raw: String = document::encode(&new_data)?;
        self.backend.write(STORAGE_KEY, &raw)?;
        self.data = new_data;
        Ok(())
    }

    /// The backend the aggregate is saved to.
    #[must_use]
    pub const fn backend(&self) -> &K {
        &self.backend
    }

    /// Gives up the store, returning its backend.
    #[must_use]
    pub fn into_backend(self) -> K {
        self.backend
    }
}
