// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stored JSON document.
//!
//! The whole aggregate is one object with four array fields, `users`,
//! `shifts`, `messages` and `activityLogs`. Decoding is lenient: each field
//! is decoded on its own, and a field that is absent or not an array becomes
//! an empty collection. Inside an array, each record is decoded on its own
//! and only the records that fail to decode are skipped.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shiftdesk::AppData;
use shiftdesk_domain::{ActivityLog, Message, ShiftRecord, User};
use tracing::warn;

use crate::error::PersistenceError;

/// The key the document is stored under.
pub const STORAGE_KEY: &str = "RFA_SHIFT_MASTER_V2";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRef<'a> {
    users: &'a [User],
    shifts: &'a [ShiftRecord],
    messages: &'a [Message],
    activity_logs: &'a [ActivityLog],
}

/// How one collection fared during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Every record decoded.
    Decoded,
    /// An array, but some records failed to decode and were skipped.
    Partial {
        /// Number of records left out.
        skipped: usize,
    },
    /// Not present in the document.
    Missing,
    /// Present but not an array; replaced by an empty list.
    Discarded,
}

/// The result of decoding a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered aggregate. It may lack a root account.
    pub data: AppData,
    /// `false` when the document was not a JSON object at all.
    pub well_formed: bool,
    /// Outcome per collection, in document field order.
    pub fields: [(&'static str, FieldOutcome); 4],
}

impl Decoded {
    /// Names of the collections that were present but discarded.
    #[must_use]
    pub fn discarded(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, outcome)| *outcome == FieldOutcome::Discarded)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Collections that lost records, with how many were skipped.
    #[must_use]
    pub fn skipped(&self) -> Vec<(&'static str, usize)> {
        self.fields
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                FieldOutcome::Partial { skipped } => Some((*name, *skipped)),
                FieldOutcome::Decoded | FieldOutcome::Missing | FieldOutcome::Discarded => None,
            })
            .collect()
    }
}

/// Encodes the aggregate as a JSON document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(data: &AppData) -> Result<String, PersistenceError> {
    let document: DocumentRef<'_> = DocumentRef {
        users: data.users(),
        shifts: data.shifts(),
        messages: data.messages(),
        activity_logs: data.activity_logs(),
    };
    Ok(serde_json::to_string(&document)?)
}

fn decode_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    name: &'static str,
) -> (Vec<T>, FieldOutcome) {
    let Some(value) = object.get(name) else {
        return (Vec::new(), FieldOutcome::Missing);
    };
    let Value::Array(entries) = value else {
        return (Vec::new(), FieldOutcome::Discarded);
    };

    let mut records: Vec<T> = Vec::with_capacity(entries.len());
    let mut skipped: usize = 0;
    for (index, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(collection = name, index, error = %e, "Skipped undecodable record");
                skipped += 1;
            }
        }
    }

    let outcome: FieldOutcome = if skipped == 0 {
        FieldOutcome::Decoded
    } else {
        FieldOutcome::Partial { skipped }
    };
    (records, outcome)
}

/// Decodes a stored document, never failing.
#[must_use]
pub fn decode(document: &str) -> Decoded {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(document) else {
        return Decoded {
            data: AppData::new(),
            well_formed: false,
            fields: [
                ("users", FieldOutcome::Missing),
                ("shifts", FieldOutcome::Missing),
                ("messages", FieldOutcome::Missing),
                ("activityLogs", FieldOutcome::Missing),
            ],
        };
    };

    let (users, users_outcome) = decode_field::<User>(&object, "users");
    let (shifts, shifts_outcome) = decode_field::<ShiftRecord>(&object, "shifts");
    let (messages, messages_outcome) = decode_field::<Message>(&object, "messages");
    let (activity_logs, logs_outcome) = decode_field::<ActivityLog>(&object, "activityLogs");

    Decoded {
        data: AppData::from_parts(users, shifts, messages, activity_logs),
        well_formed: true,
        fields: [
            ("users", users_outcome),
            ("shifts", shifts_outcome),
            ("messages", messages_outcome),
            ("activityLogs", logs_outcome),
        ],
    }
}
