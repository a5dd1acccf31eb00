// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk_audit::{AuditEvent, StateSnapshot};
use shiftdesk_domain::{
    ActivityLog, DateKey, LogStatus, Message, PersonnelId, Role, ShiftRecord, User,
};
use std::collections::HashMap;

/// Personnel ID of the seed root account.
pub const SEED_ROOT_ID: &str = "123456789";

/// Password of the seed root account.
pub const SEED_ROOT_PASSWORD: &str = "123456789";

/// Display name of the seed root account.
pub const SEED_ROOT_NAME: &str = "مدیریت ارشد آریا";

/// Builds the fixed seed root account.
#[must_use]
pub fn seed_root_user(created_at: i64) -> User {
    User::new(
        PersonnelId::new(SEED_ROOT_ID),
        String::from(SEED_ROOT_NAME),
        String::from(SEED_ROOT_PASSWORD),
        Role::Root,
        Some(created_at),
    )
}

/// The complete application state.
///
/// Holds every user, shift, message and activity log. Messages and logs keep
/// insertion order for chronological display. Shifts are indexed by
/// `(personnel_id, date)` and messages and logs by id; the indexes are
/// derived from the collections and rebuilt whenever the aggregate is
/// assembled from parts.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    users: Vec<User>,
    shifts: Vec<ShiftRecord>,
    messages: Vec<Message>,
    activity_logs: Vec<ActivityLog>,
    shift_index: HashMap<(PersonnelId, DateKey), usize>,
    message_index: HashMap<String, usize>,
    log_index: HashMap<String, usize>,
}

impl PartialEq for AppData {
    fn eq(&self, other: &Self) -> bool {
        self.users == other.users
            && self.shifts == other.shifts
            && self.messages == other.messages
            && self.activity_logs == other.activity_logs
    }
}

impl Eq for AppData {}

impl AppData {
    /// Creates an empty aggregate with no users at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh aggregate holding only the seed root account.
    #[must_use]
    pub fn seeded(created_at: i64) -> Self {
        let mut data: Self = Self::new();
        data.users.push(seed_root_user(created_at));
        data
    }

    /// Assembles an aggregate from its four collections.
    ///
    /// Shift records repeating a `(personnel_id, date)` pair collapse onto
    /// the first occurrence, keeping the type of the last one, exactly as if
    /// they had been assigned in order. For duplicated message or log ids the
    /// first occurrence is the one addressed by id.
    #[must_use]
    pub fn from_parts(
        users: Vec<User>,
        shifts: Vec<ShiftRecord>,
        messages: Vec<Message>,
        activity_logs: Vec<ActivityLog>,
    ) -> Self {
        let mut data: Self = Self {
            users,
            ..Self::default()
        };
        for record in shifts {
            data.upsert_shift(record);
        }
        for message in messages {
            data.push_message(message);
        }
        for log in activity_logs {
            data.push_activity_log(log);
        }
        data
    }

    /// Splits the aggregate into `(users, shifts, messages, activity_logs)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<User>, Vec<ShiftRecord>, Vec<Message>, Vec<ActivityLog>) {
        (self.users, self.shifts, self.messages, self.activity_logs)
    }

    /// All accounts.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All shift assignments.
    #[must_use]
    pub fn shifts(&self) -> &[ShiftRecord] {
        &self.shifts
    }

    /// All messages in the order they were sent.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// All activity logs in the order they were submitted.
    #[must_use]
    pub fn activity_logs(&self) -> &[ActivityLog] {
        &self.activity_logs
    }

    /// Returns the first account with `personnel_id`.
    #[must_use]
    pub fn user(&self, personnel_id: &PersonnelId) -> Option<&User> {
        self.users
            .iter()
            .find(|user| &user.personnel_id == personnel_id)
    }

    /// Returns whether a root account exists.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.users.iter().any(|user| user.role == Role::Root)
    }

    /// Returns the shift assigned to `personnel_id` on `date`.
    #[must_use]
    pub fn shift(&self, personnel_id: &PersonnelId, date: &DateKey) -> Option<&ShiftRecord> {
        self.shift_index
            .get(&(personnel_id.clone(), *date))
            .and_then(|&index| self.shifts.get(index))
    }

    /// Returns the message with `id`.
    #[must_use]
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.message_index
            .get(id)
            .and_then(|&index| self.messages.get(index))
    }

    /// Returns the activity log with `id`.
    #[must_use]
    pub fn activity_log(&self, id: &str) -> Option<&ActivityLog> {
        self.log_index
            .get(id)
            .and_then(|&index| self.activity_logs.get(index))
    }

    /// Re-inserts the seed root account when no root account exists.
    ///
    /// Returns `true` if the aggregate was repaired.
    pub fn ensure_root(&mut self, created_at: i64) -> bool {
        if self.has_root() {
            return false;
        }
        self.users.insert(0, seed_root_user(created_at));
        true
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "users={},shifts={},messages={},activity_logs={},pending_logs={}",
            self.users.len(),
            self.shifts.len(),
            self.messages.len(),
            self.activity_logs.len(),
            self.activity_logs
                .iter()
                .filter(|log| log.status == LogStatus::Pending)
                .count()
        ))
    }

    /// Returns an id derived from `timestamp` that no message uses yet.
    pub(crate) fn fresh_message_id(&self, timestamp: i64) -> String {
        fresh_id(timestamp, |id| self.message_index.contains_key(id))
    }

    /// Returns an id derived from `timestamp` that no activity log uses yet.
    pub(crate) fn fresh_log_id(&self, timestamp: i64) -> String {
        fresh_id(timestamp, |id| self.log_index.contains_key(id))
    }

    pub(crate) fn push_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Inserts or replaces the record for its `(personnel_id, date)` pair.
    pub(crate) fn upsert_shift(&mut self, record: ShiftRecord) {
        let key: (PersonnelId, DateKey) = (record.personnel_id.clone(), record.date);
        if let Some(&index) = self.shift_index.get(&key)
            && let Some(existing) = self.shifts.get_mut(index)
        {
            existing.shift_type = record.shift_type;
            return;
        }
        self.shift_index.insert(key, self.shifts.len());
        self.shifts.push(record);
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.message_index
            .entry(message.id.clone())
            .or_insert(self.messages.len());
        self.messages.push(message);
    }

    pub(crate) fn push_activity_log(&mut self, log: ActivityLog) {
        self.log_index
            .entry(log.id.clone())
            .or_insert(self.activity_logs.len());
        self.activity_logs.push(log);
    }

    /// Replaces the status of the log with `id`. Returns `false` if absent.
    pub(crate) fn set_log_status(&mut self, id: &str, status: LogStatus) -> bool {
        let index: Option<usize> = self.log_index.get(id).copied();
        match index.and_then(|index| self.activity_logs.get_mut(index)) {
            Some(log) => {
                log.status = status;
                true
            }
            None => false,
        }
    }

    /// Adds `reader` to the read set of the message with `id`.
    ///
    /// Returns `false` if the message does not exist.
    pub(crate) fn mark_read(&mut self, id: &str, reader: &PersonnelId) -> bool {
        let index: Option<usize> = self.message_index.get(id).copied();
        match index.and_then(|index| self.messages.get_mut(index)) {
            Some(message) => {
                if !message.read_by.contains(reader) {
                    message.read_by.push(reader.clone());
                }
                true
            }
            None => false,
        }
    }
}

fn fresh_id(timestamp: i64, taken: impl Fn(&str) -> bool) -> String {
    let mut candidate: i64 = timestamp;
    loop {
        let id: String = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: AppData,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
