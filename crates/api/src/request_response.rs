// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response types returned by the service.
//!
//! These are detached from the aggregate so callers can hold and serialize
//! them freely. Passwords never leave the service.

use serde::Serialize;
use shiftdesk::{DayCell, RosterEntry};
use shiftdesk_audit::AuditEvent;
use shiftdesk_domain::{
    ActivityLog, LogStatus, LogType, Message, PersonnelId, Role, ShiftRecord, ShiftType, User,
};

/// The outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    /// The command that ran.
    pub action: String,
    /// What it did.
    pub details: Option<String>,
    /// The id of the record it created, for commands that create one.
    pub id: Option<String>,
    /// When it ran, in Unix milliseconds.
    pub timestamp: i64,
}

impl CommandResponse {
    pub(crate) fn from_audit(event: &AuditEvent, id: Option<String>) -> Self {
        Self {
            action: event.action.name.clone(),
            details: event.action.details.clone(),
            id,
            timestamp: event.timestamp,
        }
    }
}

/// An account, without its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub personnel_id: String,
    pub name: String,
    pub role: Role,
    pub created_at: Option<i64>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            personnel_id: user.personnel_id.to_string(),
            name: user.name.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftInfo {
    pub personnel_id: String,
    pub date: String,
    pub shift_type: ShiftType,
}

impl From<&ShiftRecord> for ShiftInfo {
    fn from(record: &ShiftRecord) -> Self {
        Self {
            personnel_id: record.personnel_id.to_string(),
            date: record.date.to_string(),
            shift_type: record.shift_type,
        }
    }
}

/// A message as seen by one reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageInfo {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    pub text: String,
    pub attachment: Option<String>,
    pub timestamp: i64,
    /// Whether the reader has acknowledged it.
    pub read: bool,
}

impl MessageInfo {
    pub(crate) fn for_reader(message: &Message, reader: &PersonnelId) -> Self {
        Self {
            id: message.id.clone(),
            from_id: message.from_id.to_string(),
            to_id: message.to_id.to_string(),
            text: message.text.clone(),
            attachment: message.attachment.clone(),
            timestamp: message.timestamp,
            read: message.is_read_by(reader),
        }
    }
}

/// A reader's inbox, newest last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxResponse {
    /// Directly-addressed messages not yet acknowledged.
    pub unread: usize,
    pub messages: Vec<MessageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityLogInfo {
    pub id: String,
    pub personnel_id: String,
    pub admin_id: String,
    pub date: String,
    pub count: i64,
    pub reason: String,
    pub log_type: LogType,
    pub status: LogStatus,
    pub attachment: Option<String>,
}

impl From<&ActivityLog> for ActivityLogInfo {
    fn from(log: &ActivityLog) -> Self {
        Self {
            id: log.id.clone(),
            personnel_id: log.personnel_id.to_string(),
            admin_id: log.admin_id.to_string(),
            date: log.date.to_string(),
            count: log.count,
            reason: log.reason.clone(),
            log_type: log.log_type,
            status: log.status,
            attachment: log.attachment.clone(),
        }
    }
}

/// Approved activity for one person and its running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceResponse {
    pub personnel_id: String,
    /// Sum of `count` over the approved logs.
    pub score: i64,
    pub logs: Vec<ActivityLogInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntryInfo {
    pub personnel_id: String,
    pub name: String,
    pub shift: Option<ShiftType>,
}

impl From<&RosterEntry<'_>> for RosterEntryInfo {
    fn from(entry: &RosterEntry<'_>) -> Self {
        Self {
            personnel_id: entry.user.personnel_id.to_string(),
            name: entry.user.name.clone(),
            shift: entry.shift,
        }
    }
}

/// Every personnel account's assignment on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterResponse {
    pub date: String,
    pub entries: Vec<RosterEntryInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCellInfo {
    pub date: String,
    pub shift: Option<ShiftType>,
    pub holiday: Option<String>,
}

impl From<&DayCell> for DayCellInfo {
    fn from(cell: &DayCell) -> Self {
        Self {
            date: cell.date.to_string(),
            shift: cell.shift,
            holiday: cell.holiday.map(str::to_string),
        }
    }
}

/// One person's schedule for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthViewResponse {
    pub personnel_id: String,
    pub year: u16,
    pub month: u8,
    pub month_name: String,
    pub days: Vec<DayCellInfo>,
}
