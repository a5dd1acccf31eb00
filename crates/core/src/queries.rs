// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only projections over [`AppData`].
//!
//! Nothing in this module mutates state. Collections come back in
//! insertion order; callers reverse or sort for display.

use crate::state::AppData;
use shiftdesk_domain::{
    ActivityLog, DateKey, DomainError, LogStatus, Message, PersonnelId, Role, ShiftRecord,
    ShiftType, User, days_in_month, holiday,
};

/// One personnel account and its assignment on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    /// The personnel account.
    pub user: &'a User,
    /// The assignment, if any.
    pub shift: Option<ShiftType>,
}

/// One cell of a month calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The day.
    pub date: DateKey,
    /// The assignment, if any.
    pub shift: Option<ShiftType>,
    /// The holiday falling on this day, if any.
    pub holiday: Option<&'static str>,
}

/// Returns every shift record for `personnel_id`, unsorted.
#[must_use]
pub fn shifts_for<'a>(data: &'a AppData, personnel_id: &PersonnelId) -> Vec<&'a ShiftRecord> {
    data.shifts()
        .iter()
        .filter(|record| &record.personnel_id == personnel_id)
        .collect()
}

/// Returns the shift assigned to `personnel_id` on `date`.
#[must_use]
pub fn shift_on<'a>(
    data: &'a AppData,
    personnel_id: &PersonnelId,
    date: &DateKey,
) -> Option<&'a ShiftRecord> {
    data.shift(personnel_id, date)
}

/// Returns the messages visible to `personnel_id`, oldest first.
///
/// A message is visible to its sender, its direct recipient, and everyone
/// when broadcast.
#[must_use]
pub fn inbox_for<'a>(data: &'a AppData, personnel_id: &PersonnelId) -> Vec<&'a Message> {
    data.messages()
        .iter()
        .filter(|message| message.is_visible_to(personnel_id))
        .collect()
}

/// Counts directly-addressed messages `personnel_id` has not acknowledged.
///
/// Broadcast messages never count towards the unread total.
#[must_use]
pub fn unread_count_for(data: &AppData, personnel_id: &PersonnelId) -> usize {
    data.messages()
        .iter()
        .filter(|message| {
            message.to_id.is_direct_to(personnel_id) && !message.is_read_by(personnel_id)
        })
        .count()
}

/// Returns the activity logs awaiting a root decision, oldest first.
#[must_use]
pub fn pending_logs(data: &AppData) -> Vec<&ActivityLog> {
    data.activity_logs()
        .iter()
        .filter(|log| log.status == LogStatus::Pending)
        .collect()
}

/// Returns the approved activity logs whose subject is `personnel_id`.
#[must_use]
pub fn approved_logs_for<'a>(data: &'a AppData, personnel_id: &PersonnelId) -> Vec<&'a ActivityLog> {
    data.activity_logs()
        .iter()
        .filter(|log| &log.personnel_id == personnel_id && log.status == LogStatus::Approved)
        .collect()
}

/// Returns every account holding `role`.
#[must_use]
pub fn users_with_role(data: &AppData, role: Role) -> Vec<&User> {
    data.users()
        .iter()
        .filter(|user| user.role == role)
        .collect()
}

/// Returns every personnel account with its assignment on `date`.
#[must_use]
pub fn roster_for<'a>(data: &'a AppData, date: &DateKey) -> Vec<RosterEntry<'a>> {
    users_with_role(data, Role::Personnel)
        .into_iter()
        .map(|user| RosterEntry {
            user,
            shift: data
                .shift(&user.personnel_id, date)
                .map(|record| record.shift_type),
        })
        .collect()
}

/// Builds the calendar for one month of `personnel_id`'s schedule.
///
/// # Errors
///
/// Returns an error if `month` is not in `1..=12`.
pub fn month_view(
    data: &AppData,
    personnel_id: &PersonnelId,
    year: u16,
    month: u8,
) -> Result<Vec<DayCell>, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidDate {
            value: format!("{year:04}-{month:02}"),
            reason: String::from("month must be between 1 and 12"),
        });
    }

    (1..=days_in_month(year, month))
        .map(|day| -> Result<DayCell, DomainError> {
            let date: DateKey = DateKey::new(year, month, day)?;
            Ok(DayCell {
                date,
                shift: data
                    .shift(personnel_id, &date)
                    .map(|record| record.shift_type),
                holiday: holiday(month, day),
            })
        })
        .collect()
}

/// Finds the account a login attempt resolves to.
///
/// The first account whose identifier, password and role all match wins.
#[must_use]
pub fn find_login<'a>(
    data: &'a AppData,
    personnel_id: &PersonnelId,
    password: &str,
    role: Role,
) -> Option<&'a User> {
    data.users().iter().find(|user| {
        &user.personnel_id == personnel_id && user.password == password && user.role == role
    })
}
