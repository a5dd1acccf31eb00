// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::days_in_month;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The recipient sentinel addressing every user at once.
pub const BROADCAST_RECIPIENT: &str = "ALL";

/// Role tiers.
///
/// Serialized with the legacy storage values `SUPER_ADMIN`, `ADMIN` and `USER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Super-administrator. Creates unit administrators and resolves activity logs.
    #[serde(rename = "SUPER_ADMIN")]
    Root,
    /// Unit administrator. Manages shifts and personnel, submits activity logs.
    #[serde(rename = "ADMIN")]
    UnitAdmin,
    /// Field personnel. Reads their own schedule, inbox and performance.
    #[serde(rename = "USER")]
    Personnel,
}

impl Role {
    /// Returns the storage representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "SUPER_ADMIN",
            Self::UnitAdmin => "ADMIN",
            Self::Personnel => "USER",
        }
    }

    /// Returns the role an actor of this role is allowed to create, if any.
    ///
    /// Root creates unit administrators; unit administrators create personnel.
    #[must_use]
    pub const fn creatable_role(&self) -> Option<Self> {
        match self {
            Self::Root => Some(Self::UnitAdmin),
            Self::UnitAdmin => Some(Self::Personnel),
            Self::Personnel => None,
        }
    }

    /// Returns whether this role may create an account of `target` role.
    #[must_use]
    pub fn can_create(&self, target: Self) -> bool {
        self.creatable_role() == Some(target)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUPER_ADMIN" | "ROOT" => Ok(Self::Root),
            "ADMIN" | "UNIT_ADMIN" => Ok(Self::UnitAdmin),
            "USER" | "PERSONNEL" => Ok(Self::Personnel),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// A personnel identifier.
///
/// This is the stable key for users across shifts, messages and logs. It is
/// carried verbatim, without normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonnelId(String);

impl PersonnelId {
    /// Creates a new `PersonnelId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is empty or whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for PersonnelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonnelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A calendar-day key in `YYYY-MM-DD` form.
///
/// Date keys join shift records to calendar cells. Every key is valid in
/// the simplified calendar: month in `1..=12` and day within the month length.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    year: u16,
    month: u8,
    day: u8,
}

impl DateKey {
    /// Creates a validated date key.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in `1..=12` or the day is not
    /// within the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidDate {
            value: format!("{year:04}-{month:02}-{day:02}"),
            reason,
        };
        if !(1..=12).contains(&month) {
            return Err(invalid(String::from("month must be between 1 and 12")));
        }
        let max_day: u8 = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(invalid(format!("day must be between 1 and {max_day}")));
        }
        Ok(Self { year, month, day })
    }

    /// Builds a key from parts already known to be within the calendar.
    pub(crate) const fn from_calendar(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parses a `YYYY-MM-DD` date key.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not in `YYYY-MM-DD` form, or
    /// names a day outside the calendar.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidDate {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("date cannot be empty"));
        }

        let mut parts = trimmed.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected YYYY-MM-DD"));
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid("expected YYYY-MM-DD"));
        }

        let year: u16 = year.parse().map_err(|_| invalid("year is not a number"))?;
        let month: u8 = month.parse().map_err(|_| invalid("month is not a number"))?;
        let day: u8 = day.parse().map_err(|_| invalid("day is not a number"))?;

        Self::new(year, month, day).map_err(|err| match err {
            DomainError::InvalidDate { reason, .. } => invalid(&reason),
            other => other,
        })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the following day, rolling over months and years.
    #[must_use]
    pub fn next_day(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self::from_calendar(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::from_calendar(self.year, self.month + 1, 1)
        } else {
            Self::from_calendar(self.year.saturating_add(1), 1, 1)
        }
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

/// The kind of shift assigned for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    /// Day shift.
    Day,
    /// Night shift.
    Night,
    /// Rest or leave.
    Rest,
}

impl ShiftType {
    /// Returns the storage representation of this shift type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Night => "NIGHT",
            Self::Rest => "REST",
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DAY" => Ok(Self::Day),
            "NIGHT" => Ok(Self::Night),
            "REST" => Ok(Self::Rest),
            _ => Err(DomainError::InvalidShiftType(s.to_string())),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The stable identifier, also used as the login name.
    pub personnel_id: PersonnelId,
    /// Display name.
    pub name: String,
    /// Plaintext login credential.
    pub password: String,
    /// The role tier.
    pub role: Role,
    /// Creation time in Unix milliseconds. Absent on legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl User {
    /// Creates a new `User`.
    #[must_use]
    pub const fn new(
        personnel_id: PersonnelId,
        name: String,
        password: String,
        role: Role,
        created_at: Option<i64>,
    ) -> Self {
        Self {
            personnel_id,
            name,
            password,
            role,
            created_at,
        }
    }
}

/// One person's assignment for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Who is assigned.
    pub personnel_id: PersonnelId,
    /// Which day.
    pub date: DateKey,
    /// The assignment.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
}

impl ShiftRecord {
    /// Creates a new `ShiftRecord`.
    #[must_use]
    pub const fn new(personnel_id: PersonnelId, date: DateKey, shift_type: ShiftType) -> Self {
        Self {
            personnel_id,
            date,
            shift_type,
        }
    }
}

/// Whether an activity log penalizes or rewards its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogType {
    /// A recorded fault.
    Fault,
    /// A recorded reward.
    Reward,
}

impl LogType {
    /// Returns the storage representation of this log type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fault => "FAULT",
            Self::Reward => "REWARD",
        }
    }
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FAULT" => Ok(Self::Fault),
            "REWARD" => Ok(Self::Reward),
            _ => Err(DomainError::InvalidLogType(s.to_string())),
        }
    }
}

/// Approval state of an activity log.
///
/// Valid transitions are:
/// - `Pending` → `Approved`
/// - `Pending` → `Rejected`
///
/// Both resolved states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    /// Awaiting a root decision.
    #[default]
    Pending,
    /// Accepted; visible in the subject's performance history.
    Approved,
    /// Declined.
    Rejected,
}

impl LogStatus {
    /// Returns the storage representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Checks if a transition from this status to `target` is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved | Self::Rejected)
        )
    }
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidLogStatus(s.to_string())),
        }
    }
}

/// A scored fault or reward record awaiting, or past, root approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    /// Unique identifier.
    pub id: String,
    /// The subject of the log.
    pub personnel_id: PersonnelId,
    /// The unit administrator who submitted it.
    pub admin_id: PersonnelId,
    /// The day the activity refers to.
    pub date: DateKey,
    /// Signed score delta.
    pub count: i64,
    /// Free-text justification.
    pub reason: String,
    /// Fault or reward.
    #[serde(rename = "type")]
    pub log_type: LogType,
    /// Approval state.
    pub status: LogStatus,
    /// Opaque attachment reference, carried verbatim.
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// Addressee of a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recipient {
    /// Every user.
    All,
    /// A single user.
    Personnel(PersonnelId),
}

impl Recipient {
    /// Returns whether this recipient addresses `personnel_id` directly.
    #[must_use]
    pub fn is_direct_to(&self, personnel_id: &PersonnelId) -> bool {
        matches!(self, Self::Personnel(id) if id == personnel_id)
    }

    /// Returns whether this recipient includes `personnel_id`.
    #[must_use]
    pub fn includes(&self, personnel_id: &PersonnelId) -> bool {
        match self {
            Self::All => true,
            Self::Personnel(id) => id == personnel_id,
        }
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(BROADCAST_RECIPIENT),
            Self::Personnel(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        if value == BROADCAST_RECIPIENT {
            Self::All
        } else {
            Self::Personnel(PersonnelId::new(value))
        }
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Recipient> for String {
    fn from(value: Recipient) -> Self {
        value.to_string()
    }
}

/// An inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier.
    pub id: String,
    /// Sender.
    pub from_id: PersonnelId,
    /// Addressee, or the broadcast sentinel.
    pub to_id: Recipient,
    /// Body; may be empty when an attachment is present.
    pub text: String,
    /// Opaque attachment reference, carried verbatim.
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    /// Send time in Unix milliseconds.
    pub timestamp: i64,
    /// Users who have acknowledged the message. Grows monotonically.
    #[serde(default)]
    pub read_by: Vec<PersonnelId>,
}

impl Message {
    /// Returns whether the message appears in `personnel_id`'s inbox.
    #[must_use]
    pub fn is_visible_to(&self, personnel_id: &PersonnelId) -> bool {
        &self.from_id == personnel_id || self.to_id.includes(personnel_id)
    }

    /// Returns whether `personnel_id` has acknowledged the message.
    #[must_use]
    pub fn is_read_by(&self, personnel_id: &PersonnelId) -> bool {
        self.read_by.contains(personnel_id)
    }
}
