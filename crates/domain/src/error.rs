// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::LogStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Personnel identifier is empty.
    EmptyPersonnelId,
    /// A personnel identifier is already taken by another account.
    DuplicatePersonnelId(String),
    /// User name is empty or invalid.
    InvalidName(String),
    /// Role string does not name a known role.
    InvalidRole(String),
    /// Shift type string does not name a known shift type.
    InvalidShiftType(String),
    /// Log type string does not name a known log type.
    InvalidLogType(String),
    /// Log status string does not name a known status.
    InvalidLogStatus(String),
    /// Date key is empty, malformed, or outside the calendar.
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Message recipient is empty.
    EmptyRecipient,
    /// Message has neither text nor an attachment.
    EmptyMessage,
    /// Activity log identifier is empty.
    EmptyLogId,
    /// Message identifier is empty.
    EmptyMessageId,
    /// A log resolution must be either approved or rejected.
    InvalidLogDecision(LogStatus),
    /// Rotation pattern cannot produce any shift.
    InvalidPattern(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPersonnelId => write!(f, "Personnel ID cannot be empty"),
            Self::DuplicatePersonnelId(id) => {
                write!(f, "An account with personnel ID '{id}' already exists")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRole(value) => write!(f, "Unknown role: '{value}'"),
            Self::InvalidShiftType(value) => write!(f, "Unknown shift type: '{value}'"),
            Self::InvalidLogType(value) => write!(f, "Unknown log type: '{value}'"),
            Self::InvalidLogStatus(value) => write!(f, "Unknown log status: '{value}'"),
            Self::InvalidDate { value, reason } => {
                write!(f, "Invalid date '{value}': {reason}")
            }
            Self::EmptyRecipient => write!(f, "Message recipient cannot be empty"),
            Self::EmptyMessage => {
                write!(f, "Message must carry text or an attachment")
            }
            Self::EmptyLogId => write!(f, "Activity log ID cannot be empty"),
            Self::EmptyMessageId => write!(f, "Message ID cannot be empty"),
            Self::InvalidLogDecision(status) => {
                write!(
                    f,
                    "Invalid decision {status}: must be APPROVED or REJECTED"
                )
            }
            Self::InvalidPattern(msg) => write!(f, "Invalid shift pattern: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
