// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk_domain::{LogStatus, LogType, PersonnelId, Recipient, Role, ShiftPattern, ShiftType};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Dates arrive as the
/// raw `YYYY-MM-DD` text the caller collected and are validated when the
/// command is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a unit administrator (by root) or personnel account (by a unit administrator).
    CreateAccount {
        /// The new account's identifier.
        personnel_id: PersonnelId,
        /// Display name.
        name: String,
        /// Login credential.
        password: String,
        /// The role of the new account.
        role: Role,
    },
    /// Set one person's shift for one day, replacing any existing assignment.
    AssignShift {
        /// Who is assigned.
        personnel_id: PersonnelId,
        /// Which day.
        date: String,
        /// The assignment.
        shift_type: ShiftType,
    },
    /// Lay a repeating rotation over a run of consecutive days.
    ApplyShiftPattern {
        /// Who is assigned.
        personnel_id: PersonnelId,
        /// First day of the rotation.
        start: String,
        /// Number of days to fill.
        duration_days: u16,
        /// The rotation.
        pattern: ShiftPattern,
    },
    /// Record a fault or reward for root approval.
    SubmitActivityLog {
        /// The subject of the log.
        personnel_id: PersonnelId,
        /// The day the activity refers to.
        date: String,
        /// Fault or reward.
        log_type: LogType,
        /// Signed score delta.
        count: i64,
        /// Free-text justification.
        reason: String,
        /// Optional attachment reference.
        attachment: Option<String>,
    },
    /// Approve or reject a pending activity log.
    ResolveActivityLog {
        /// The log to resolve.
        log_id: String,
        /// `Approved` or `Rejected`.
        decision: LogStatus,
    },
    /// Send a direct or broadcast message.
    SendMessage {
        /// Addressee.
        to: Recipient,
        /// Body.
        text: String,
        /// Optional attachment reference.
        attachment: Option<String>,
    },
    /// Acknowledge a message on behalf of the actor.
    MarkRead {
        /// The message being acknowledged.
        message_id: String,
    },
}

impl Command {
    /// Returns the action name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateAccount { .. } => "CreateAccount",
            Self::AssignShift { .. } => "AssignShift",
            Self::ApplyShiftPattern { .. } => "ApplyShiftPattern",
            Self::SubmitActivityLog { .. } => "SubmitActivityLog",
            Self::ResolveActivityLog { .. } => "ResolveActivityLog",
            Self::SendMessage { .. } => "SendMessage",
            Self::MarkRead { .. } => "MarkRead",
        }
    }
}
