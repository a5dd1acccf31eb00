// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk_domain::{DomainError, LogStatus, Role};

/// The family a [`CoreError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is missing or malformed.
    Validation,
    /// The actor's role does not permit the command.
    Authorization,
    /// A referenced record does not exist.
    NotFound,
    /// The target record is in a state that forbids the command.
    State,
}

/// Errors that can occur during state transitions.
///
/// Every variant is local and recoverable; a failed command leaves the
/// aggregate untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The actor's role may not perform this command.
    Unauthorized {
        /// The command that was attempted.
        action: String,
        /// The role the actor holds.
        role: Role,
    },
    /// A referenced record does not exist.
    NotFound {
        /// The kind of record.
        resource: String,
        /// The identifier that was looked up.
        id: String,
    },
    /// An activity log has already left the pending state.
    InvalidTransition {
        /// The log being resolved.
        log_id: String,
        /// Its current status.
        current: LogStatus,
        /// The status that was requested.
        requested: LogStatus,
    },
}

impl CoreError {
    /// Returns the error family.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainViolation(_) => ErrorKind::Validation,
            Self::Unauthorized { .. } => ErrorKind::Authorization,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidTransition { .. } => ErrorKind::State,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Unauthorized { action, role } => {
                write!(f, "Unauthorized: role {role} may not perform '{action}'")
            }
            Self::NotFound { resource, id } => write!(f, "{resource} '{id}' not found"),
            Self::InvalidTransition {
                log_id,
                current,
                requested,
            } => write!(
                f,
                "Activity log '{log_id}' is already {current} and cannot become {requested}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
