// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service boundary.

use shiftdesk::CoreError;
use shiftdesk_domain::DomainError;
use shiftdesk_persistence::PersistenceError;
use thiserror::Error;

/// Errors returned by service operations.
///
/// These are distinct from domain and core errors and represent the
/// boundary contract. Storage failures are folded in unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No account matches the supplied credentials and portal.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// Why the login was refused.
        reason: String,
    },

    /// The actor's role does not permit the action.
    #[error("Unauthorized: {role} may not perform '{action}'")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role the actor holds.
        role: String,
    },

    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },

    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },

    /// The storage backend failed.
    #[error("Storage failure: {0}")]
    Storage(#[from] PersistenceError),
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::DuplicatePersonnelId(id) => {
            return ApiError::DomainRuleViolation {
                rule: String::from("unique_personnel_id"),
                message: format!("Personnel ID '{id}' is already in use"),
            };
        }
        DomainError::EmptyPersonnelId => "personnel_id",
        DomainError::InvalidName(_) => "name",
        DomainError::InvalidRole(_) => "role",
        DomainError::InvalidShiftType(_) => "shift_type",
        DomainError::InvalidLogType(_) => "log_type",
        DomainError::InvalidLogStatus(_) | DomainError::InvalidLogDecision(_) => "decision",
        DomainError::InvalidDate { .. } => "date",
        DomainError::EmptyRecipient => "to",
        DomainError::EmptyMessage => "text",
        DomainError::EmptyLogId => "log_id",
        DomainError::EmptyMessageId => "message_id",
        DomainError::InvalidPattern(_) => "pattern",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Unauthorized { action, role } => ApiError::Unauthorized {
            action,
            role: role.to_string(),
        },
        CoreError::NotFound { resource, id } => ApiError::ResourceNotFound {
            message: format!("{resource} '{id}' does not exist"),
            resource_type: resource,
        },
        err @ CoreError::InvalidTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("single_resolution"),
            message: err.to_string(),
        },
    }
}
