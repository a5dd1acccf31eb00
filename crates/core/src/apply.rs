// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::authorization::authorize;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{AppData, TransitionResult};
use shiftdesk_audit::{Action, Actor, AuditEvent, StateSnapshot};
use shiftdesk_domain::{
    ActivityLog, DateKey, DomainError, LogStatus, Message, ShiftRecord, User,
    validate_account_fields, validate_message, validate_personnel_id,
    validate_personnel_id_unique,
};

/// Applies a command to the current state, producing a new state and audit event.
///
/// The actor is authorized against the command before anything else is
/// checked. The input state is never modified; on failure nothing changes.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `now` - The current time in Unix milliseconds
///
/// # Errors
///
/// Returns an error if:
/// - The actor's role does not permit the command
/// - A required field is empty or malformed
/// - A referenced message or activity log does not exist
/// - An activity log is resolved a second time
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &AppData,
    command: Command,
    actor: Actor,
    now: i64,
) -> Result<TransitionResult, CoreError> {
    authorize(&actor, &command)?;

    let before: StateSnapshot = state.to_snapshot();
    let mut new_state: AppData = state.clone();

    let action: Action = match command {
        Command::CreateAccount {
            personnel_id,
            name,
            password,
            role,
        } => {
            validate_account_fields(&personnel_id, &name)?;
            validate_personnel_id_unique(&personnel_id, state.users())?;

            let details: String = format!("Created {role} account '{personnel_id}'");
            new_state.push_user(User::new(personnel_id, name, password, role, Some(now)));
            Action::new(String::from("CreateAccount"), Some(details))
        }
        Command::AssignShift {
            personnel_id,
            date,
            shift_type,
        } => {
            validate_personnel_id(&personnel_id)?;
            let date: DateKey = DateKey::parse(&date)?;

            let details: String = format!("Assigned {shift_type} to '{personnel_id}' on {date}");
            new_state.upsert_shift(ShiftRecord::new(personnel_id, date, shift_type));
            Action::new(String::from("AssignShift"), Some(details))
        }
        Command::ApplyShiftPattern {
            personnel_id,
            start,
            duration_days,
            pattern,
        } => {
            validate_personnel_id(&personnel_id)?;
            let start: DateKey = DateKey::parse(&start)?;
            let schedule = pattern.schedule(start, duration_days)?;

            for (date, shift_type) in schedule {
                new_state.upsert_shift(ShiftRecord::new(personnel_id.clone(), date, shift_type));
            }
            Action::new(
                String::from("ApplyShiftPattern"),
                Some(format!(
                    "Applied {}/{}/{} rotation to '{personnel_id}' for {duration_days} days from {start}",
                    pattern.day, pattern.night, pattern.rest
                )),
            )
        }
        Command::SubmitActivityLog {
            personnel_id,
            date,
            log_type,
            count,
            reason,
            attachment,
        } => {
            validate_personnel_id(&personnel_id)?;
            let date: DateKey = DateKey::parse(&date)?;

            let id: String = state.fresh_log_id(now);
            let details: String =
                format!("Submitted {log_type} log '{id}' ({count}) for '{personnel_id}'");
            new_state.push_activity_log(ActivityLog {
                id,
                personnel_id,
                admin_id: actor.personnel_id.clone(),
                date,
                count,
                reason,
                log_type,
                status: LogStatus::Pending,
                attachment,
            });
            Action::new(String::from("SubmitActivityLog"), Some(details))
        }
        Command::ResolveActivityLog { log_id, decision } => {
            if log_id.trim().is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptyLogId));
            }
            if !decision.is_terminal() {
                return Err(CoreError::DomainViolation(DomainError::InvalidLogDecision(
                    decision,
                )));
            }

            let log: &ActivityLog =
                state
                    .activity_log(&log_id)
                    .ok_or_else(|| CoreError::NotFound {
                        resource: String::from("Activity log"),
                        id: log_id.clone(),
                    })?;
            if !log.status.can_transition_to(decision) {
                return Err(CoreError::InvalidTransition {
                    log_id,
                    current: log.status,
                    requested: decision,
                });
            }

            new_state.set_log_status(&log_id, decision);
            Action::new(
                String::from("ResolveActivityLog"),
                Some(format!("Marked activity log '{log_id}' {decision}")),
            )
        }
        Command::SendMessage {
            to,
            text,
            attachment,
        } => {
            validate_message(&to, &text, attachment.as_deref())?;

            let id: String = state.fresh_message_id(now);
            let details: String = format!("Sent message '{id}' to {to}");
            new_state.push_message(Message {
                id,
                from_id: actor.personnel_id.clone(),
                to_id: to,
                text,
                attachment,
                timestamp: now,
                read_by: Vec::new(),
            });
            Action::new(String::from("SendMessage"), Some(details))
        }
        Command::MarkRead { message_id } => {
            if message_id.trim().is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptyMessageId));
            }
            let visible: bool = state
                .message(&message_id)
                .is_some_and(|message| message.is_visible_to(&actor.personnel_id));
            if !visible {
                return Err(CoreError::NotFound {
                    resource: String::from("Message"),
                    id: message_id,
                });
            }

            new_state.mark_read(&message_id, &actor.personnel_id);
            Action::new(
                String::from("MarkRead"),
                Some(format!(
                    "'{}' acknowledged message '{message_id}'",
                    actor.personnel_id
                )),
            )
        }
    };

    let after: StateSnapshot = new_state.to_snapshot();
    let audit_event: AuditEvent = AuditEvent::new(actor, action, before, after, now);

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}
