// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maps parsed subcommands onto service calls.

use serde::Serialize;
use serde_json::Value;
use shiftdesk_api::{ApiError, ApplyPatternRequest, ShiftDesk, SubmitLogRequest, UserInfo};
use shiftdesk_audit::Actor;
use shiftdesk_domain::{Clock, ShiftPattern, ShiftType};
use shiftdesk_persistence::KeyValueStore;

use crate::cli::Command;

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::InvalidInput {
        field: String::from("output"),
        message: e.to_string(),
    })
}

fn order_from(order: &[ShiftType]) -> Result<[ShiftType; 3], ApiError> {
    <[ShiftType; 3]>::try_from(order).map_err(|_| ApiError::InvalidInput {
        field: String::from("order"),
        message: format!("expected 3 shift types, got {}", order.len()),
    })
}

/// Runs `command` as `actor` and returns its output as JSON.
///
/// # Errors
///
/// Returns an error if the service rejects the command.
pub fn run<K: KeyValueStore, C: Clock>(
    desk: &mut ShiftDesk<K, C>,
    actor: &Actor,
    command: Command,
) -> Result<Value, ApiError> {
    let own_id: String = actor.personnel_id.to_string();

    match command {
        Command::Whoami => {
            let user: Option<UserInfo> = desk
                .data()
                .user(&actor.personnel_id)
                .map(UserInfo::from);
            to_json(&user)
        }
        Command::CreateAccount {
            personnel_id,
            name,
            password,
        } => {
            let role = actor
                .role
                .creatable_role()
                .ok_or_else(|| ApiError::Unauthorized {
                    action: String::from("CreateAccount"),
                    role: actor.role.to_string(),
                })?;
            to_json(&desk.create_account(actor, &personnel_id, &name, &password, role)?)
        }
        Command::AssignShift {
            personnel_id,
            date,
            shift_type,
        } => to_json(&desk.assign_shift(actor, &personnel_id, &date, shift_type)?),
        Command::ApplyPattern {
            personnel_id,
            start,
            duration,
            day,
            night,
            rest,
            order,
        } => {
            let request: ApplyPatternRequest = ApplyPatternRequest {
                personnel_id,
                start,
                duration_days: duration,
                pattern: ShiftPattern {
                    day,
                    night,
                    rest,
                    order: order_from(&order)?,
                },
            };
            to_json(&desk.apply_shift_pattern(actor, request)?)
        }
        Command::SubmitLog {
            personnel_id,
            date,
            log_type,
            count,
            reason,
            attachment,
        } => {
            let request: SubmitLogRequest = SubmitLogRequest {
                personnel_id,
                date,
                log_type,
                count,
                reason,
                attachment,
            };
            to_json(&desk.submit_activity_log(actor, request)?)
        }
        Command::ResolveLog { log_id, decision } => {
            to_json(&desk.resolve_activity_log(actor, &log_id, decision)?)
        }
        Command::Send {
            to,
            text,
            attachment,
        } => to_json(&desk.send_message(actor, &to, &text, attachment)?),
        Command::MarkRead { message_id } => to_json(&desk.mark_read(actor, &message_id)?),
        Command::Users { role } => to_json(&desk.users_with_role(role)),
        Command::Shifts { personnel_id } => {
            to_json(&desk.shifts_for(personnel_id.as_deref().unwrap_or(&own_id)))
        }
        Command::Inbox => to_json(&desk.inbox_for(&own_id)),
        Command::Pending => to_json(&desk.pending_logs()),
        Command::Performance { personnel_id } => {
            to_json(&desk.performance_for(personnel_id.as_deref().unwrap_or(&own_id)))
        }
        Command::Roster { date } => to_json(&desk.roster_for(date.as_deref())?),
        Command::Month {
            personnel_id,
            year,
            month,
        } => {
            let year_month: Option<(u16, u8)> = year.zip(month);
            to_json(&desk.month_view(personnel_id.as_deref().unwrap_or(&own_id), year_month)?)
        }
    }
}
