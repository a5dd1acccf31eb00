// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    NOW, admin_actor, assign_shift_command, create_account_command, create_test_state,
    personnel_actor, root_actor, send_message_command, submit_log_command,
};
use crate::{AppData, Command, CoreError, ErrorKind, apply, authorize};
use shiftdesk_domain::{LogStatus, LogType, Role, ShiftPattern, ShiftType};

fn resolve_command() -> Command {
    Command::ResolveActivityLog {
        log_id: String::from("1"),
        decision: LogStatus::Approved,
    }
}

fn pattern_command() -> Command {
    Command::ApplyShiftPattern {
        personnel_id: "P1".into(),
        start: String::from("1403-01-01"),
        duration_days: 5,
        pattern: ShiftPattern::default(),
    }
}

#[test]
fn test_root_creates_only_unit_admins() {
    assert!(authorize(&root_actor(), &create_account_command("A2", Role::UnitAdmin)).is_ok());
    assert!(authorize(&root_actor(), &create_account_command("P9", Role::Personnel)).is_err());
    assert!(authorize(&root_actor(), &create_account_command("R2", Role::Root)).is_err());
}

#[test]
fn test_unit_admin_creates_only_personnel() {
    assert!(authorize(&admin_actor(), &create_account_command("P9", Role::Personnel)).is_ok());
    assert!(authorize(&admin_actor(), &create_account_command("A2", Role::UnitAdmin)).is_err());
    assert!(authorize(&admin_actor(), &create_account_command("R2", Role::Root)).is_err());
}

#[test]
fn test_personnel_cannot_create_accounts() {
    let err: CoreError = authorize(
        &personnel_actor("P1"),
        &create_account_command("P9", Role::Personnel),
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::Unauthorized {
            action: String::from("CreateAccount"),
            role: Role::Personnel,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Authorization);
}

#[test]
fn test_shift_assignment_roles() {
    let assign: Command = assign_shift_command("P1", "1403-01-01", ShiftType::Day);

    assert!(authorize(&root_actor(), &assign).is_ok());
    assert!(authorize(&admin_actor(), &assign).is_ok());
    assert!(authorize(&personnel_actor("P1"), &assign).is_err());

    assert!(authorize(&root_actor(), &pattern_command()).is_ok());
    assert!(authorize(&admin_actor(), &pattern_command()).is_ok());
    assert!(authorize(&personnel_actor("P1"), &pattern_command()).is_err());
}

#[test]
fn test_only_unit_admin_submits_activity_logs() {
    let submit: Command = submit_log_command("P1", LogType::Fault, 1);

    assert!(authorize(&admin_actor(), &submit).is_ok());
    assert!(authorize(&root_actor(), &submit).is_err());
    assert!(authorize(&personnel_actor("P1"), &submit).is_err());
}

#[test]
fn test_only_root_resolves_activity_logs() {
    assert!(authorize(&root_actor(), &resolve_command()).is_ok());
    assert!(authorize(&admin_actor(), &resolve_command()).is_err());
    assert!(authorize(&personnel_actor("P1"), &resolve_command()).is_err());
}

#[test]
fn test_personnel_cannot_send_messages() {
    let send: Command = send_message_command("ALL", "hello");

    assert!(authorize(&root_actor(), &send).is_ok());
    assert!(authorize(&admin_actor(), &send).is_ok());
    assert!(authorize(&personnel_actor("P1"), &send).is_err());
}

#[test]
fn test_everyone_may_mark_read() {
    let mark: Command = Command::MarkRead {
        message_id: String::from("1"),
    };

    assert!(authorize(&root_actor(), &mark).is_ok());
    assert!(authorize(&admin_actor(), &mark).is_ok());
    assert!(authorize(&personnel_actor("P1"), &mark).is_ok());
}

#[test]
fn test_authorization_runs_before_validation() {
    let state: AppData = create_test_state();

    let err: CoreError = apply(
        &state,
        assign_shift_command("", "not-a-date", ShiftType::Day),
        personnel_actor("P1"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::Unauthorized { .. }));
}

#[test]
fn test_unauthorized_command_leaves_state_untouched() {
    let state: AppData = create_test_state();

    let result = apply(
        &state,
        create_account_command("P9", Role::Personnel),
        root_actor(),
        NOW,
    );

    assert!(result.is_err());
    assert_eq!(state.users().len(), 4);
}
