// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AppData, Command, SEED_ROOT_ID, TransitionResult, apply};
use shiftdesk_audit::Actor;
use shiftdesk_domain::{LogType, PersonnelId, Recipient, Role, ShiftType};

pub const NOW: i64 = 1_710_000_000_000;

pub fn root_actor() -> Actor {
    Actor::new(PersonnelId::new(SEED_ROOT_ID), Role::Root)
}

pub fn admin_actor() -> Actor {
    Actor::new(PersonnelId::new("A1"), Role::UnitAdmin)
}

pub fn personnel_actor(id: &str) -> Actor {
    Actor::new(PersonnelId::new(id), Role::Personnel)
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(state: &AppData, command: Command, actor: Actor) -> AppData {
    let result: TransitionResult = apply(state, command, actor, NOW).unwrap();
    result.new_state
}

/// Seed root, unit admin `A1`, and personnel `P1` and `P2`.
pub fn create_test_state() -> AppData {
    let mut state: AppData = AppData::seeded(0);
    state = apply_ok(
        &state,
        create_account_command("A1", Role::UnitAdmin),
        root_actor(),
    );
    state = apply_ok(
        &state,
        create_account_command("P1", Role::Personnel),
        admin_actor(),
    );
    apply_ok(
        &state,
        create_account_command("P2", Role::Personnel),
        admin_actor(),
    )
}

pub fn create_account_command(personnel_id: &str, role: Role) -> Command {
    Command::CreateAccount {
        personnel_id: PersonnelId::new(personnel_id),
        name: format!("User {personnel_id}"),
        password: String::from("pw"),
        role,
    }
}

pub fn assign_shift_command(personnel_id: &str, date: &str, shift_type: ShiftType) -> Command {
    Command::AssignShift {
        personnel_id: PersonnelId::new(personnel_id),
        date: String::from(date),
        shift_type,
    }
}

pub fn submit_log_command(personnel_id: &str, log_type: LogType, count: i64) -> Command {
    Command::SubmitActivityLog {
        personnel_id: PersonnelId::new(personnel_id),
        date: String::from("1403-01-01"),
        log_type,
        count,
        reason: String::from("late"),
        attachment: None,
    }
}

pub fn send_message_command(to: &str, text: &str) -> Command {
    Command::SendMessage {
        to: Recipient::from(to),
        text: String::from(text),
        attachment: None,
    }
}
