// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk::{AppData, Command, SEED_ROOT_ID, TransitionResult, apply};
use shiftdesk_audit::Actor;
use shiftdesk_domain::{FixedClock, LogType, PersonnelId, Recipient, Role, ShiftType};
use time::macros::datetime;

use crate::{KeyValueStore, PersistenceError};

/// 2024-03-20 12:00 UTC in Unix milliseconds.
pub const CLOCK_MILLIS: i64 = 1_710_936_000_000;

pub fn fixed_clock() -> FixedClock {
    FixedClock(datetime!(2024-03-20 12:00 UTC))
}

fn run(state: &AppData, command: Command, actor: Actor, now: i64) -> AppData {
    let result: TransitionResult = apply(state, command, actor, now).unwrap();
    result.new_state
}

/// An aggregate touching every collection: root, one admin, one personnel,
/// a shift, a pending log and a read direct message.
pub fn populated_state() -> AppData {
    let root: Actor = Actor::new(PersonnelId::new(SEED_ROOT_ID), Role::Root);
    let admin: Actor = Actor::new(PersonnelId::new("A1"), Role::UnitAdmin);
    let personnel: Actor = Actor::new(PersonnelId::new("P1"), Role::Personnel);

    let mut state: AppData = AppData::seeded(1);
    state = run(
        &state,
        Command::CreateAccount {
            personnel_id: PersonnelId::new("A1"),
            name: String::from("Admin One"),
            password: String::from("pw"),
            role: Role::UnitAdmin,
        },
        root,
        2,
    );
    state = run(
        &state,
        Command::CreateAccount {
            personnel_id: PersonnelId::new("P1"),
            name: String::from("Person One"),
            password: String::from("pw"),
            role: Role::Personnel,
        },
        admin.clone(),
        3,
    );
    state = run(
        &state,
        Command::AssignShift {
            personnel_id: PersonnelId::new("P1"),
            date: String::from("1403-01-01"),
            shift_type: ShiftType::Night,
        },
        admin.clone(),
        4,
    );
    state = run(
        &state,
        Command::SubmitActivityLog {
            personnel_id: PersonnelId::new("P1"),
            date: String::from("1403-01-01"),
            log_type: LogType::Reward,
            count: 3,
            reason: String::from("covered a night"),
            attachment: Some(String::from("data:image/png;base64,AAAA")),
        },
        admin.clone(),
        5,
    );
    state = run(
        &state,
        Command::SendMessage {
            to: Recipient::Personnel(PersonnelId::new("P1")),
            text: String::from("thanks"),
            attachment: None,
        },
        admin,
        6,
    );
    run(
        &state,
        Command::MarkRead {
            message_id: String::from("6"),
        },
        personnel,
        7,
    )
}

/// A backend whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingWrites {
    pub document: Option<String>,
}

impl KeyValueStore for FailingWrites {
    fn read(&mut self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.document.clone())
    }

    fn write(&mut self, _key: &str, _document: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::DatabaseError(String::from("disk full")))
    }
}
