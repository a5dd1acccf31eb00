// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::queries::{
    approved_logs_for, find_login, inbox_for, month_view, pending_logs, roster_for,
    unread_count_for, users_with_role,
};
use crate::tests::helpers::{
    admin_actor, apply_ok, assign_shift_command, create_account_command, create_test_state,
    personnel_actor, root_actor, send_message_command, submit_log_command,
};
use crate::{AppData, Command, DayCell, RosterEntry, SEED_ROOT_ID, SEED_ROOT_PASSWORD};
use shiftdesk_domain::{
    DateKey, DomainError, LogStatus, LogType, Message, PersonnelId, Role, ShiftType, User,
};

fn state_with_messages() -> AppData {
    let state: AppData = create_test_state();
    let state: AppData = apply_ok(&state, send_message_command("P1", "to p1"), admin_actor());
    let state: AppData = apply_ok(&state, send_message_command("ALL", "everyone"), root_actor());
    apply_ok(&state, send_message_command("P2", "to p2"), admin_actor())
}

fn texts(messages: &[&Message]) -> Vec<String> {
    messages.iter().map(|message| message.text.clone()).collect()
}

#[test]
fn test_inbox_shows_direct_and_broadcast_messages() {
    let state: AppData = state_with_messages();

    let inbox: Vec<&Message> = inbox_for(&state, &PersonnelId::new("P1"));

    assert_eq!(texts(&inbox), vec!["to p1", "everyone"]);
}

#[test]
fn test_inbox_includes_sent_messages() {
    let state: AppData = state_with_messages();

    let inbox: Vec<&Message> = inbox_for(&state, &PersonnelId::new("A1"));

    assert_eq!(texts(&inbox), vec!["to p1", "everyone", "to p2"]);
}

#[test]
fn test_unread_counts_only_direct_messages() {
    let state: AppData = state_with_messages();

    assert_eq!(unread_count_for(&state, &PersonnelId::new("P1")), 1);
    assert_eq!(unread_count_for(&state, &PersonnelId::new("P2")), 1);
    assert_eq!(unread_count_for(&state, &PersonnelId::new("A1")), 0);
}

#[test]
fn test_mark_read_clears_unread_count() {
    let state: AppData = state_with_messages();
    let direct_id: String = inbox_for(&state, &PersonnelId::new("P1"))[0].id.clone();

    let state: AppData = apply_ok(
        &state,
        Command::MarkRead {
            message_id: direct_id,
        },
        personnel_actor("P1"),
    );

    assert_eq!(unread_count_for(&state, &PersonnelId::new("P1")), 0);
    assert_eq!(unread_count_for(&state, &PersonnelId::new("P2")), 1);
}

#[test]
fn test_reading_broadcast_does_not_change_unread_count() {
    let state: AppData = state_with_messages();
    let broadcast_id: String = inbox_for(&state, &PersonnelId::new("P1"))[1].id.clone();

    let state: AppData = apply_ok(
        &state,
        Command::MarkRead {
            message_id: broadcast_id.clone(),
        },
        personnel_actor("P1"),
    );

    assert_eq!(unread_count_for(&state, &PersonnelId::new("P1")), 1);
    assert!(
        state
            .message(&broadcast_id)
            .unwrap()
            .is_read_by(&PersonnelId::new("P1"))
    );
}

#[test]
fn test_pending_and_approved_logs() {
    let state: AppData = create_test_state();
    let state: AppData = apply_ok(
        &state,
        submit_log_command("P1", LogType::Reward, 4),
        admin_actor(),
    );
    let state: AppData = apply_ok(
        &state,
        submit_log_command("P1", LogType::Fault, -1),
        admin_actor(),
    );
    assert_eq!(pending_logs(&state).len(), 2);
    assert!(approved_logs_for(&state, &PersonnelId::new("P1")).is_empty());

    let first_id: String = pending_logs(&state)[0].id.clone();
    let state: AppData = apply_ok(
        &state,
        Command::ResolveActivityLog {
            log_id: first_id,
            decision: LogStatus::Approved,
        },
        root_actor(),
    );

    let approved = approved_logs_for(&state, &PersonnelId::new("P1"));
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].count, 4);
    assert_eq!(pending_logs(&state).len(), 1);
    assert!(approved_logs_for(&state, &PersonnelId::new("P2")).is_empty());
}

#[test]
fn test_users_with_role() {
    let state: AppData = create_test_state();

    assert_eq!(users_with_role(&state, Role::Root).len(), 1);
    assert_eq!(users_with_role(&state, Role::UnitAdmin).len(), 1);
    let personnel: Vec<&User> = users_with_role(&state, Role::Personnel);
    let ids: Vec<&str> = personnel
        .iter()
        .map(|user| user.personnel_id.value())
        .collect();
    assert_eq!(ids, vec!["P1", "P2"]);
}

#[test]
fn test_roster_lists_personnel_with_assignments() {
    let state: AppData = apply_ok(
        &create_test_state(),
        assign_shift_command("P2", "1403-03-15", ShiftType::Night),
        admin_actor(),
    );
    let date: DateKey = DateKey::new(1403, 3, 15).unwrap();

    let roster: Vec<RosterEntry<'_>> = roster_for(&state, &date);

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].user.personnel_id, PersonnelId::new("P1"));
    assert_eq!(roster[0].shift, None);
    assert_eq!(roster[1].user.personnel_id, PersonnelId::new("P2"));
    assert_eq!(roster[1].shift, Some(ShiftType::Night));
}

#[test]
fn test_month_view_marks_shifts_and_holidays() {
    let state: AppData = apply_ok(
        &create_test_state(),
        assign_shift_command("P1", "1403-01-02", ShiftType::Day),
        admin_actor(),
    );

    let cells: Vec<DayCell> = month_view(&state, &PersonnelId::new("P1"), 1403, 1).unwrap();

    assert_eq!(cells.len(), 31);
    assert_eq!(cells[0].date.to_string(), "1403-01-01");
    assert_eq!(cells[1].shift, Some(ShiftType::Day));
    assert_eq!(cells[2].shift, None);
    assert_eq!(cells[0].holiday, Some("نوروز"));
    assert_eq!(cells[12].holiday, Some("روز طبیعت"));
    assert_eq!(cells[20].holiday, None);
}

#[test]
fn test_month_view_respects_leap_years() {
    let state: AppData = create_test_state();

    let leap: Vec<DayCell> = month_view(&state, &PersonnelId::new("P1"), 1403, 12).unwrap();
    let common: Vec<DayCell> = month_view(&state, &PersonnelId::new("P1"), 1404, 12).unwrap();
    let autumn: Vec<DayCell> = month_view(&state, &PersonnelId::new("P1"), 1404, 8).unwrap();

    assert_eq!(leap.len(), 30);
    assert_eq!(common.len(), 29);
    assert_eq!(autumn.len(), 30);
}

#[test]
fn test_month_view_rejects_out_of_range_month() {
    let state: AppData = create_test_state();

    let result = month_view(&state, &PersonnelId::new("P1"), 1403, 13);

    assert!(matches!(result, Err(DomainError::InvalidDate { .. })));
}

#[test]
fn test_find_login_requires_matching_role() {
    let state: AppData = create_test_state();
    let root_id: PersonnelId = PersonnelId::new(SEED_ROOT_ID);

    assert!(find_login(&state, &root_id, SEED_ROOT_PASSWORD, Role::Root).is_some());
    assert!(find_login(&state, &root_id, SEED_ROOT_PASSWORD, Role::UnitAdmin).is_none());
    assert!(find_login(&state, &root_id, "wrong", Role::Root).is_none());
    assert!(find_login(&state, &PersonnelId::new("P1"), "pw", Role::Personnel).is_some());
}

#[test]
fn test_find_login_returns_first_match() {
    let first: User = User::new(
        PersonnelId::new("X"),
        String::from("First"),
        String::from("pw"),
        Role::Personnel,
        None,
    );
    let second: User = User::new(
        PersonnelId::new("X"),
        String::from("Second"),
        String::from("pw"),
        Role::Personnel,
        None,
    );
    let state: AppData = AppData::from_parts(vec![first, second], vec![], vec![], vec![]);

    let found: &User = find_login(&state, &PersonnelId::new("X"), "pw", Role::Personnel).unwrap();

    assert_eq!(found.name, "First");
}

#[test]
fn test_new_personnel_appear_in_roster() {
    let state: AppData = apply_ok(
        &create_test_state(),
        create_account_command("P3", Role::Personnel),
        admin_actor(),
    );
    let date: DateKey = DateKey::new(1403, 1, 1).unwrap();

    assert_eq!(roster_for(&state, &date).len(), 3);
}
