// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk::{AppData, SEED_ROOT_ID, SEED_ROOT_PASSWORD};
use shiftdesk_audit::Actor;
use shiftdesk_domain::{PersonnelId, Role, User};

use crate::tests::helpers::{empty_desk, staffed_desk};
use crate::{ApiError, authenticate};

#[test]
fn test_seed_root_can_log_in() {
    let desk = empty_desk();

    let actor: Actor = desk
        .login(SEED_ROOT_ID, SEED_ROOT_PASSWORD, Role::Root)
        .unwrap();

    assert_eq!(actor.personnel_id, PersonnelId::new(SEED_ROOT_ID));
    assert_eq!(actor.role, Role::Root);
}

#[test]
fn test_login_through_wrong_portal_fails() {
    let (desk, _, _, _) = staffed_desk();

    let result: Result<Actor, ApiError> = desk.login("A1", "pw", Role::Personnel);

    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let (desk, _, _, _) = staffed_desk();

    assert!(desk.login("P1", "nope", Role::Personnel).is_err());
}

#[test]
fn test_login_with_empty_id_fails() {
    let desk = empty_desk();

    let err: ApiError = desk.login("   ", SEED_ROOT_PASSWORD, Role::Root).unwrap_err();

    assert_eq!(
        err,
        ApiError::AuthenticationFailed {
            reason: String::from("Personnel ID cannot be empty"),
        }
    );
}

#[test]
fn test_authenticate_picks_first_matching_account() {
    let users: Vec<User> = vec![
        User::new(
            PersonnelId::new("X"),
            String::from("Admin X"),
            String::from("pw"),
            Role::UnitAdmin,
            None,
        ),
        User::new(
            PersonnelId::new("X"),
            String::from("Person X"),
            String::from("pw"),
            Role::Personnel,
            None,
        ),
    ];
    let data: AppData = AppData::from_parts(users, vec![], vec![], vec![]);

    let admin: Actor = authenticate(&data, "X", "pw", Role::UnitAdmin).unwrap();
    let personnel: Actor = authenticate(&data, "X", "pw", Role::Personnel).unwrap();

    assert_eq!(admin.role, Role::UnitAdmin);
    assert_eq!(personnel.role, Role::Personnel);
}
