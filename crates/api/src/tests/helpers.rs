// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftdesk::{SEED_ROOT_ID, SEED_ROOT_PASSWORD};
use shiftdesk_audit::Actor;
use shiftdesk_domain::{FixedClock, Role};
use shiftdesk_persistence::MemoryKeyValueStore;
use time::macros::datetime;

use crate::ShiftDesk;

pub type TestDesk = ShiftDesk<MemoryKeyValueStore, FixedClock>;

/// 2024-03-20 12:00 UTC, which is 1403-01-01 locally.
pub fn fixed_clock() -> FixedClock {
    FixedClock(datetime!(2024-03-20 12:00 UTC))
}

pub fn empty_desk() -> TestDesk {
    ShiftDesk::open(MemoryKeyValueStore::new(), fixed_clock()).unwrap()
}

pub fn root_login(desk: &TestDesk) -> Actor {
    desk.login(SEED_ROOT_ID, SEED_ROOT_PASSWORD, Role::Root)
        .unwrap()
}

/// A desk with unit admin `A1` and personnel `P1` and `P2`, all with
/// password `pw`. Returns the desk and the root, admin and `P1` actors.
pub fn staffed_desk() -> (TestDesk, Actor, Actor, Actor) {
    let mut desk: TestDesk = empty_desk();
    let root: Actor = root_login(&desk);
    desk.create_account(&root, "A1", "Admin One", "pw", Role::UnitAdmin)
        .unwrap();
    let admin: Actor = desk.login("A1", "pw", Role::UnitAdmin).unwrap();
    desk.create_account(&admin, "P1", "Person One", "pw", Role::Personnel)
        .unwrap();
    desk.create_account(&admin, "P2", "Person Two", "pw", Role::Personnel)
        .unwrap();
    let personnel: Actor = desk.login("P1", "pw", Role::Personnel).unwrap();
    (desk, root, admin, personnel)
}
