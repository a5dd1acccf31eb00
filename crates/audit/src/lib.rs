// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use shiftdesk_domain::{PersonnelId, Role};

/// Represents the user performing an action.
///
/// An actor is an authenticated account together with the role it logged
/// in under. Every command is authorized against the actor's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The personnel identifier of the acting account.
    pub personnel_id: PersonnelId,
    /// The role the actor holds.
    pub role: Role,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `personnel_id` - The acting account
    /// * `role` - The role the account holds
    #[must_use]
    pub const fn new(personnel_id: PersonnelId, role: Role) -> Self {
        Self { personnel_id, role }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.personnel_id, self.role)
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AssignShift`", "`ResolveActivityLog`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact summary of the aggregate at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a committed command.
///
/// Every successful state change produces exactly one audit event capturing:
/// - Who performed the action (actor)
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
/// - When it happened (timestamp, Unix milliseconds)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// When the change was applied.
    pub timestamp: i64,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        timestamp: i64,
    ) -> Self {
        Self {
            actor,
            action,
            before,
            after,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(PersonnelId::new("A1"), Role::UnitAdmin);

        assert_eq!(actor.personnel_id.value(), "A1");
        assert_eq!(actor.role, Role::UnitAdmin);
    }

    #[test]
    fn test_actor_display() {
        let actor: Actor = Actor::new(PersonnelId::new("123456789"), Role::Root);

        assert_eq!(actor.to_string(), "123456789 (SUPER_ADMIN)");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("AssignShift"),
            Some(String::from("P1 on 1403-01-01")),
        );

        assert_eq!(action.name, "AssignShift");
        assert_eq!(action.details, Some(String::from("P1 on 1403-01-01")));
    }

    #[test]
    fn test_audit_event_creation_requires_all_fields() {
        let actor: Actor = Actor::new(PersonnelId::new("A1"), Role::UnitAdmin);
        let action: Action = Action::new(String::from("SendMessage"), None);
        let before: StateSnapshot = StateSnapshot::new(String::from("messages=0"));
        let after: StateSnapshot = StateSnapshot::new(String::from("messages=1"));

        let event: AuditEvent = AuditEvent::new(
            actor.clone(),
            action.clone(),
            before.clone(),
            after.clone(),
            42,
        );

        assert_eq!(event.actor, actor);
        assert_eq!(event.action, action);
        assert_eq!(event.before, before);
        assert_eq!(event.after, after);
        assert_eq!(event.timestamp, 42);
    }

    #[test]
    fn test_actor_equality() {
        let actor1: Actor = Actor::new(PersonnelId::new("A1"), Role::UnitAdmin);
        let actor2: Actor = Actor::new(PersonnelId::new("A1"), Role::UnitAdmin);
        let actor3: Actor = Actor::new(PersonnelId::new("A1"), Role::Personnel);

        assert_eq!(actor1, actor2);
        assert_ne!(actor1, actor3);
    }
}
