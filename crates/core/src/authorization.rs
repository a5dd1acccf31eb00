// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-based authorization for commands.
//!
//! Every check matches the actor's role exhaustively, so adding a role
//! forces each rule here to be revisited.

use crate::command::Command;
use crate::error::CoreError;
use shiftdesk_audit::Actor;
use shiftdesk_domain::Role;

fn unauthorized(command: &Command, actor: &Actor) -> CoreError {
    CoreError::Unauthorized {
        action: command.name().to_string(),
        role: actor.role,
    }
}

/// Checks whether `actor` may perform `command`.
///
/// | Command | Root | Unit admin | Personnel |
/// |---|---|---|---|
/// | `CreateAccount` | unit admins | personnel | no |
/// | `AssignShift`, `ApplyShiftPattern` | yes | yes | no |
/// | `SubmitActivityLog` | no | yes | no |
/// | `ResolveActivityLog` | yes | no | no |
/// | `SendMessage` | yes | yes | no |
/// | `MarkRead` | yes | yes | yes |
///
/// Personnel only receive messages: the personnel portal has never offered a
/// compose form, so `SendMessage` stays limited to root and unit admins.
///
/// # Errors
///
/// Returns `CoreError::Unauthorized` if the actor's role does not permit the command.
pub fn authorize(actor: &Actor, command: &Command) -> Result<(), CoreError> {
    let allowed: bool = match command {
        Command::CreateAccount { role, .. } => match actor.role {
            Role::Root | Role::UnitAdmin => actor.role.can_create(*role),
            Role::Personnel => false,
        },
        Command::AssignShift { .. } | Command::ApplyShiftPattern { .. } => match actor.role {
            Role::Root | Role::UnitAdmin => true,
            Role::Personnel => false,
        },
        Command::SubmitActivityLog { .. } => match actor.role {
            Role::UnitAdmin => true,
            Role::Root | Role::Personnel => false,
        },
        Command::ResolveActivityLog { .. } => match actor.role {
            Role::Root => true,
            Role::UnitAdmin | Role::Personnel => false,
        },
        Command::SendMessage { .. } => match actor.role {
            Role::Root | Role::UnitAdmin => true,
            Role::Personnel => false,
        },
        Command::MarkRead { .. } => match actor.role {
            Role::Root | Role::UnitAdmin | Role::Personnel => true,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(unauthorized(command, actor))
    }
}
