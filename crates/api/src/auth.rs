// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login.
//!
//! There are three portals, one per role. A login succeeds only through the
//! portal matching the account's role; the resulting [`Actor`] carries that
//! role into every command.

use shiftdesk::AppData;
use shiftdesk::queries::find_login;
use shiftdesk_audit::Actor;
use shiftdesk_domain::{PersonnelId, Role, User};
use tracing::{info, warn};

use crate::error::ApiError;

/// Authenticates `personnel_id` and `password` through the `portal` role.
///
/// The first account whose identifier, password and role all match wins.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the identifier is empty or no
/// account matches.
pub fn authenticate(
    data: &AppData,
    personnel_id: &str,
    password: &str,
    portal: Role,
) -> Result<Actor, ApiError> {
    let personnel_id: PersonnelId = PersonnelId::new(personnel_id.trim());
    if personnel_id.is_empty() {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("Personnel ID cannot be empty"),
        });
    }

    let Some(user) = find_login(data, &personnel_id, password, portal) else {
        warn!(%personnel_id, %portal, "Rejected login");
        return Err(ApiError::AuthenticationFailed {
            reason: format!("No {portal} account matches these credentials"),
        });
    };

    info!(%personnel_id, %portal, "Login succeeded");
    Ok(actor_for(user))
}

/// The audit actor an account acts as.
#[must_use]
pub fn actor_for(user: &User) -> Actor {
    Actor::new(user.personnel_id.clone(), user.role)
}
