// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{PersonnelId, Recipient, User};

/// Validates the required fields of a new account.
///
/// This function checks that required fields are not empty.
/// It does NOT check for uniqueness (that requires context).
///
/// # Errors
///
/// Returns an error if:
/// - The personnel ID is empty
/// - The name is empty
pub fn validate_account_fields(personnel_id: &PersonnelId, name: &str) -> Result<(), DomainError> {
    validate_personnel_id(personnel_id)?;

    // Rule: name must not be empty
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a personnel identifier is not empty.
///
/// # Errors
///
/// Returns an error if the identifier is empty or whitespace.
pub fn validate_personnel_id(personnel_id: &PersonnelId) -> Result<(), DomainError> {
    if personnel_id.is_empty() {
        return Err(DomainError::EmptyPersonnelId);
    }
    Ok(())
}

/// Validates that no existing account already uses `personnel_id`.
///
/// Login resolves the first matching account, so a second account with the
/// same identifier would be unreachable.
///
/// # Errors
///
/// Returns an error if the identifier is already in use.
pub fn validate_personnel_id_unique(
    personnel_id: &PersonnelId,
    existing_users: &[User],
) -> Result<(), DomainError> {
    if existing_users
        .iter()
        .any(|user| &user.personnel_id == personnel_id)
    {
        return Err(DomainError::DuplicatePersonnelId(
            personnel_id.value().to_string(),
        ));
    }
    Ok(())
}

/// Validates a message before it is sent.
///
/// # Errors
///
/// Returns an error if:
/// - The recipient is an empty personnel ID
/// - Both the text and the attachment are empty
pub fn validate_message(
    to: &Recipient,
    text: &str,
    attachment: Option<&str>,
) -> Result<(), DomainError> {
    if let Recipient::Personnel(id) = to
        && id.is_empty()
    {
        return Err(DomainError::EmptyRecipient);
    }

    let has_attachment: bool = attachment.is_some_and(|value| !value.is_empty());
    if text.is_empty() && !has_attachment {
        return Err(DomainError::EmptyMessage);
    }
    Ok(())
}
