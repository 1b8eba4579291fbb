//! Normalization and validation rules shared by every write path.
//!
//! Names are trimmed; emails are trimmed and lower-cased. Uniqueness of
//! emails is always checked against the normalized form.

use crate::error::{Result, RosterError};
use crate::types::{User, UserId};

/// Which write path a value arrives on; only the blank-field wording differs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Update,
}

/// Trim a name, rejecting blank values
pub fn normalize_name(name: &str, kind: WriteKind) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::validation(match kind {
            WriteKind::Create => "Name is required and cannot be empty",
            WriteKind::Update => "Name cannot be empty",
        }));
    }
    Ok(trimmed.to_string())
}

/// Trim and lower-case an email, rejecting blank values and values without `@`
pub fn normalize_email(email: &str, kind: WriteKind) -> Result<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(RosterError::validation(match kind {
            WriteKind::Create => "Email is required and cannot be empty",
            WriteKind::Update => "Email cannot be empty",
        }));
    }
    if !trimmed.contains('@') {
        return Err(RosterError::validation(
            "Email must be a valid email address",
        ));
    }
    Ok(trimmed.to_lowercase())
}

/// Fail if any user other than `except` already holds `email`.
///
/// `email` must already be normalized.
pub fn ensure_email_available(users: &[User], email: &str, except: Option<&UserId>) -> Result<()> {
    let taken = users
        .iter()
        .filter(|u| Some(&u.id) != except)
        .any(|u| u.email.eq_ignore_ascii_case(email));

    if taken {
        return Err(RosterError::validation(
            "User with this email already exists",
        ));
    }
    Ok(())
}
