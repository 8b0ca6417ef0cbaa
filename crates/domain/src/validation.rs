// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation for classes and members.
//!
//! Capacity and duration invariants are enforced here, at creation time,
//! never in the capacity tracker.

use crate::error::DomainError;

/// Validates class fields at creation time.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The duration is below one minute
/// - The capacity is below one participant
pub fn validate_class_fields(
    name: &str,
    duration_minutes: i32,
    max_participants: i32,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidClassName(String::from(
            "name must not be empty",
        )));
    }

    if duration_minutes < 1 {
        return Err(DomainError::InvalidDuration {
            minutes: duration_minutes,
        });
    }

    if max_participants < 1 {
        return Err(DomainError::InvalidCapacity {
            capacity: max_participants,
        });
    }

    Ok(())
}

/// Validates member fields at registration time.
///
/// The email check is a shape check only (non-empty local and domain
/// parts); deliverability is not this layer's concern.
///
/// # Errors
///
/// Returns an error if the name is empty or the email is malformed.
pub fn validate_member_fields(name: &str, email: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidMemberName(String::from(
            "name must not be empty",
        )));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::InvalidEmail(format!(
            "'{email}' is missing an '@'"
        )));
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(DomainError::InvalidEmail(format!(
            "'{email}' is not a valid address"
        )));
    }

    Ok(())
}
