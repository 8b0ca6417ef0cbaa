// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member query operations.

use crate::data_models::MemberRow;
use crate::diesel_schema::members;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Looks up a member by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_member(
    conn: &mut SqliteConnection,
    member_id: i64,
) -> Result<Option<MemberRow>, PersistenceError> {
    members::table
        .filter(members::member_id.eq(member_id))
        .first::<MemberRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_member: {e}")))
}

/// Looks up a member by email address.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_member_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<MemberRow>, PersistenceError> {
    members::table
        .filter(members::email.eq(email))
        .first::<MemberRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_member_by_email: {e}")))
}
