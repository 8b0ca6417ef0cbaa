// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member mutation operations.

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewMember;
use crate::diesel_schema::members;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Inserts a new member and returns the generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate email).
pub fn insert_member(
    conn: &mut SqliteConnection,
    record: &NewMember,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(members::table)
        .values(record)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
