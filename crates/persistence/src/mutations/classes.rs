// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class mutation operations.

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewClass;
use crate::diesel_schema::classes;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Inserts a new class and returns the generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_class(
    conn: &mut SqliteConnection,
    record: &NewClass,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(classes::table)
        .values(record)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Marks a class as cancelled.
///
/// Existing bookings are left untouched; the studio's cancellation of a
/// class does not cascade to its bookings.
///
/// # Errors
///
/// Returns `ClassNotFound` if no row matched.
pub fn set_class_cancelled(
    conn: &mut SqliteConnection,
    class_id: i64,
) -> Result<(), PersistenceError> {
    let updated: usize =
        diesel::update(classes::table.filter(classes::class_id.eq(class_id)))
            .set(classes::is_cancelled.eq(1))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::ClassNotFound(class_id));
    }

    Ok(())
}
