// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class query operations.

use crate::data_models::ClassRow;
use crate::diesel_schema::classes;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Looks up a class by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_class(
    conn: &mut SqliteConnection,
    class_id: i64,
) -> Result<Option<ClassRow>, PersistenceError> {
    classes::table
        .filter(classes::class_id.eq(class_id))
        .first::<ClassRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_class: {e}")))
}

/// Lists upcoming classes: not cancelled, starting after `now_str`,
/// ordered by start time.
///
/// Timestamps are stored as fixed-precision RFC 3339 text, so the string
/// comparison is chronological.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_upcoming_classes(
    conn: &mut SqliteConnection,
    now_str: &str,
    limit: i64,
) -> Result<Vec<ClassRow>, PersistenceError> {
    classes::table
        .filter(classes::is_cancelled.eq(0))
        .filter(classes::starts_at.gt(now_str))
        .order(classes::starts_at.asc())
        .limit(limit)
        .load::<ClassRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_upcoming_classes: {e}")))
}
