// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking query operations.
//!
//! The confirmed-seat count and the waiting-list head query are the read
//! half of the admission and promotion transactions; callers run them
//! inside the same transaction as the write they inform.

use crate::data_models::{BookingRow, ClassRow};
use crate::diesel_schema::{bookings, classes};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Looks up a booking by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))
}

/// Finds the booking a member holds for a class, in any status.
///
/// At most one row can exist per (member, class) pair.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_booking_for_member_and_class(
    conn: &mut SqliteConnection,
    member_id: i64,
    class_id: i64,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::member_id.eq(member_id))
        .filter(bookings::class_id.eq(class_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| {
            PersistenceError::QueryFailed(format!("find_booking_for_member_and_class: {e}"))
        })
}

/// Counts the confirmed bookings for a class.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_confirmed_bookings(
    conn: &mut SqliteConnection,
    class_id: i64,
) -> Result<i64, PersistenceError> {
    bookings::table
        .filter(bookings::class_id.eq(class_id))
        .filter(bookings::status.eq("confirmed"))
        .count()
        .get_result(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("count_confirmed_bookings: {e}")))
}

/// Finds the next waiting-list booking to promote for a class: the one
/// with the earliest creation timestamp, ties broken by booking ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_oldest_waiting_booking(
    conn: &mut SqliteConnection,
    class_id: i64,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::class_id.eq(class_id))
        .filter(bookings::status.eq("waiting_list"))
        .order((bookings::created_at.asc(), bookings::booking_id.asc()))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("find_oldest_waiting_booking: {e}")))
}

/// Lists a member's bookings for upcoming classes (not cancelled, not yet
/// started), newest booking first, joined with the class rows.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_member_upcoming_bookings(
    conn: &mut SqliteConnection,
    member_id: i64,
    now_str: &str,
) -> Result<Vec<(BookingRow, ClassRow)>, PersistenceError> {
    bookings::table
        .inner_join(classes::table)
        .filter(bookings::member_id.eq(member_id))
        .filter(classes::is_cancelled.eq(0))
        .filter(classes::starts_at.gt(now_str))
        .order(bookings::created_at.desc())
        .load::<(BookingRow, ClassRow)>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_member_upcoming_bookings: {e}")))
}
