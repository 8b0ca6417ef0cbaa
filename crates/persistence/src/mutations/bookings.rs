// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutation operations: the admission and cancellation
//! transactions.
//!
//! Each operation runs as one immediate transaction so the capacity (or
//! waiting-list) read and the status write form a single serializable
//! unit. The UNIQUE (member_id, class_id) constraint backs the duplicate
//! check as a hard storage guarantee; a concurrent insert that slips past
//! the in-transaction check still surfaces as `DuplicateBooking`.

use crate::data_models::{BookingRow, ClassRow, NewBooking};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::queries;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::SqliteConnection;
use tracing::debug;
use wod_book::{BookingError, CancellationOutcome};
use wod_book_domain::{Booking, BookingStatus, ClassSession};

/// A promotion performed while cancelling a confirmed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotedBooking {
    /// The promoted booking.
    pub booking_id: i64,
    /// The member now holding the freed seat.
    pub member_id: i64,
    /// The class the seat belongs to.
    pub class_id: i64,
}

/// The result of a permitted cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelledBooking {
    /// The cancelled booking.
    pub booking_id: i64,
    /// The promotion triggered by this cancellation, if any.
    pub promoted: Option<PromotedBooking>,
}

/// Books a class for a member.
///
/// Runs the full admission decision inside one immediate transaction:
/// duplicate lookup, class checks, confirmed-seat count, and the insert.
///
/// # Errors
///
/// Returns `RuleViolation` when the admission rules reject the request,
/// `MemberNotFound`/`ClassNotFound` for missing rows, or a database error.
pub fn book_class(
    conn: &mut SqliteConnection,
    member_id: i64,
    class_id: i64,
    now: DateTime<Utc>,
) -> Result<Booking, PersistenceError> {
    conn.immediate_transaction(|conn| {
        if queries::members::get_member(conn, member_id)?.is_none() {
            return Err(PersistenceError::MemberNotFound(member_id));
        }

        let class_row: ClassRow = queries::classes::get_class(conn, class_id)?
            .ok_or(PersistenceError::ClassNotFound(class_id))?;
        let class: ClassSession = class_row.into_domain()?;

        let existing: Option<Booking> =
            queries::bookings::find_booking_for_member_and_class(conn, member_id, class_id)?
                .map(BookingRow::into_domain)
                .transpose()?;

        let confirmed: i64 = queries::bookings::count_confirmed_bookings(conn, class_id)?;
        let confirmed: usize = usize::try_from(confirmed).unwrap_or(0);

        let booking: Booking =
            wod_book::admit_booking(member_id, &class, existing.as_ref(), confirmed, now)
                .map_err(PersistenceError::RuleViolation)?;

        let record: NewBooking = NewBooking::from_domain(&booking);
        let inserted = diesel::insert_into(bookings::table)
            .values(&record)
            .execute(conn);

        // The UNIQUE constraint closes the race a concurrent writer could
        // open between the duplicate lookup and this insert.
        if let Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) =
            &inserted
        {
            return Err(PersistenceError::RuleViolation(
                BookingError::DuplicateBooking {
                    member_id,
                    class_id,
                },
            ));
        }
        inserted?;

        let booking_id: i64 = crate::backend::sqlite::get_last_insert_rowid(conn)?;
        debug!(
            booking_id,
            member_id,
            class_id,
            status = booking.status.as_str(),
            "Booking created"
        );

        Ok(Booking {
            booking_id: Some(booking_id),
            ..booking
        })
    })
}

/// Records payment details on a booking (type and amount).
///
/// Called by the payment surface after capture; the admission path
/// itself only creates membership bookings.
///
/// # Errors
///
/// Returns `BookingNotFound` if no row matched.
pub fn set_booking_payment(
    conn: &mut SqliteConnection,
    booking_id: i64,
    booking_type: &str,
    amount_paid: Option<f64>,
) -> Result<(), PersistenceError> {
    let updated: usize =
        diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
            .set((
                bookings::booking_type.eq(booking_type),
                bookings::amount_paid.eq(amount_paid),
            ))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::BookingNotFound(booking_id));
    }

    Ok(())
}

/// Cancels a booking on behalf of a member, promoting the oldest
/// waiting-list booking when a confirmed seat is freed.
///
/// The cancellation decision, the status flip, and the promotion all run
/// inside one immediate transaction; two concurrent cancellations for the
/// same class cannot promote the same waiting-list entry twice.
///
/// # Errors
///
/// Returns `RuleViolation` when the ownership or refund rules reject the
/// request, `BookingNotFound`/`ClassNotFound` for missing rows, or a
/// database error.
pub fn cancel_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    acting_member_id: i64,
    now: DateTime<Utc>,
) -> Result<CancelledBooking, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let booking_row: BookingRow = queries::bookings::get_booking(conn, booking_id)?
            .ok_or(PersistenceError::BookingNotFound(booking_id))?;
        let booking: Booking = booking_row.into_domain()?;

        let class_row: ClassRow = queries::classes::get_class(conn, booking.class_id)?
            .ok_or(PersistenceError::ClassNotFound(booking.class_id))?;
        let class: ClassSession = class_row.into_domain()?;

        let outcome: CancellationOutcome =
            wod_book::cancel_booking(&booking, acting_member_id, &class, now)
                .map_err(PersistenceError::RuleViolation)?;

        if outcome.transitioned {
            diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
                .set(bookings::status.eq(BookingStatus::Cancelled.as_str()))
                .execute(conn)?;
        }

        // One promotion at most; the freed seat goes to the head of the
        // waiting list and capacity is not re-checked beyond it.
        let mut promoted: Option<PromotedBooking> = None;
        if outcome.frees_seat {
            if let Some(next) =
                queries::bookings::find_oldest_waiting_booking(conn, booking.class_id)?
            {
                diesel::update(
                    bookings::table.filter(bookings::booking_id.eq(next.booking_id)),
                )
                .set(bookings::status.eq(BookingStatus::Confirmed.as_str()))
                .execute(conn)?;

                debug!(
                    booking_id = next.booking_id,
                    member_id = next.member_id,
                    class_id = next.class_id,
                    "Promoted waiting-list booking"
                );

                promoted = Some(PromotedBooking {
                    booking_id: next.booking_id,
                    member_id: next.member_id,
                    class_id: next.class_id,
                });
            }
        }

        debug!(booking_id, acting_member_id, "Booking cancelled");

        Ok(CancelledBooking {
            booking_id,
            promoted,
        })
    })
}
