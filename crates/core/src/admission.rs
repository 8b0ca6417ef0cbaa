// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::BookingError;
use chrono::{DateTime, Utc};
use wod_book_domain::{Booking, BookingStatus, BookingType, ClassSession, is_full};

/// Decides whether a booking request is admitted and builds the booking
/// record to persist.
///
/// The rejection order is part of the user-facing contract:
/// duplicate check first, then the start-time check, then the
/// cancellation check. A request that passes all three is classified as
/// `Confirmed` while a seat remains and `WaitingList` otherwise.
///
/// `confirmed` is the count of confirmed bookings for this class as read
/// by the caller; reading it and persisting the returned booking must
/// happen in one transaction.
///
/// # Errors
///
/// Returns an error if:
/// - `existing` holds a booking for this (member, class) pair, in any status
/// - The class has already started
/// - The class has been cancelled
pub fn admit_booking(
    member_id: i64,
    class: &ClassSession,
    existing: Option<&Booking>,
    confirmed: usize,
    now: DateTime<Utc>,
) -> Result<Booking, BookingError> {
    let class_id: i64 = class.class_id.ok_or_else(|| {
        BookingError::DomainViolation(wod_book_domain::DomainError::MissingIdentifier {
            entity: "class",
        })
    })?;

    // A cancelled booking still occupies the (member, class) pair, so
    // re-booking a previously cancelled class is rejected here too.
    if existing.is_some() {
        return Err(BookingError::DuplicateBooking {
            member_id,
            class_id,
        });
    }

    if class.starts_at <= now {
        return Err(BookingError::ClassAlreadyStarted { class_id });
    }

    if class.is_cancelled {
        return Err(BookingError::ClassCancelled { class_id });
    }

    let status: BookingStatus = if is_full(class, confirmed) {
        BookingStatus::WaitingList
    } else {
        BookingStatus::Confirmed
    };

    // All bookings go through the membership path; paid types are set by
    // the payment surface, which is outside this core.
    Ok(Booking {
        booking_id: None,
        member_id,
        class_id,
        status,
        booking_type: BookingType::Membership,
        amount_paid: None,
        is_refundable: true,
        created_at: now,
    })
}
