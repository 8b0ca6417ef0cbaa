// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::BookingError;
use chrono::{DateTime, Utc};
use wod_book_domain::{Booking, BookingStatus, ClassSession, is_refundable_now};

/// The outcome of a permitted cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancellationOutcome {
    /// True when the cancelled booking held a confirmed seat. The caller
    /// must then promote the oldest waiting-list booking for the class,
    /// if one exists, within the same transaction.
    pub frees_seat: bool,
    /// False when the booking was already cancelled and the operation is
    /// a no-op.
    pub transitioned: bool,
}

/// Decides whether a cancellation request is permitted.
///
/// Checks ownership first, then the refund-eligibility rule, then the
/// status transition. Cancelling an already-cancelled booking is an
/// idempotent no-op that frees no seat.
///
/// Exactly one promotion follows a permitted cancellation of a confirmed
/// seat; cancelling a waiting-list booking frees nothing.
///
/// # Errors
///
/// Returns an error if:
/// - The acting member does not own the booking
/// - The refund-eligibility rule fails
pub fn cancel_booking(
    booking: &Booking,
    acting_member_id: i64,
    class: &ClassSession,
    now: DateTime<Utc>,
) -> Result<CancellationOutcome, BookingError> {
    let booking_id: i64 = booking.booking_id.unwrap_or(0);

    if booking.member_id != acting_member_id {
        return Err(BookingError::NotOwner {
            booking_id,
            member_id: acting_member_id,
        });
    }

    if !is_refundable_now(booking, class.starts_at, now) {
        return Err(BookingError::NotRefundable { booking_id });
    }

    if booking.status == BookingStatus::Cancelled {
        return Ok(CancellationOutcome {
            frees_seat: false,
            transitioned: false,
        });
    }

    booking.status.validate_transition(BookingStatus::Cancelled)?;

    Ok(CancellationOutcome {
        frees_seat: booking.status == BookingStatus::Confirmed,
        transitioned: true,
    })
}
