// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Refund-eligibility rule for booking cancellation.
//!
//! Paid bookings (drop-in, day pass) lock in one hour before class start:
//! exactly at or inside the cutoff the cancellation is rejected.
//! Membership bookings carry no time restriction.

use crate::types::Booking;
use chrono::{DateTime, Duration, Utc};

/// Minutes before class start after which a paid booking is no longer
/// refundable.
pub const REFUND_CUTOFF_MINUTES: i64 = 60;

/// Evaluates whether `booking` may be cancelled at `now` for a class
/// starting at `class_starts_at`.
#[must_use]
pub fn is_refundable_now(
    booking: &Booking,
    class_starts_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    if !booking.is_refundable {
        return false;
    }

    if booking.booking_type.is_paid() {
        return class_starts_at - now > Duration::minutes(REFUND_CUTOFF_MINUTES);
    }

    true
}
