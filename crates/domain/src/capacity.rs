// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class capacity computation.
//!
//! Pure read-side arithmetic over a class and its bookings. The confirmed
//! count is taken as a parameter where the caller has already counted at
//! the storage layer; `confirmed_count` covers in-memory booking sets.

use crate::booking_status::BookingStatus;
use crate::types::{Booking, ClassSession};
use chrono::{DateTime, Utc};

/// Counts the bookings in `bookings` holding a confirmed seat.
#[must_use]
pub fn confirmed_count(bookings: &[Booking]) -> usize {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .count()
}

/// Returns the number of seats still available, never below zero.
#[must_use]
pub fn available_spots(class: &ClassSession, confirmed: usize) -> usize {
    let capacity = usize::try_from(class.max_participants).unwrap_or(0);
    capacity.saturating_sub(confirmed)
}

/// Returns true if every seat in the class is taken by a confirmed booking.
#[must_use]
pub fn is_full(class: &ClassSession, confirmed: usize) -> bool {
    let capacity = usize::try_from(class.max_participants).unwrap_or(0);
    confirmed >= capacity
}

/// Returns true if the class can currently accept booking requests.
#[must_use]
pub fn is_bookable(class: &ClassSession, now: DateTime<Utc>) -> bool {
    class.is_bookable(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking_type::BookingType;
    use chrono::{Duration, Utc};

    fn test_class(max_participants: i32) -> ClassSession {
        ClassSession {
            class_id: Some(1),
            name: String::from("Morning WOD"),
            description: None,
            starts_at: Utc::now() + Duration::hours(2),
            duration_minutes: 60,
            max_participants,
            is_cancelled: false,
        }
    }

    fn test_booking(booking_id: i64, status: BookingStatus) -> Booking {
        Booking {
            booking_id: Some(booking_id),
            member_id: booking_id,
            class_id: 1,
            status,
            booking_type: BookingType::Membership,
            amount_paid: None,
            is_refundable: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_confirmed_count_ignores_other_statuses() {
        let bookings = vec![
            test_booking(1, BookingStatus::Confirmed),
            test_booking(2, BookingStatus::WaitingList),
            test_booking(3, BookingStatus::Cancelled),
            test_booking(4, BookingStatus::Confirmed),
        ];

        assert_eq!(confirmed_count(&bookings), 2);
    }

    #[test]
    fn test_available_spots_never_negative() {
        let class = test_class(2);

        assert_eq!(available_spots(&class, 0), 2);
        assert_eq!(available_spots(&class, 2), 0);
        // Over-capacity state (should not happen) still clamps to zero
        assert_eq!(available_spots(&class, 5), 0);
    }

    #[test]
    fn test_is_full_at_capacity() {
        let class = test_class(3);

        assert!(!is_full(&class, 2));
        assert!(is_full(&class, 3));
        assert!(is_full(&class, 4));
    }

    #[test]
    fn test_cancelled_class_is_not_bookable() {
        let mut class = test_class(10);
        class.is_cancelled = true;

        assert!(!is_bookable(&class, Utc::now()));
    }

    #[test]
    fn test_started_class_is_not_bookable() {
        let mut class = test_class(10);
        class.starts_at = Utc::now() - Duration::minutes(30);

        assert!(!is_bookable(&class, Utc::now()));
    }

    #[test]
    fn test_upcoming_class_is_bookable() {
        let class = test_class(10);

        assert!(is_bookable(&class, Utc::now()));
    }
}
