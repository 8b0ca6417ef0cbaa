// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_booking, create_test_class, create_upcoming_class};
use crate::{BookingError, admit_booking};
use chrono::{Duration, Utc};
use wod_book_domain::{Booking, BookingStatus, BookingType};

#[test]
fn test_admission_with_capacity_confirms() {
    let class = create_upcoming_class(10);
    let now = Utc::now();

    let result: Result<Booking, BookingError> = admit_booking(1, &class, None, 3, now);

    let booking: Booking = result.unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.member_id, 1);
    assert_eq!(booking.class_id, 10);
    assert_eq!(booking.booking_type, BookingType::Membership);
    assert_eq!(booking.amount_paid, None);
    assert!(booking.is_refundable);
    assert_eq!(booking.created_at, now);
}

#[test]
fn test_admission_when_full_queues() {
    let class = create_upcoming_class(1);
    let now = Utc::now();

    let result: Result<Booking, BookingError> = admit_booking(2, &class, None, 1, now);

    let booking: Booking = result.unwrap();
    assert_eq!(booking.status, BookingStatus::WaitingList);
}

#[test]
fn test_last_seat_confirms() {
    let class = create_upcoming_class(3);
    let now = Utc::now();

    let result: Result<Booking, BookingError> = admit_booking(2, &class, None, 2, now);

    assert_eq!(result.unwrap().status, BookingStatus::Confirmed);
}

#[test]
fn test_duplicate_booking_rejected() {
    let class = create_upcoming_class(10);
    let existing: Booking =
        create_test_booking(5, 1, BookingStatus::Confirmed, BookingType::Membership);

    let result = admit_booking(1, &class, Some(&existing), 1, Utc::now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::DuplicateBooking {
            member_id: 1,
            class_id: 10
        }
    );
}

#[test]
fn test_cancelled_booking_still_blocks_rebooking() {
    let class = create_upcoming_class(10);
    let existing: Booking =
        create_test_booking(5, 1, BookingStatus::Cancelled, BookingType::Membership);

    let result = admit_booking(1, &class, Some(&existing), 0, Utc::now());

    assert!(matches!(
        result,
        Err(BookingError::DuplicateBooking { .. })
    ));
}

#[test]
fn test_started_class_rejected() {
    let now = Utc::now();
    let class = create_test_class(10, now - Duration::minutes(30));

    let result = admit_booking(1, &class, None, 0, now);

    assert_eq!(
        result.unwrap_err(),
        BookingError::ClassAlreadyStarted { class_id: 10 }
    );
}

#[test]
fn test_class_starting_now_rejected() {
    let now = Utc::now();
    let class = create_test_class(10, now);

    let result = admit_booking(1, &class, None, 0, now);

    assert!(matches!(
        result,
        Err(BookingError::ClassAlreadyStarted { .. })
    ));
}

#[test]
fn test_cancelled_class_rejected() {
    let mut class = create_upcoming_class(10);
    class.is_cancelled = true;

    let result = admit_booking(1, &class, None, 0, Utc::now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::ClassCancelled { class_id: 10 }
    );
}

#[test]
fn test_duplicate_check_runs_before_start_time_check() {
    // A member re-booking a started class must hear "duplicate", not
    // "already started"
    let now = Utc::now();
    let class = create_test_class(10, now - Duration::minutes(30));
    let existing: Booking =
        create_test_booking(5, 1, BookingStatus::Confirmed, BookingType::Membership);

    let result = admit_booking(1, &class, Some(&existing), 1, now);

    assert!(matches!(
        result,
        Err(BookingError::DuplicateBooking { .. })
    ));
}

#[test]
fn test_start_time_check_runs_before_cancellation_check() {
    let now = Utc::now();
    let mut class = create_test_class(10, now - Duration::minutes(30));
    class.is_cancelled = true;

    let result = admit_booking(1, &class, None, 0, now);

    assert!(matches!(
        result,
        Err(BookingError::ClassAlreadyStarted { .. })
    ));
}
