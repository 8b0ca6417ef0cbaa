// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_persistence, seed_class, seed_member, seed_upcoming_class};
use crate::{CancelledBooking, Persistence, PersistenceError};
use chrono::{DateTime, Duration, Utc};
use wod_book::BookingError;
use wod_book_domain::{Booking, BookingStatus, BookingType};

#[test]
fn test_cancelling_confirmed_seat_promotes_waiting_member() {
    let mut persistence: Persistence = create_test_persistence();
    let member_a: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let member_b: i64 = seed_member(&mut persistence, "Bob", "bob@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 1);

    let booking_a: Booking = persistence
        .book_class(member_a, class_id, Utc::now())
        .unwrap();
    let booking_b: Booking = persistence
        .book_class(member_b, class_id, Utc::now())
        .unwrap();
    assert_eq!(booking_b.status, BookingStatus::WaitingList);

    let result: CancelledBooking = persistence
        .cancel_booking(booking_a.booking_id.unwrap(), member_a, Utc::now())
        .unwrap();

    let promoted = result.promoted.expect("Expected a promotion");
    assert_eq!(promoted.booking_id, booking_b.booking_id.unwrap());
    assert_eq!(promoted.member_id, member_b);
    assert_eq!(promoted.class_id, class_id);

    let cancelled: Booking = persistence
        .get_booking(booking_a.booking_id.unwrap())
        .unwrap()
        .unwrap();
    let confirmed: Booking = persistence
        .get_booking(booking_b.booking_id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
}

#[test]
fn test_promotion_is_fifo_by_creation_time() {
    let mut persistence: Persistence = create_test_persistence();
    let class_id: i64 = seed_upcoming_class(&mut persistence, 1);
    let base: DateTime<Utc> = Utc::now();

    let holder: i64 = seed_member(&mut persistence, "Holder", "holder@example.com");
    let first: i64 = seed_member(&mut persistence, "First", "first@example.com");
    let second: i64 = seed_member(&mut persistence, "Second", "second@example.com");

    let holder_booking: Booking = persistence.book_class(holder, class_id, base).unwrap();
    // Queue in reverse naming order so the test fails if promotion picks
    // by member or booking attributes instead of creation time
    let first_booking: Booking = persistence
        .book_class(first, class_id, base + Duration::seconds(1))
        .unwrap();
    let second_booking: Booking = persistence
        .book_class(second, class_id, base + Duration::seconds(2))
        .unwrap();
    assert_eq!(first_booking.status, BookingStatus::WaitingList);
    assert_eq!(second_booking.status, BookingStatus::WaitingList);

    let result: CancelledBooking = persistence
        .cancel_booking(holder_booking.booking_id.unwrap(), holder, Utc::now())
        .unwrap();

    let promoted = result.promoted.expect("Expected a promotion");
    assert_eq!(promoted.member_id, first);

    // Second member is still waiting
    let still_waiting: Booking = persistence
        .get_booking(second_booking.booking_id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(still_waiting.status, BookingStatus::WaitingList);
}

#[test]
fn test_fifo_tie_broken_by_booking_id() {
    let mut persistence: Persistence = create_test_persistence();
    let class_id: i64 = seed_upcoming_class(&mut persistence, 1);
    let base: DateTime<Utc> = Utc::now();

    let holder: i64 = seed_member(&mut persistence, "Holder", "holder@example.com");
    let first: i64 = seed_member(&mut persistence, "First", "first@example.com");
    let second: i64 = seed_member(&mut persistence, "Second", "second@example.com");

    let holder_booking: Booking = persistence.book_class(holder, class_id, base).unwrap();
    // Identical creation timestamps: the earlier insert wins
    persistence.book_class(first, class_id, base).unwrap();
    persistence.book_class(second, class_id, base).unwrap();

    let result: CancelledBooking = persistence
        .cancel_booking(holder_booking.booking_id.unwrap(), holder, Utc::now())
        .unwrap();

    assert_eq!(result.promoted.expect("Expected a promotion").member_id, first);
}

#[test]
fn test_exactly_one_promotion_per_cancellation() {
    let mut persistence: Persistence = create_test_persistence();
    let class_id: i64 = seed_upcoming_class(&mut persistence, 1);
    let base: DateTime<Utc> = Utc::now();

    let holder: i64 = seed_member(&mut persistence, "Holder", "holder@example.com");
    let first: i64 = seed_member(&mut persistence, "First", "first@example.com");
    let second: i64 = seed_member(&mut persistence, "Second", "second@example.com");

    let holder_booking: Booking = persistence.book_class(holder, class_id, base).unwrap();
    persistence
        .book_class(first, class_id, base + Duration::seconds(1))
        .unwrap();
    persistence
        .book_class(second, class_id, base + Duration::seconds(2))
        .unwrap();

    persistence
        .cancel_booking(holder_booking.booking_id.unwrap(), holder, Utc::now())
        .unwrap();

    // One seat freed, one member promoted; the class is full again
    assert_eq!(persistence.count_confirmed_bookings(class_id).unwrap(), 1);
}

#[test]
fn test_cancelling_waiting_list_booking_promotes_nobody() {
    let mut persistence: Persistence = create_test_persistence();
    let class_id: i64 = seed_upcoming_class(&mut persistence, 1);
    let base: DateTime<Utc> = Utc::now();

    let holder: i64 = seed_member(&mut persistence, "Holder", "holder@example.com");
    let first: i64 = seed_member(&mut persistence, "First", "first@example.com");
    let second: i64 = seed_member(&mut persistence, "Second", "second@example.com");

    persistence.book_class(holder, class_id, base).unwrap();
    let first_booking: Booking = persistence
        .book_class(first, class_id, base + Duration::seconds(1))
        .unwrap();
    let second_booking: Booking = persistence
        .book_class(second, class_id, base + Duration::seconds(2))
        .unwrap();

    let result: CancelledBooking = persistence
        .cancel_booking(first_booking.booking_id.unwrap(), first, Utc::now())
        .unwrap();

    assert_eq!(result.promoted, None);
    let still_waiting: Booking = persistence
        .get_booking(second_booking.booking_id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(still_waiting.status, BookingStatus::WaitingList);
}

#[test]
fn test_cancellation_without_waiting_list_promotes_nobody() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);

    let booking: Booking = persistence
        .book_class(member_id, class_id, Utc::now())
        .unwrap();
    let result: CancelledBooking = persistence
        .cancel_booking(booking.booking_id.unwrap(), member_id, Utc::now())
        .unwrap();

    assert_eq!(result.promoted, None);
}

#[test]
fn test_cancelling_someone_elses_booking_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_a: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let member_b: i64 = seed_member(&mut persistence, "Bob", "bob@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);

    let booking: Booking = persistence
        .book_class(member_a, class_id, Utc::now())
        .unwrap();
    let booking_id: i64 = booking.booking_id.unwrap();

    let result = persistence.cancel_booking(booking_id, member_b, Utc::now());

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RuleViolation(BookingError::NotOwner {
            booking_id,
            member_id: member_b
        })
    );

    // The booking is untouched
    let unchanged: Booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(unchanged.status, BookingStatus::Confirmed);
}

#[test]
fn test_drop_in_cancellation_inside_window_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let now: DateTime<Utc> = Utc::now();
    let class_id: i64 = seed_class(&mut persistence, 10, now + Duration::minutes(45));

    let booking: Booking = persistence.book_class(member_id, class_id, now).unwrap();
    let booking_id: i64 = booking.booking_id.unwrap();
    persistence
        .set_booking_payment(booking_id, BookingType::DropIn, Some(25.0))
        .unwrap();

    let result = persistence.cancel_booking(booking_id, member_id, now);

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RuleViolation(BookingError::NotRefundable { booking_id })
    );
}

#[test]
fn test_drop_in_cancellation_outside_window_succeeds() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let now: DateTime<Utc> = Utc::now();
    let class_id: i64 = seed_class(&mut persistence, 10, now + Duration::minutes(90));

    let booking: Booking = persistence.book_class(member_id, class_id, now).unwrap();
    let booking_id: i64 = booking.booking_id.unwrap();
    persistence
        .set_booking_payment(booking_id, BookingType::DropIn, Some(25.0))
        .unwrap();

    let result = persistence.cancel_booking(booking_id, member_id, now);

    assert!(result.is_ok());
    let cancelled: Booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
}

#[test]
fn test_cancelled_booking_stays_cancelled() {
    let mut persistence: Persistence = create_test_persistence();
    let member_a: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let member_b: i64 = seed_member(&mut persistence, "Bob", "bob@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 1);
    let base: DateTime<Utc> = Utc::now();

    let booking_a: Booking = persistence.book_class(member_a, class_id, base).unwrap();
    persistence
        .book_class(member_b, class_id, base + Duration::seconds(1))
        .unwrap();

    let booking_a_id: i64 = booking_a.booking_id.unwrap();
    persistence
        .cancel_booking(booking_a_id, member_a, Utc::now())
        .unwrap();

    // Repeat cancellation is a no-op and never frees another seat or
    // resurrects the booking
    let repeat: CancelledBooking = persistence
        .cancel_booking(booking_a_id, member_a, Utc::now())
        .unwrap();
    assert_eq!(repeat.promoted, None);

    let row: Booking = persistence.get_booking(booking_a_id).unwrap().unwrap();
    assert_eq!(row.status, BookingStatus::Cancelled);
}

#[test]
fn test_cancelling_unknown_booking_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");

    let result = persistence.cancel_booking(999, member_id, Utc::now());

    assert_eq!(result.unwrap_err(), PersistenceError::BookingNotFound(999));
}
