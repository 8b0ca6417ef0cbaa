// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_persistence, seed_class, seed_member, seed_upcoming_class,
};
use crate::{Persistence, PersistenceError};
use chrono::{Duration, Utc};
use wod_book::BookingError;
use wod_book_domain::{Booking, BookingStatus, BookingType};

#[test]
fn test_booking_with_capacity_is_confirmed() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);

    let booking: Booking = persistence
        .book_class(member_id, class_id, Utc::now())
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.booking_type, BookingType::Membership);
    assert_eq!(booking.amount_paid, None);
    assert!(booking.is_refundable);
    assert!(booking.booking_id.is_some());
}

#[test]
fn test_full_class_queues_second_member() {
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

    assert_eq!(booking_a.status, BookingStatus::Confirmed);
    assert_eq!(booking_b.status, BookingStatus::WaitingList);
}

#[test]
fn test_confirmed_count_never_exceeds_capacity() {
    let mut persistence: Persistence = create_test_persistence();
    let class_id: i64 = seed_upcoming_class(&mut persistence, 2);

    for i in 0..5 {
        let member_id: i64 = seed_member(
            &mut persistence,
            &format!("Member {i}"),
            &format!("member{i}@example.com"),
        );
        persistence
            .book_class(member_id, class_id, Utc::now())
            .unwrap();
    }

    assert_eq!(persistence.count_confirmed_bookings(class_id).unwrap(), 2);
}

#[test]
fn test_double_booking_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);

    persistence
        .book_class(member_id, class_id, Utc::now())
        .unwrap();
    let result = persistence.book_class(member_id, class_id, Utc::now());

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RuleViolation(BookingError::DuplicateBooking {
            member_id,
            class_id
        })
    );
}

#[test]
fn test_rebooking_after_cancellation_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);

    let booking: Booking = persistence
        .book_class(member_id, class_id, Utc::now())
        .unwrap();
    persistence
        .cancel_booking(booking.booking_id.unwrap(), member_id, Utc::now())
        .unwrap();

    // The cancelled row still occupies the (member, class) pair
    let result = persistence.book_class(member_id, class_id, Utc::now());

    assert!(matches!(
        result,
        Err(PersistenceError::RuleViolation(
            BookingError::DuplicateBooking { .. }
        ))
    ));
}

#[test]
fn test_started_class_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let class_id: i64 = seed_class(
        &mut persistence,
        10,
        Utc::now() - Duration::minutes(30),
    );

    let result = persistence.book_class(member_id, class_id, Utc::now());

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RuleViolation(BookingError::ClassAlreadyStarted { class_id })
    );
}

#[test]
fn test_cancelled_class_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);
    persistence.cancel_class(class_id).unwrap();

    let result = persistence.book_class(member_id, class_id, Utc::now());

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RuleViolation(BookingError::ClassCancelled { class_id })
    );
}

#[test]
fn test_unknown_member_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let class_id: i64 = seed_upcoming_class(&mut persistence, 10);

    let result = persistence.book_class(999, class_id, Utc::now());

    assert_eq!(result.unwrap_err(), PersistenceError::MemberNotFound(999));
}

#[test]
fn test_unknown_class_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let member_id: i64 = seed_member(&mut persistence, "Alice", "alice@example.com");

    let result = persistence.book_class(member_id, 999, Utc::now());

    assert_eq!(result.unwrap_err(), PersistenceError::ClassNotFound(999));
}

#[test]
fn test_duplicate_email_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    seed_member(&mut persistence, "Alice", "alice@example.com");

    let result = persistence.create_member(
        "Another Alice",
        "alice@example.com",
        None,
        None,
        Utc::now(),
    );

    assert!(result.is_err());
}
