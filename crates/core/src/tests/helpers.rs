// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{DateTime, Duration, Utc};
use wod_book_domain::{Booking, BookingStatus, BookingType, ClassSession};

pub fn create_test_class(max_participants: i32, starts_at: DateTime<Utc>) -> ClassSession {
    ClassSession {
        class_id: Some(10),
        name: String::from("Morning WOD"),
        description: None,
        starts_at,
        duration_minutes: 60,
        max_participants,
        is_cancelled: false,
    }
}

pub fn create_upcoming_class(max_participants: i32) -> ClassSession {
    create_test_class(max_participants, Utc::now() + Duration::hours(3))
}

pub fn create_test_booking(
    booking_id: i64,
    member_id: i64,
    status: BookingStatus,
    booking_type: BookingType,
) -> Booking {
    Booking {
        booking_id: Some(booking_id),
        member_id,
        class_id: 10,
        status,
        booking_type,
        amount_paid: None,
        is_refundable: true,
        created_at: Utc::now(),
    }
}
