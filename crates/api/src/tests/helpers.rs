// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::notify::{NotifyError, SeatAvailableNotifier};
use crate::request_response::{CreateClassRequest, RegisterMemberRequest};
use crate::{create_class, register_member};
use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use wod_book_persistence::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn seed_member(persistence: &mut Persistence, name: &str, email: &str) -> i64 {
    let request = RegisterMemberRequest {
        name: name.to_string(),
        email: email.to_string(),
        membership_type: Some(String::from("monthly")),
        membership_expires_at: Some(Utc::now() + Duration::days(30)),
    };
    register_member(persistence, &request, Utc::now())
        .expect("Failed to register member")
        .member_id
}

pub fn seed_class(
    persistence: &mut Persistence,
    max_participants: i32,
    starts_at: DateTime<Utc>,
) -> i64 {
    let request = CreateClassRequest {
        name: String::from("Morning WOD"),
        description: Some(String::from("For all levels")),
        starts_at,
        duration_minutes: 60,
        max_participants,
    };
    create_class(persistence, &request, Utc::now())
        .expect("Failed to create class")
        .class_id
}

pub fn seed_upcoming_class(persistence: &mut Persistence, max_participants: i32) -> i64 {
    seed_class(persistence, max_participants, Utc::now() + Duration::hours(3))
}

/// Notifier that records every delivery for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub deliveries: RefCell<Vec<(i64, i64)>>,
}

impl SeatAvailableNotifier for RecordingNotifier {
    fn notify_seat_available(&self, member_id: i64, class_id: i64) -> Result<(), NotifyError> {
        self.deliveries.borrow_mut().push((member_id, class_id));
        Ok(())
    }
}

/// Notifier that always fails delivery.
#[derive(Debug, Default)]
pub struct FailingNotifier;

impl SeatAvailableNotifier for FailingNotifier {
    fn notify_seat_available(&self, _member_id: i64, _class_id: i64) -> Result<(), NotifyError> {
        Err(NotifyError(String::from("delivery channel down")))
    }
}
