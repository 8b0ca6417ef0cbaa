// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::Persistence;
use chrono::{DateTime, Duration, Utc};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn seed_member(persistence: &mut Persistence, name: &str, email: &str) -> i64 {
    persistence
        .create_member(name, email, Some("monthly"), None, Utc::now())
        .expect("Failed to create member")
}

pub fn seed_class(
    persistence: &mut Persistence,
    max_participants: i32,
    starts_at: DateTime<Utc>,
) -> i64 {
    persistence
        .create_class(
            "Morning WOD",
            Some("For all levels"),
            starts_at,
            60,
            max_participants,
            Utc::now(),
        )
        .expect("Failed to create class")
}

pub fn seed_upcoming_class(persistence: &mut Persistence, max_participants: i32) -> i64 {
    seed_class(persistence, max_participants, Utc::now() + Duration::hours(3))
}
