// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the WOD Book class-booking system.
//!
//! This crate provides database persistence for members, classes, and
//! bookings. It is built on Diesel over `SQLite`.
//!
//! `SQLite` covers all standard development workflows, unit and
//! integration tests (fast, deterministic, in-memory), and single-studio
//! deployments. It requires no external infrastructure.
//!
//! The booking mutations are transactional: admission evaluates the
//! duplicate check, the class checks, and the capacity classification in
//! the same immediate transaction as the insert; cancellation evaluates
//! the ownership and refund rules, the status flip, and the
//! waiting-list promotion in one transaction. The UNIQUE
//! (member_id, class_id) constraint additionally enforces booking
//! uniqueness at the storage layer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, Utc};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use wod_book_domain::{Booking, ClassSession, Member, available_spots, is_full};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::{CancelledBooking, PromotedBooking};

/// A class joined with its current seat availability, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAvailability {
    /// The class.
    pub class: ClassSession,
    /// Seats still available.
    pub available_spots: usize,
    /// Whether every seat is taken.
    pub is_full: bool,
}

/// Persistence adapter for members, classes, and bookings.
///
/// Owns a single `SQLite` connection; callers that share an adapter
/// across request handlers serialize on it, which sits on top of the
/// per-operation transactional guarantee.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Registers a new member.
    ///
    /// # Errors
    ///
    /// Returns an error if the member cannot be created (including a
    /// duplicate email address).
    pub fn create_member(
        &mut self,
        name: &str,
        email: &str,
        membership_type: Option<&str>,
        membership_expires_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<i64, PersistenceError> {
        let record = data_models::NewMember {
            name: name.to_string(),
            email: email.to_string(),
            membership_type: membership_type.map(ToString::to_string),
            membership_expires_at: membership_expires_at.map(data_models::fmt_timestamp),
            is_active: 1,
            created_at: data_models::fmt_timestamp(now),
        };
        mutations::members::insert_member(&mut self.conn, &record)
    }

    /// Retrieves a member by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_member(&mut self, member_id: i64) -> Result<Option<Member>, PersistenceError> {
        queries::members::get_member(&mut self.conn, member_id)?
            .map(data_models::MemberRow::into_domain)
            .transpose()
    }

    /// Retrieves a member by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_member_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<Member>, PersistenceError> {
        queries::members::get_member_by_email(&mut self.conn, email)?
            .map(data_models::MemberRow::into_domain)
            .transpose()
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// Creates a new class.
    ///
    /// Field validation (capacity >= 1, duration >= 1) is the caller's
    /// responsibility; the schema carries a matching CHECK constraint as
    /// the storage-layer guarantee.
    ///
    /// # Errors
    ///
    /// Returns an error if the class cannot be created.
    pub fn create_class(
        &mut self,
        name: &str,
        description: Option<&str>,
        starts_at: DateTime<Utc>,
        duration_minutes: i32,
        max_participants: i32,
        now: DateTime<Utc>,
    ) -> Result<i64, PersistenceError> {
        let record = data_models::NewClass {
            name: name.to_string(),
            description: description.map(ToString::to_string),
            starts_at: data_models::fmt_timestamp(starts_at),
            duration_minutes,
            max_participants,
            is_cancelled: 0,
            created_at: data_models::fmt_timestamp(now),
        };
        mutations::classes::insert_class(&mut self.conn, &record)
    }

    /// Retrieves a class by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_class(&mut self, class_id: i64) -> Result<Option<ClassSession>, PersistenceError> {
        queries::classes::get_class(&mut self.conn, class_id)?
            .map(data_models::ClassRow::into_domain)
            .transpose()
    }

    /// Marks a class as cancelled.
    ///
    /// Existing bookings are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ClassNotFound` if the class does not exist.
    pub fn cancel_class(&mut self, class_id: i64) -> Result<(), PersistenceError> {
        mutations::classes::set_class_cancelled(&mut self.conn, class_id)
    }

    /// Lists upcoming classes with their current seat availability,
    /// ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_upcoming_classes(
        &mut self,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<ClassAvailability>, PersistenceError> {
        let now_str = data_models::fmt_timestamp(now);
        let rows = queries::classes::list_upcoming_classes(&mut self.conn, &now_str, limit)?;

        let mut listings: Vec<ClassAvailability> = Vec::with_capacity(rows.len());
        for row in rows {
            let class_id = row.class_id;
            let class: ClassSession = row.into_domain()?;
            let confirmed: i64 =
                queries::bookings::count_confirmed_bookings(&mut self.conn, class_id)?;
            let confirmed: usize = usize::try_from(confirmed).unwrap_or(0);

            listings.push(ClassAvailability {
                available_spots: available_spots(&class, confirmed),
                is_full: is_full(&class, confirmed),
                class,
            });
        }

        Ok(listings)
    }

    /// Counts the confirmed bookings for a class.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_confirmed_bookings(
        &mut self,
        class_id: i64,
    ) -> Result<usize, PersistenceError> {
        let confirmed: i64 =
            queries::bookings::count_confirmed_bookings(&mut self.conn, class_id)?;
        Ok(usize::try_from(confirmed).unwrap_or(0))
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Books a class for a member.
    ///
    /// The full admission decision (duplicate check, class checks,
    /// capacity classification) and the insert run in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RuleViolation` when admission rejects the request,
    /// `MemberNotFound`/`ClassNotFound` for missing rows, or a database
    /// error.
    pub fn book_class(
        &mut self,
        member_id: i64,
        class_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Booking, PersistenceError> {
        mutations::bookings::book_class(&mut self.conn, member_id, class_id, now)
    }

    /// Cancels a booking on behalf of a member, promoting the oldest
    /// waiting-list booking when a confirmed seat is freed.
    ///
    /// # Errors
    ///
    /// Returns `RuleViolation` when the ownership or refund rules reject
    /// the request, `BookingNotFound` for a missing booking, or a
    /// database error.
    pub fn cancel_booking(
        &mut self,
        booking_id: i64,
        acting_member_id: i64,
        now: DateTime<Utc>,
    ) -> Result<CancelledBooking, PersistenceError> {
        mutations::bookings::cancel_booking(&mut self.conn, booking_id, acting_member_id, now)
    }

    /// Records payment details on a booking (type and amount).
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if the booking does not exist.
    pub fn set_booking_payment(
        &mut self,
        booking_id: i64,
        booking_type: wod_book_domain::BookingType,
        amount_paid: Option<f64>,
    ) -> Result<(), PersistenceError> {
        mutations::bookings::set_booking_payment(
            &mut self.conn,
            booking_id,
            booking_type.as_str(),
            amount_paid,
        )
    }

    /// Retrieves a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_booking(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)?
            .map(data_models::BookingRow::into_domain)
            .transpose()
    }

    /// Retrieves the booking a member holds for a class, in any status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_booking_for_member_and_class(
        &mut self,
        member_id: i64,
        class_id: i64,
    ) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::find_booking_for_member_and_class(&mut self.conn, member_id, class_id)?
            .map(data_models::BookingRow::into_domain)
            .transpose()
    }

    /// Lists a member's bookings for upcoming classes, newest first,
    /// together with the class each booking is for.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_member_upcoming_bookings(
        &mut self,
        member_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<(Booking, ClassSession)>, PersistenceError> {
        let now_str = data_models::fmt_timestamp(now);
        let rows = queries::bookings::list_member_upcoming_bookings(
            &mut self.conn,
            member_id,
            &now_str,
        )?;

        rows.into_iter()
            .map(|(booking_row, class_row)| {
                Ok((booking_row.into_domain()?, class_row.into_domain()?))
            })
            .collect()
    }
}
