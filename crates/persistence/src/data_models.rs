// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and conversions between stored rows and domain values.
//!
//! Timestamps are stored as RFC 3339 text with fixed microsecond
//! precision so that lexicographic ordering matches chronological
//! ordering (the waiting list relies on this).

use crate::diesel_schema::{bookings, classes, members};
use crate::error::PersistenceError;
use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use std::str::FromStr;
use wod_book_domain::{Booking, BookingStatus, BookingType, ClassSession, Member};

/// Formats a timestamp for storage.
#[must_use]
pub fn fmt_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not valid RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| PersistenceError::SerializationError(format!("timestamp '{s}': {e}")))
}

/// A member row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct MemberRow {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub membership_type: Option<String>,
    pub membership_expires_at: Option<String>,
    pub is_active: i32,
    pub created_at: String,
}

impl MemberRow {
    /// Maps this row to a domain `Member`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored timestamp cannot be parsed.
    pub fn into_domain(self) -> Result<Member, PersistenceError> {
        let membership_expires_at = self
            .membership_expires_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Member {
            member_id: Some(self.member_id),
            name: self.name,
            email: self.email,
            membership_type: self.membership_type,
            membership_expires_at,
            is_active: self.is_active != 0,
        })
    }
}

/// An insertable member record.
#[derive(Debug, Insertable)]
#[diesel(table_name = members)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub membership_type: Option<String>,
    pub membership_expires_at: Option<String>,
    pub is_active: i32,
    pub created_at: String,
}

/// A class row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct ClassRow {
    pub class_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: String,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub is_cancelled: i32,
    pub created_at: String,
}

impl ClassRow {
    /// Maps this row to a domain `ClassSession`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored start time cannot be parsed.
    pub fn into_domain(self) -> Result<ClassSession, PersistenceError> {
        let starts_at = parse_timestamp(&self.starts_at)?;

        Ok(ClassSession {
            class_id: Some(self.class_id),
            name: self.name,
            description: self.description,
            starts_at,
            duration_minutes: self.duration_minutes,
            max_participants: self.max_participants,
            is_cancelled: self.is_cancelled != 0,
        })
    }
}

/// An insertable class record.
#[derive(Debug, Insertable)]
#[diesel(table_name = classes)]
pub struct NewClass {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: String,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub is_cancelled: i32,
    pub created_at: String,
}

/// A booking row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub member_id: i64,
    pub class_id: i64,
    pub status: String,
    pub booking_type: String,
    pub amount_paid: Option<f64>,
    pub is_refundable: i32,
    pub created_at: String,
}

impl BookingRow {
    /// Maps this row to a domain `Booking`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored status, type, or timestamp is invalid.
    pub fn into_domain(self) -> Result<Booking, PersistenceError> {
        let status = BookingStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let booking_type = BookingType::from_str(&self.booking_type)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let created_at = parse_timestamp(&self.created_at)?;

        Ok(Booking {
            booking_id: Some(self.booking_id),
            member_id: self.member_id,
            class_id: self.class_id,
            status,
            booking_type,
            amount_paid: self.amount_paid,
            is_refundable: self.is_refundable != 0,
            created_at,
        })
    }
}

/// An insertable booking record.
#[derive(Debug, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub member_id: i64,
    pub class_id: i64,
    pub status: String,
    pub booking_type: String,
    pub amount_paid: Option<f64>,
    pub is_refundable: i32,
    pub created_at: String,
}

impl NewBooking {
    /// Builds an insertable record from a not-yet-persisted domain booking.
    #[must_use]
    pub fn from_domain(booking: &Booking) -> Self {
        Self {
            member_id: booking.member_id,
            class_id: booking.class_id,
            status: booking.status.as_str().to_string(),
            booking_type: booking.booking_type.as_str().to_string(),
            amount_paid: booking.amount_paid,
            is_refundable: i32::from(booking.is_refundable),
            created_at: fmt_timestamp(booking.created_at),
        }
    }
}
