// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::booking_type::BookingType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled, instructor-led class session.
///
/// Sessions are created by the scheduling surface and only observed by the
/// booking core. Flipping `is_cancelled` never cascades to existing
/// bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the class has not been persisted yet.
    pub class_id: Option<i64>,
    /// Display name (e.g., "Morning WOD").
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Class start time.
    pub starts_at: DateTime<Utc>,
    /// Class duration in minutes.
    pub duration_minutes: i32,
    /// Maximum number of confirmed participants. Always >= 1.
    pub max_participants: i32,
    /// Whether the class has been cancelled by the studio.
    pub is_cancelled: bool,
}

impl ClassSession {
    /// Returns true if this class can currently accept booking requests.
    ///
    /// A class is bookable while it is not cancelled and has not started.
    #[must_use]
    pub fn is_bookable(&self, now: DateTime<Utc>) -> bool {
        !self.is_cancelled && self.starts_at > now
    }
}

/// A member's claim on a seat in a class session.
///
/// At most one booking row ever exists per (member, class) pair; the pair
/// is unique regardless of status, so a cancelled booking cannot be
/// re-booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the booking has not been persisted yet.
    pub booking_id: Option<i64>,
    /// The member who holds this booking.
    pub member_id: i64,
    /// The class this booking is for.
    pub class_id: i64,
    /// Current status.
    pub status: BookingStatus,
    /// How the booking was paid for.
    pub booking_type: BookingType,
    /// Amount paid, present only for paid types.
    pub amount_paid: Option<f64>,
    /// Whether the booking is eligible for cancellation at all.
    pub is_refundable: bool,
    /// Creation time; orders the waiting list.
    pub created_at: DateTime<Utc>,
}

/// A studio member.
///
/// Membership status is derived for display only; it never gates
/// admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the member has not been persisted yet.
    pub member_id: Option<i64>,
    /// The member's name.
    pub name: String,
    /// The member's email address.
    pub email: String,
    /// Membership plan label (e.g., "monthly", "free"), if any.
    pub membership_type: Option<String>,
    /// When a time-limited membership expires.
    pub membership_expires_at: Option<DateTime<Utc>>,
    /// Whether the member account is active.
    pub is_active: bool,
}

impl Member {
    /// Returns true if the member currently has an active membership.
    ///
    /// Pay-per-visit plans never expire; anything else requires an
    /// expiry date in the future.
    #[must_use]
    pub fn has_active_membership(&self, now: DateTime<Utc>) -> bool {
        if matches!(
            self.membership_type.as_deref(),
            Some("free" | "day_pass" | "single_drop_in")
        ) {
            return true;
        }

        self.membership_expires_at.is_some_and(|expires| expires > now)
    }
}
