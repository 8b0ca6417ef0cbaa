// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::{DateTime, Utc};

/// API request to book a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookClassRequest {
    /// The authenticated member making the booking.
    pub member_id: i64,
    /// The class to book.
    pub class_id: i64,
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookClassResponse {
    /// The created booking's identifier.
    pub booking_id: i64,
    /// The booked class.
    pub class_id: i64,
    /// The assigned status (`confirmed` or `waiting_list`).
    pub status: String,
    /// The user-facing success message.
    pub message: String,
}

/// API request to cancel a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelBookingRequest {
    /// The booking to cancel.
    pub booking_id: i64,
    /// The authenticated member requesting the cancellation.
    pub member_id: i64,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelBookingResponse {
    /// The cancelled booking's identifier.
    pub booking_id: i64,
    /// The user-facing success message.
    pub message: String,
}

/// API request to create a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClassRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Class start time.
    pub starts_at: DateTime<Utc>,
    /// Class duration in minutes.
    pub duration_minutes: i32,
    /// Maximum number of confirmed participants.
    pub max_participants: i32,
}

/// API response for a successful class creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateClassResponse {
    /// The created class's identifier.
    pub class_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful class cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelClassResponse {
    /// The cancelled class's identifier.
    pub class_id: i64,
    /// A success message.
    pub message: String,
}

/// A bookable class with its current availability.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassInfo {
    /// The class identifier.
    pub class_id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Class start time.
    pub starts_at: DateTime<Utc>,
    /// Class duration in minutes.
    pub duration_minutes: i32,
    /// Maximum number of confirmed participants.
    pub max_participants: i32,
    /// Seats still available.
    pub available_spots: usize,
    /// Whether every seat is taken.
    pub is_full: bool,
}

/// API response for listing upcoming classes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListClassesResponse {
    /// The upcoming classes, soonest first.
    pub classes: Vec<ClassInfo>,
}

/// The class a booking is for, as shown in a member's booking list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemberClassSummary {
    /// The class identifier.
    pub class_id: i64,
    /// Display name.
    pub name: String,
    /// Class start time.
    pub starts_at: DateTime<Utc>,
    /// Class duration in minutes.
    pub duration_minutes: i32,
}

/// One of a member's bookings, joined with its class.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemberBookingInfo {
    /// The booking identifier.
    pub booking_id: i64,
    /// Current status.
    pub status: String,
    /// How the booking was paid for.
    pub booking_type: String,
    /// Amount paid, present only for paid types.
    pub amount_paid: Option<f64>,
    /// Whether the booking could be cancelled right now.
    pub refundable_now: bool,
    /// The class this booking is for.
    pub class: MemberClassSummary,
}

/// API response for listing a member's upcoming bookings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListMemberBookingsResponse {
    /// The member the bookings belong to.
    pub member_id: i64,
    /// The bookings, newest first.
    pub bookings: Vec<MemberBookingInfo>,
}

/// API request to register a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterMemberRequest {
    /// The member's name.
    pub name: String,
    /// The member's email address.
    pub email: String,
    /// Membership plan label, if any.
    pub membership_type: Option<String>,
    /// When a time-limited membership expires.
    pub membership_expires_at: Option<DateTime<Utc>>,
}

/// API response for a successful member registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterMemberResponse {
    /// The new member's identifier.
    pub member_id: i64,
    /// The member's name.
    pub name: String,
    /// The member's email address.
    pub email: String,
    /// Whether the member currently has an active membership (display only).
    pub has_active_membership: bool,
    /// A success message.
    pub message: String,
}
