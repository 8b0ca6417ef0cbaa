// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking, cancellation, and read-side
//! listings.
//!
//! Handlers translate requests into persistence calls, map errors to the
//! API taxonomy, and attach the literal user-facing messages.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use wod_book_domain::{
    Booking, ClassSession, Member, is_refundable_now, validate_class_fields,
    validate_member_fields,
};
use wod_book_persistence::{CancelledBooking, ClassAvailability, Persistence};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::notify::SeatAvailableNotifier;
use crate::request_response::{
    BookClassRequest, BookClassResponse, CancelBookingRequest, CancelBookingResponse,
    CancelClassResponse, ClassInfo, CreateClassRequest, CreateClassResponse,
    ListClassesResponse, ListMemberBookingsResponse, MemberBookingInfo, MemberClassSummary,
    RegisterMemberRequest, RegisterMemberResponse,
};

/// Success message for a confirmed booking.
pub const MSG_BOOKED: &str = "Class booked successfully!";
/// Success message for a waiting-list booking.
pub const MSG_WAITLISTED: &str = "Added to waiting list. You'll be notified if a spot opens up.";
/// Success message for a cancellation.
pub const MSG_BOOKING_CANCELLED: &str = "Booking cancelled successfully.";

/// Books a class for a member.
///
/// # Errors
///
/// Returns an error if the admission rules reject the request or the
/// member/class does not exist.
pub fn book_class(
    persistence: &mut Persistence,
    request: &BookClassRequest,
    now: DateTime<Utc>,
) -> Result<BookClassResponse, ApiError> {
    let booking: Booking = persistence
        .book_class(request.member_id, request.class_id, now)
        .map_err(|e| translate_persistence_error(&e))?;

    let booking_id: i64 = booking.booking_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Booking was persisted without an identifier"),
    })?;

    info!(
        booking_id,
        member_id = request.member_id,
        class_id = request.class_id,
        status = booking.status.as_str(),
        "Booking created"
    );

    let message: &str = if booking.status == wod_book_domain::BookingStatus::Confirmed {
        MSG_BOOKED
    } else {
        MSG_WAITLISTED
    };

    Ok(BookClassResponse {
        booking_id,
        class_id: request.class_id,
        status: booking.status.as_str().to_string(),
        message: message.to_string(),
    })
}

/// Cancels a booking, promoting the oldest waiting-list entry when a
/// confirmed seat is freed and notifying the promoted member.
///
/// Notification is fire-and-forget: a failing notifier is logged and the
/// cancellation still succeeds.
///
/// # Errors
///
/// Returns an error if the ownership or refund rules reject the request
/// or the booking does not exist.
pub fn cancel_booking(
    persistence: &mut Persistence,
    notifier: &dyn SeatAvailableNotifier,
    request: &CancelBookingRequest,
    now: DateTime<Utc>,
) -> Result<CancelBookingResponse, ApiError> {
    let result: CancelledBooking = persistence
        .cancel_booking(request.booking_id, request.member_id, now)
        .map_err(|e| translate_persistence_error(&e))?;

    info!(
        booking_id = request.booking_id,
        member_id = request.member_id,
        "Booking cancelled"
    );

    if let Some(promoted) = result.promoted {
        if let Err(e) = notifier.notify_seat_available(promoted.member_id, promoted.class_id) {
            warn!(
                member_id = promoted.member_id,
                class_id = promoted.class_id,
                error = %e,
                "Seat-available notification failed"
            );
        }
    }

    Ok(CancelBookingResponse {
        booking_id: request.booking_id,
        message: MSG_BOOKING_CANCELLED.to_string(),
    })
}

/// Lists upcoming classes with their current availability.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_upcoming_classes(
    persistence: &mut Persistence,
    now: DateTime<Utc>,
    limit: i64,
) -> Result<ListClassesResponse, ApiError> {
    let listings: Vec<ClassAvailability> = persistence
        .list_upcoming_classes(now, limit)
        .map_err(|e| translate_persistence_error(&e))?;

    let classes: Vec<ClassInfo> = listings
        .into_iter()
        .filter_map(|listing| {
            let class_id = listing.class.class_id?;
            Some(ClassInfo {
                class_id,
                name: listing.class.name,
                description: listing.class.description,
                starts_at: listing.class.starts_at,
                duration_minutes: listing.class.duration_minutes,
                max_participants: listing.class.max_participants,
                available_spots: listing.available_spots,
                is_full: listing.is_full,
            })
        })
        .collect();

    Ok(ListClassesResponse { classes })
}

/// Lists a member's bookings for upcoming classes, newest first.
///
/// # Errors
///
/// Returns an error if the member does not exist or the database cannot
/// be queried.
pub fn list_member_bookings(
    persistence: &mut Persistence,
    member_id: i64,
    now: DateTime<Utc>,
) -> Result<ListMemberBookingsResponse, ApiError> {
    if persistence
        .get_member(member_id)
        .map_err(|e| translate_persistence_error(&e))?
        .is_none()
    {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Member"),
            message: format!("Member {member_id} does not exist"),
        });
    }

    let rows: Vec<(Booking, ClassSession)> = persistence
        .list_member_upcoming_bookings(member_id, now)
        .map_err(|e| translate_persistence_error(&e))?;

    let bookings: Vec<MemberBookingInfo> = rows
        .into_iter()
        .filter_map(|(booking, class)| {
            let booking_id = booking.booking_id?;
            let class_id = class.class_id?;
            Some(MemberBookingInfo {
                booking_id,
                status: booking.status.as_str().to_string(),
                booking_type: booking.booking_type.as_str().to_string(),
                amount_paid: booking.amount_paid,
                refundable_now: is_refundable_now(&booking, class.starts_at, now),
                class: MemberClassSummary {
                    class_id,
                    name: class.name,
                    starts_at: class.starts_at,
                    duration_minutes: class.duration_minutes,
                },
            })
        })
        .collect();

    Ok(ListMemberBookingsResponse {
        member_id,
        bookings,
    })
}

/// Creates a class.
///
/// # Errors
///
/// Returns an error if field validation fails or the insert fails.
pub fn create_class(
    persistence: &mut Persistence,
    request: &CreateClassRequest,
    now: DateTime<Utc>,
) -> Result<CreateClassResponse, ApiError> {
    validate_class_fields(
        &request.name,
        request.duration_minutes,
        request.max_participants,
    )
    .map_err(|e| translate_domain_error(&e))?;

    let class_id: i64 = persistence
        .create_class(
            &request.name,
            request.description.as_deref(),
            request.starts_at,
            request.duration_minutes,
            request.max_participants,
            now,
        )
        .map_err(|e| translate_persistence_error(&e))?;

    info!(class_id, name = %request.name, "Class created");

    Ok(CreateClassResponse {
        class_id,
        message: format!("Class '{}' created", request.name),
    })
}

/// Marks a class as cancelled.
///
/// Existing bookings are left untouched.
///
/// # Errors
///
/// Returns an error if the class does not exist.
pub fn cancel_class(
    persistence: &mut Persistence,
    class_id: i64,
) -> Result<CancelClassResponse, ApiError> {
    persistence
        .cancel_class(class_id)
        .map_err(|e| translate_persistence_error(&e))?;

    info!(class_id, "Class cancelled");

    Ok(CancelClassResponse {
        class_id,
        message: String::from("Class cancelled"),
    })
}

/// Registers a member.
///
/// # Errors
///
/// Returns an error if field validation fails or the email is already
/// registered.
pub fn register_member(
    persistence: &mut Persistence,
    request: &RegisterMemberRequest,
    now: DateTime<Utc>,
) -> Result<RegisterMemberResponse, ApiError> {
    validate_member_fields(&request.name, &request.email)
        .map_err(|e| translate_domain_error(&e))?;

    if persistence
        .get_member_by_email(&request.email)
        .map_err(|e| translate_persistence_error(&e))?
        .is_some()
    {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{}' is already registered", request.email),
        });
    }

    let member_id: i64 = persistence
        .create_member(
            &request.name,
            &request.email,
            request.membership_type.as_deref(),
            request.membership_expires_at,
            now,
        )
        .map_err(|e| translate_persistence_error(&e))?;

    info!(member_id, name = %request.name, "Member registered");

    let member: Member = Member {
        member_id: Some(member_id),
        name: request.name.clone(),
        email: request.email.clone(),
        membership_type: request.membership_type.clone(),
        membership_expires_at: request.membership_expires_at,
        is_active: true,
    };

    Ok(RegisterMemberResponse {
        member_id,
        name: member.name.clone(),
        email: member.email.clone(),
        has_active_membership: member.has_active_membership(now),
        message: format!("Member '{}' registered", member.name),
    })
}
