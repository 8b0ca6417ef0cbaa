// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod notify;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_booking_error, translate_persistence_error};
pub use handlers::{
    MSG_BOOKED, MSG_BOOKING_CANCELLED, MSG_WAITLISTED, book_class, cancel_booking, cancel_class,
    create_class, list_member_bookings, list_upcoming_classes, register_member,
};
pub use notify::{LogNotifier, NotifyError, SeatAvailableNotifier};
pub use request_response::{
    BookClassRequest, BookClassResponse, CancelBookingRequest, CancelBookingResponse,
    CancelClassResponse, ClassInfo, CreateClassRequest, CreateClassResponse,
    ListClassesResponse, ListMemberBookingsResponse, MemberBookingInfo, MemberClassSummary,
    RegisterMemberRequest, RegisterMemberResponse,
};
