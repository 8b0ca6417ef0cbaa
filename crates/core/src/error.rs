// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wod_book_domain::DomainError;

/// Errors that can occur while deciding a booking or cancellation request.
///
/// All variants are recoverable and user-facing; the API layer maps each
/// to a literal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The member already holds a booking row for this class, in any status.
    DuplicateBooking {
        /// The member requesting the booking.
        member_id: i64,
        /// The class being booked.
        class_id: i64,
    },
    /// The class start time has passed.
    ClassAlreadyStarted {
        /// The class being booked.
        class_id: i64,
    },
    /// The class has been cancelled by the studio.
    ClassCancelled {
        /// The class being booked.
        class_id: i64,
    },
    /// The acting member does not own the booking being cancelled.
    NotOwner {
        /// The booking being cancelled.
        booking_id: i64,
        /// The member attempting the cancellation.
        member_id: i64,
    },
    /// The refund-eligibility rule failed.
    NotRefundable {
        /// The booking being cancelled.
        booking_id: i64,
    },
    /// A domain invariant was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateBooking {
                member_id,
                class_id,
            } => {
                write!(
                    f,
                    "Member {member_id} already has a booking for class {class_id}"
                )
            }
            Self::ClassAlreadyStarted { class_id } => {
                write!(f, "Class {class_id} has already started")
            }
            Self::ClassCancelled { class_id } => {
                write!(f, "Class {class_id} has been cancelled")
            }
            Self::NotOwner {
                booking_id,
                member_id,
            } => {
                write!(
                    f,
                    "Booking {booking_id} is not owned by member {member_id}"
                )
            }
            Self::NotRefundable { booking_id } => {
                write!(f, "Booking {booking_id} is not refundable at this time")
            }
            Self::DomainViolation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
