// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Booking rule rejections map 1:1 to literal user-facing messages;
//! internal details never leak past this boundary.

use wod_book::BookingError;
use wod_book_domain::DomainError;
use wod_book_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A booking rule rejected the request. The message is the literal
    /// user-facing text.
    BookingRejected {
        /// The user-facing message.
        message: String,
    },
    /// The actor may not act on this resource. The message is the literal
    /// user-facing text.
    Forbidden {
        /// The user-facing message.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookingRejected { message } | Self::Forbidden { message } => {
                write!(f, "{message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a booking rule violation into its literal user-facing
/// message.
///
/// Each rejection maps to exactly one message; the texts are part of the
/// API contract.
#[must_use]
pub fn translate_booking_error(err: &BookingError) -> ApiError {
    match err {
        BookingError::DuplicateBooking { .. } => ApiError::BookingRejected {
            message: String::from("You already have a booking for this class."),
        },
        BookingError::ClassAlreadyStarted { .. } => ApiError::BookingRejected {
            message: String::from("Cannot book a class that has already started."),
        },
        BookingError::ClassCancelled { .. } => ApiError::BookingRejected {
            message: String::from("This class has been cancelled."),
        },
        BookingError::NotOwner { .. } => ApiError::Forbidden {
            message: String::from("You can only cancel your own bookings."),
        },
        BookingError::NotRefundable { .. } => ApiError::BookingRejected {
            message: String::from("This booking cannot be cancelled at this time."),
        },
        BookingError::DomainViolation(domain_err) => ApiError::Internal {
            message: format!("Domain invariant violated: {domain_err}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures storage errors are not
/// leaked directly.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::RuleViolation(booking_err) => translate_booking_error(booking_err),
        PersistenceError::MemberNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Member"),
            message: format!("Member {id} does not exist"),
        },
        PersistenceError::ClassNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Class"),
            message: format!("Class {id} does not exist"),
        },
        PersistenceError::BookingNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {id} does not exist"),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a domain validation error into an API error.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    match err {
        DomainError::InvalidClassName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg.clone(),
        },
        DomainError::InvalidDuration { minutes } => ApiError::InvalidInput {
            field: String::from("duration_minutes"),
            message: format!("Invalid class duration: {minutes}. Must be at least 1 minute"),
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("max_participants"),
            message: format!("Invalid class capacity: {capacity}. Must be at least 1"),
        },
        DomainError::InvalidMemberName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg.clone(),
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg.clone(),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
