// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Booking status string is not a valid status.
    InvalidBookingStatus {
        /// The invalid status string.
        status: String,
    },
    /// Booking type string is not a valid type.
    InvalidBookingType {
        /// The invalid booking type string.
        booking_type: String,
    },
    /// A booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// Class name is empty or invalid.
    InvalidClassName(String),
    /// Class duration must be at least one minute.
    InvalidDuration {
        /// The invalid duration value.
        minutes: i32,
    },
    /// Class capacity must be at least one.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: i32,
    },
    /// Member name is empty or invalid.
    InvalidMemberName(String),
    /// Member email address is invalid.
    InvalidEmail(String),
    /// An entity was used where a persisted identifier is required.
    MissingIdentifier {
        /// The entity kind.
        entity: &'static str,
    },
    /// Failed to parse a timestamp from a string.
    TimestampParseError {
        /// The invalid timestamp string.
        timestamp: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidBookingType { booking_type } => {
                write!(f, "Invalid booking type: '{booking_type}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from '{from}' to '{to}': {reason}")
            }
            Self::InvalidClassName(msg) => write!(f, "Invalid class name: {msg}"),
            Self::InvalidDuration { minutes } => {
                write!(f, "Invalid class duration: {minutes}. Must be at least 1 minute")
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid class capacity: {capacity}. Must be at least 1")
            }
            Self::InvalidMemberName(msg) => write!(f, "Invalid member name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email address: {msg}"),
            Self::MissingIdentifier { entity } => {
                write!(f, "{entity} has no persisted identifier")
            }
            Self::TimestampParseError { timestamp, error } => {
                write!(f, "Failed to parse timestamp '{timestamp}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
