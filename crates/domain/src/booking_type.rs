// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking type classification.
//!
//! The booking type determines how the refund window applies on
//! cancellation: paid types (`DropIn`, `DayPass`) are locked in close to
//! class start, membership bookings are not.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a booking was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    /// Covered by the member's membership (the default path; no charge)
    Membership,
    /// Single-class drop-in purchase
    DropIn,
    /// Day pass purchase
    DayPass,
}

impl BookingType {
    /// Returns the string representation of the booking type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::DropIn => "drop_in",
            Self::DayPass => "day_pass",
        }
    }

    /// Parses a booking type from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingType` if the string is not a valid type.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "membership" => Ok(Self::Membership),
            "drop_in" => Ok(Self::DropIn),
            "day_pass" => Ok(Self::DayPass),
            _ => Err(DomainError::InvalidBookingType {
                booking_type: s.to_string(),
            }),
        }
    }

    /// Returns true if this type is a paid booking subject to the refund window.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(self, Self::DropIn | Self::DayPass)
    }
}

impl FromStr for BookingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
