// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking admission and waiting-list promotion rules.
//!
//! This crate contains the decision logic only: pure functions over
//! immutable snapshots of class and booking state. Callers are expected
//! to evaluate these decisions inside a single storage transaction so
//! that the capacity read and the status write cannot race.

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

mod admission;
mod cancellation;
mod error;

#[cfg(test)]
mod tests;

pub use admission::admit_booking;
pub use cancellation::{CancellationOutcome, cancel_booking};
pub use error::BookingError;
