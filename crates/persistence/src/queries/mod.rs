// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries.
//!
//! ## Module Organization
//!
//! - `members` — Member lookups
//! - `classes` — Class lookups and upcoming-class listings
//! - `bookings` — Booking lookups, confirmed-seat counts, and the
//!   waiting-list head query
//!
//! Dynamic per-status filtering is expressed as explicit parameterized
//! functions rather than chained ad-hoc filters; each function names the
//! scope it queries.

pub mod bookings;
pub mod classes;
pub mod members;
