// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat-available notification port.
//!
//! The cancellation handler fires a notification when a waiting-list
//! booking is promoted. Delivery is best-effort: a failing notifier is
//! logged and the cancellation still succeeds.

use tracing::info;

/// A notification delivery failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError(pub String);

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification failed: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// Port for telling a member their waiting-list booking was promoted.
pub trait SeatAvailableNotifier {
    /// Notifies `member_id` that a seat opened up in `class_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; callers log and ignore it.
    fn notify_seat_available(&self, member_id: i64, class_id: i64) -> Result<(), NotifyError>;
}

/// Default notifier that records the event in the log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl SeatAvailableNotifier for LogNotifier {
    fn notify_seat_available(&self, member_id: i64, class_id: i64) -> Result<(), NotifyError> {
        info!(member_id, class_id, "Seat available: waiting-list booking promoted");
        Ok(())
    }
}
