// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::time;

/// A fixed daily shift window.
///
/// Two windows are defined. The engine currently books every assignment
/// into [`ShiftWindow::DAY`]; the evening window is declared but not yet
/// rotated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// The shift start time.
    pub start: Time,
    /// The shift end time. Midnight means the shift runs to the end of the
    /// same day, not into the next.
    pub end: Time,
}

impl ShiftWindow {
    /// The day window, 08:00 to 16:00.
    pub const DAY: Self = Self {
        start: time!(8:00),
        end: time!(16:00),
    };

    /// The evening window, 16:00 to midnight.
    pub const EVENING: Self = Self {
        start: time!(16:00),
        end: time!(0:00),
    };

    /// Returns the start time formatted as "HH:MM".
    #[must_use]
    pub fn start_label(&self) -> String {
        format_clock(self.start)
    }

    /// Returns the end time formatted as "HH:MM".
    ///
    /// A midnight end renders as "00:00" rather than wrapping onto the
    /// next day's label.
    #[must_use]
    pub fn end_label(&self) -> String {
        format_clock(self.end)
    }
}

/// Formats a time of day as "HH:MM".
#[must_use]
pub fn format_clock(value: Time) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}
