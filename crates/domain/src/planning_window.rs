// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Planning window validation and weekday expansion.
//!
//! Callers describe an optimization run either by naming weekdays directly
//! or by an inclusive calendar-date range. The range form is validated
//! here: the start may not fall after the end, and the span may not exceed
//! [`MAX_SPAN_DAYS`] days. Expansion yields the window's weekday names in
//! first-occurrence order, deduplicated, since requirements are keyed per
//! (warehouse, weekday) and a repeated name would not add a record.

use crate::day::DayOfWeek;
use crate::error::DomainError;
use time::Date;

/// The maximum allowed difference between start and end date, in days.
pub const MAX_SPAN_DAYS: i64 = 14;

/// A validated inclusive date range for one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningWindow {
    /// The first date of the window.
    start_date: Date,
    /// The last date of the window, inclusive.
    end_date: Date,
}

impl PlanningWindow {
    /// Creates a validated planning window.
    ///
    /// # Arguments
    ///
    /// * `start_date` - The first date of the window
    /// * `end_date` - The last date of the window, inclusive
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start_date` falls after `end_date`
    /// - the span exceeds [`MAX_SPAN_DAYS`] days
    pub fn new(start_date: Date, end_date: Date) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::WindowStartAfterEnd {
                start_date,
                end_date,
            });
        }

        let span_days: i64 = (end_date - start_date).whole_days();
        if span_days > MAX_SPAN_DAYS {
            return Err(DomainError::WindowTooLong {
                days: span_days,
                max_days: MAX_SPAN_DAYS,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the first date of the window.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last date of the window, inclusive.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Expands the window into its weekdays.
    ///
    /// Days appear in first-occurrence order and are deduplicated: a window
    /// longer than a week revisits weekday names without repeating them in
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if stepping past the
    /// calendar's supported range. Unreachable for validated windows away
    /// from the representable date limits.
    pub fn days(&self) -> Result<Vec<DayOfWeek>, DomainError> {
        let mut days: Vec<DayOfWeek> = Vec::new();
        let mut current: Date = self.start_date;

        while current <= self.end_date {
            let day: DayOfWeek = DayOfWeek::from(current.weekday());
            if !days.contains(&day) {
                days.push(day);
            }
            current = current
                .next_day()
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: String::from("stepping through the planning window"),
                })?;
        }

        Ok(days)
    }
}
