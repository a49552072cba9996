// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Qualification type is not one of the closed set.
    InvalidQualificationType(String),
    /// Day name is not a lowercase English weekday.
    InvalidDayOfWeek(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Planning window start date falls after its end date.
    WindowStartAfterEnd {
        /// The window start date.
        start_date: Date,
        /// The window end date.
        end_date: Date,
    },
    /// Planning window spans more days than the caller limit allows.
    WindowTooLong {
        /// The requested span in days.
        days: i64,
        /// The maximum allowed span in days.
        max_days: i64,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQualificationType(value) => {
                write!(
                    f,
                    "Invalid qualification type '{value}': must be one of BASIC_WORKER, CARGO_DRIVER, ENGINEER"
                )
            }
            Self::InvalidDayOfWeek(value) => {
                write!(
                    f,
                    "Invalid day of week '{value}': must be a lowercase English weekday name"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::WindowStartAfterEnd {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Start date {start_date} cannot be after end date {end_date}"
                )
            }
            Self::WindowTooLong { days, max_days } => {
                write!(
                    f,
                    "Optimization period of {days} days cannot exceed {max_days} days"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
