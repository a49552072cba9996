// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shift_opt_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// Every variant ends up in the response envelope's message; none of them
/// escapes the boundary as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The requested planning window violates a caller rule.
    InvalidPlanningWindow {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The request named neither a day list nor a date range.
    MissingDaySelection,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidPlanningWindow { message } => {
                write!(f, "Invalid planning window: {message}")
            }
            Self::MissingDaySelection => {
                write!(
                    f,
                    "No days requested: provide a day list or a start and end date"
                )
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidQualificationType(_) => ApiError::InvalidInput {
            field: String::from("qualification_type"),
            message: err.to_string(),
        },
        DomainError::InvalidDayOfWeek(_) => ApiError::InvalidInput {
            field: String::from("days"),
            message: err.to_string(),
        },
        DomainError::DateParseError { .. } | DomainError::DateArithmeticOverflow { .. } => {
            ApiError::InvalidInput {
                field: String::from("date"),
                message: err.to_string(),
            }
        }
        DomainError::WindowStartAfterEnd { .. } | DomainError::WindowTooLong { .. } => {
            ApiError::InvalidPlanningWindow {
                message: err.to_string(),
            }
        }
    }
}
