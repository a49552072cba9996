// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Parses an ISO-8601 calendar date ("YYYY-MM-DD").
///
/// # Arguments
///
/// * `value` - The date string to parse
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// ISO-8601 calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, &format).map_err(|err| DomainError::DateParseError {
        date_string: value.to_string(),
        error: err.to_string(),
    })
}
