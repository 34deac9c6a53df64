// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::sequence::year_bounds;
use time::Date;
use time::macros::format_description;

/// Earliest supported planning year.
pub const MIN_YEAR: i32 = 2000;

/// Latest supported planning year.
pub const MAX_YEAR: i32 = 2100;

/// Validates that a planning year is within the supported range.
///
/// # Arguments
///
/// * `year` - The year to validate
///
/// # Errors
///
/// Returns an error if the year is not between 2000 and 2100.
pub fn validate_year(year: i32) -> Result<(), DomainError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DomainError::InvalidYear(format!(
            "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )));
    }
    Ok(())
}

/// Normalizes and validates an ISO 3166-1 alpha-2 country code.
///
/// Codes are normalized to uppercase.
///
/// # Errors
///
/// Returns an error if the code is not exactly two ASCII letters.
pub fn normalize_country_code(code: &str) -> Result<String, DomainError> {
    let trimmed: &str = code.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidCountryCode(code.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Validates that a date belongs to the planning year.
///
/// # Errors
///
/// Returns `DomainError::DateOutsideYear` if the date is in another year.
pub fn validate_date_in_year(date: Date, year: i32) -> Result<(), DomainError> {
    let (first, last) = year_bounds(year)?;
    if date < first || date > last {
        return Err(DomainError::DateOutsideYear { date, year });
    }
    Ok(())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}
