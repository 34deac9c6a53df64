// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while building or editing a vacation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range was given with its start after its end.
    InvalidRange {
        /// The requested first day.
        start: Date,
        /// The requested last day (inclusive).
        end: Date,
    },
    /// The planning year is outside the supported range.
    InvalidYear(String),
    /// The country code is not an ISO 3166-1 alpha-2 code.
    InvalidCountryCode(String),
    /// A date does not belong to the planning year.
    DateOutsideYear {
        /// The offending date.
        date: Date,
        /// The planning year.
        year: i32,
    },
    /// A vacation day was requested on a weekend or public holiday.
    NotAWorkingDay {
        /// The offending date.
        date: Date,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "Invalid date range: start {start} is after end {end}")
            }
            Self::InvalidYear(msg) => write!(f, "Invalid year: {msg}"),
            Self::InvalidCountryCode(code) => {
                write!(f, "Invalid country code '{code}': expected two letters")
            }
            Self::DateOutsideYear { date, year } => {
                write!(f, "Date {date} is outside planning year {year}")
            }
            Self::NotAWorkingDay { date } => {
                write!(f, "Date {date} is already a weekend day or public holiday")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
