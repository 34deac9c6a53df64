// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day sequencing and free-day classification.

use crate::error::DomainError;
use crate::types::CalendarMap;
use serde::{Deserialize, Serialize};
use time::{Date, Month, Weekday};

/// A single calendar day classified as free or working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The calendar date.
    pub date: Date,
    /// Whether the day is a non-working day.
    pub free: bool,
}

/// Returns whether a date falls on a Saturday or Sunday.
#[must_use]
pub const fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Returns whether a date is free: a weekend or a reconciled holiday.
#[must_use]
pub fn is_free_day(date: Date, calendar: &CalendarMap) -> bool {
    is_weekend(date) || calendar.contains_key(&date)
}

/// Returns January 1 and December 31 of a year.
///
/// # Errors
///
/// Returns an error if the year cannot be represented.
pub fn year_bounds(year: i32) -> Result<(Date, Date), DomainError> {
    let first: Date = Date::from_calendar_date(year, Month::January, 1).map_err(|e| {
        DomainError::InvalidYear(format!("Cannot represent January 1 of {year}: {e}"))
    })?;
    let last: Date = Date::from_calendar_date(year, Month::December, 31).map_err(|e| {
        DomainError::InvalidYear(format!("Cannot represent December 31 of {year}: {e}"))
    })?;
    Ok((first, last))
}

/// Generates the classified day sequence for an inclusive date range.
///
/// A day is free when it is a weekend day or a key of `calendar`.
///
/// # Arguments
///
/// * `start` - The first day
/// * `end` - The last day (inclusive)
/// * `calendar` - The reconciled holiday calendar
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `start > end`.
pub fn sequence_days(
    start: Date,
    end: Date,
    calendar: &CalendarMap,
) -> Result<Vec<Day>, DomainError> {
    sequence_days_with(start, end, |date| is_free_day(date, calendar))
}

/// Generates a day sequence using a caller-supplied free-day predicate.
///
/// Each day is classified independently. `start == end` yields one day.
///
/// # Errors
///
/// Returns an error if:
/// - `start > end`
/// - Date arithmetic overflows
pub fn sequence_days_with<F>(start: Date, end: Date, is_free: F) -> Result<Vec<Day>, DomainError>
where
    F: Fn(Date) -> bool,
{
    if start > end {
        return Err(DomainError::InvalidRange { start, end });
    }

    let span: usize = usize::try_from((end - start).whole_days() + 1).unwrap_or_default();
    let mut days: Vec<Day> = Vec::with_capacity(span);
    let mut current: Date = start;

    loop {
        days.push(Day {
            date: current,
            free: is_free(current),
        });
        if current == end {
            break;
        }
        current = current
            .next_day()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("advancing past {current}"),
            })?;
    }

    Ok(days)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CalendarDay, Confidence, HolidayRecord};
    use time::macros::date;

    fn calendar_with(date: Date) -> CalendarMap {
        let mut calendar: CalendarMap = CalendarMap::new();
        calendar.insert(
            date,
            CalendarDay {
                holidays: vec![HolidayRecord::national(date, "Feiertag", "Holiday")],
                confidence: Confidence::Confirmed,
            },
        );
        calendar
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date!(2025 - 05 - 03))); // Saturday
        assert!(is_weekend(date!(2025 - 05 - 04))); // Sunday
        assert!(!is_weekend(date!(2025 - 05 - 02))); // Friday
    }

    #[test]
    fn test_single_day_range() {
        let days: Vec<Day> =
            sequence_days(date!(2025 - 05 - 02), date!(2025 - 05 - 02), &CalendarMap::new())
                .unwrap();
        assert_eq!(days.len(), 1);
        assert!(!days[0].free);
    }

    #[test]
    fn test_inverted_range_fails() {
        let result: Result<Vec<Day>, DomainError> =
            sequence_days(date!(2025 - 05 - 03), date!(2025 - 05 - 02), &CalendarMap::new());
        assert_eq!(
            result,
            Err(DomainError::InvalidRange {
                start: date!(2025 - 05 - 03),
                end: date!(2025 - 05 - 02),
            })
        );
    }

    #[test]
    fn test_free_iff_weekend_or_holiday() {
        let calendar: CalendarMap = calendar_with(date!(2025 - 05 - 01));
        let days: Vec<Day> =
            sequence_days(date!(2025 - 01 - 01), date!(2025 - 12 - 31), &calendar).unwrap();

        assert_eq!(days.len(), 365);
        for day in &days {
            assert_eq!(
                day.free,
                is_weekend(day.date) || calendar.contains_key(&day.date)
            );
        }
    }

    #[test]
    fn test_custom_predicate() {
        let days: Vec<Day> =
            sequence_days_with(date!(2025 - 05 - 05), date!(2025 - 05 - 07), |d| {
                d == date!(2025 - 05 - 06)
            })
            .unwrap();
        let free: Vec<bool> = days.iter().map(|d| d.free).collect();
        assert_eq!(free, vec![false, true, false]);
    }

    #[test]
    fn test_year_bounds_leap_year() {
        let (first, last) = year_bounds(2024).unwrap();
        assert_eq!(first, date!(2024 - 01 - 01));
        assert_eq!(last, date!(2024 - 12 - 31));
        assert_eq!((last - first).whole_days(), 365);
    }
}
