// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation plan statistics.
//!
//! Derived on demand from a finished selection; never stored.

use crate::error::DomainError;
use crate::sequence::{Day, is_free_day, sequence_days_with, year_bounds};
use crate::types::CalendarMap;
use crate::validation::validate_date_in_year;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// Summary metrics for a vacation selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of vacation days spent.
    pub used: usize,
    /// Number of free runs containing at least one vacation day.
    pub streaks: usize,
    /// Length of the longest streak.
    pub longest_streak: usize,
    /// Total length of all streaks.
    pub total_days_off: usize,
    /// Days off per vacation day, rounded to one decimal place.
    pub efficiency: f64,
}

/// Computes streak and efficiency statistics for a selection.
///
/// The year is sequenced with a free-day rule extended by the selection
/// (weekend, holiday, or selected). Maximal free runs containing at least
/// one selected day are streaks.
///
/// # Arguments
///
/// * `year` - The planning year
/// * `calendar` - The reconciled holiday calendar
/// * `selected` - The selected vacation days
///
/// # Returns
///
/// `None` when nothing is selected.
///
/// # Errors
///
/// Returns an error if a selected date lies outside the year, or if the
/// year cannot be sequenced.
pub fn report(
    year: i32,
    calendar: &CalendarMap,
    selected: &BTreeSet<Date>,
) -> Result<Option<Stats>, DomainError> {
    if selected.is_empty() {
        return Ok(None);
    }
    for date in selected {
        validate_date_in_year(*date, year)?;
    }

    let (first, last) = year_bounds(year)?;
    let days: Vec<Day> = sequence_days_with(first, last, |date| {
        is_free_day(date, calendar) || selected.contains(&date)
    })?;

    let streaks: Vec<usize> = free_runs(&days)
        .into_iter()
        .filter(|run| run.iter().any(|date| selected.contains(date)))
        .map(|run| run.len())
        .collect();

    let used: usize = selected.len();
    let total_days_off: usize = streaks.iter().sum();
    let longest_streak: usize = streaks.iter().copied().max().unwrap_or(0);

    Ok(Some(Stats {
        used,
        streaks: streaks.len(),
        longest_streak,
        total_days_off,
        efficiency: round_one_decimal(total_days_off, used),
    }))
}

/// Splits a day sequence into maximal runs of free days.
fn free_runs(days: &[Day]) -> Vec<Vec<Date>> {
    days.split(|day| !day.free)
        .filter(|run| !run.is_empty())
        .map(|run| run.iter().map(|day| day.date).collect())
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn round_one_decimal(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let ratio: f64 = numerator as f64 / denominator as f64;
    (ratio * 10.0).round() / 10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CalendarDay, Confidence, HolidayRecord};
    use time::macros::date;

    fn calendar_of(dates: &[Date]) -> CalendarMap {
        dates
            .iter()
            .map(|d| {
                (
                    *d,
                    CalendarDay {
                        holidays: vec![HolidayRecord::national(*d, "Feiertag", "Holiday")],
                        confidence: Confidence::Confirmed,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_selection_has_no_stats() {
        let result: Option<Stats> = report(2025, &CalendarMap::new(), &BTreeSet::new()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_bridge_day_after_holiday() {
        // Thu May 1 holiday, Fri May 2 vacation, weekend May 3-4
        let calendar: CalendarMap = calendar_of(&[date!(2025 - 05 - 01)]);
        let selected: BTreeSet<Date> = BTreeSet::from([date!(2025 - 05 - 02)]);

        let stats: Stats = report(2025, &calendar, &selected).unwrap().unwrap();

        assert_eq!(stats.used, 1);
        assert_eq!(stats.streaks, 1);
        assert_eq!(stats.longest_streak, 4);
        assert_eq!(stats.total_days_off, 4);
        assert!((stats.efficiency - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_multiple_streaks_and_rounding() {
        // Mon Mar 3 joins the Mar 1-2 weekend (3 days).
        // Mon-Fri Jun 2-6 spans Sat May 31 to Sun Jun 8 (9 days).
        let selected: BTreeSet<Date> = BTreeSet::from([
            date!(2025 - 03 - 03),
            date!(2025 - 06 - 02),
            date!(2025 - 06 - 03),
            date!(2025 - 06 - 04),
            date!(2025 - 06 - 05),
            date!(2025 - 06 - 06),
        ]);

        let stats: Stats = report(2025, &CalendarMap::new(), &selected).unwrap().unwrap();

        assert_eq!(stats.used, 6);
        assert_eq!(stats.streaks, 2);
        assert_eq!(stats.longest_streak, 9);
        assert_eq!(stats.total_days_off, 12);
        assert!((stats.efficiency - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_efficiency_rounds_to_one_decimal() {
        assert!((round_one_decimal(10, 3) - 3.3).abs() < 1e-9);
        assert!((round_one_decimal(11, 6) - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_total_days_off_never_below_used() {
        let selected: BTreeSet<Date> = BTreeSet::from([
            date!(2025 - 01 - 02),
            date!(2025 - 07 - 16),
            date!(2025 - 10 - 29),
            date!(2025 - 12 - 31),
        ]);
        let calendar: CalendarMap = calendar_of(&[date!(2025 - 01 - 01)]);

        let stats: Stats = report(2025, &calendar, &selected).unwrap().unwrap();

        assert!(stats.total_days_off >= stats.used);
        assert_eq!(stats.streaks, 4);
    }

    #[test]
    fn test_selection_outside_year_is_rejected() {
        let selected: BTreeSet<Date> =
            BTreeSet::from([date!(2025 - 12 - 31), date!(2026 - 01 - 05)]);

        let result: Result<Option<Stats>, DomainError> =
            report(2025, &CalendarMap::new(), &selected);

        assert_eq!(
            result,
            Err(DomainError::DateOutsideYear {
                date: date!(2026 - 01 - 05),
                year: 2025,
            })
        );
    }

    #[test]
    fn test_adjacent_vacation_days_share_a_streak() {
        // Tue-Wed Dec 30-31: a free run that ends with the year
        let selected: BTreeSet<Date> =
            BTreeSet::from([date!(2025 - 12 - 30), date!(2025 - 12 - 31)]);
        let calendar: CalendarMap = calendar_of(&[date!(2025 - 12 - 29)]);

        let stats: Stats = report(2025, &calendar, &selected).unwrap().unwrap();

        // Sat Dec 27 - Wed Dec 31
        assert_eq!(stats.streaks, 1);
        assert_eq!(stats.longest_streak, 5);
    }
}
