// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday calendar readout.

use crate::error::DomainError;
use crate::sequence::{is_weekend, sequence_days_with, year_bounds};
use crate::types::{CalendarMap, Confidence};
use serde::{Deserialize, Serialize};

/// Counts describing a reconciled holiday calendar for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySummary {
    /// Number of dates holding at least one holiday.
    pub total: usize,
    /// Number of confirmed holiday dates.
    pub confirmed: usize,
    /// Number of unconfirmed holiday dates.
    pub unconfirmed: usize,
    /// Number of holiday dates falling on a weekday.
    pub weekday_holidays: usize,
    /// Number of Saturdays and Sundays in the year.
    pub weekend_days: usize,
}

/// Summarizes a holiday calendar for a year.
///
/// # Errors
///
/// Returns an error if the year cannot be sequenced.
pub fn summarize(year: i32, calendar: &CalendarMap) -> Result<HolidaySummary, DomainError> {
    let confirmed: usize = calendar
        .values()
        .filter(|day| day.confidence == Confidence::Confirmed)
        .count();
    let weekday_holidays: usize = calendar.keys().filter(|date| !is_weekend(**date)).count();

    let (first, last) = year_bounds(year)?;
    let weekend_days: usize = sequence_days_with(first, last, is_weekend)?
        .iter()
        .filter(|day| day.free)
        .count();

    Ok(HolidaySummary {
        total: calendar.len(),
        confirmed,
        unconfirmed: calendar.len() - confirmed,
        weekday_holidays,
        weekend_days,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::reconcile::reconcile;
    use crate::types::HolidayRecord;
    use time::macros::date;

    #[test]
    fn test_summary_counts() {
        let primary: Vec<HolidayRecord> = vec![
            HolidayRecord::national(date!(2025 - 01 - 01), "New Year", "New Year"),
            HolidayRecord::national(date!(2025 - 10 - 04), "Saturday Feast", "Saturday Feast"),
        ];
        let secondary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 12 - 24),
            "Heiligabend",
            "Christmas Eve",
        )];
        let (calendar, _) = reconcile(&primary, true, &secondary);

        let summary: HolidaySummary = summarize(2025, &calendar).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.confirmed, 2);
        assert_eq!(summary.unconfirmed, 1);
        assert_eq!(summary.weekday_holidays, 2);
        assert_eq!(summary.weekend_days, 104);
    }
}
