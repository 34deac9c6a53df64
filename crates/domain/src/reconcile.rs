// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday reconciliation.
//!
//! Merges the records of two independent holiday sources into a single
//! confidence-tagged calendar.
//!
//! ## Invariants
//!
//! - A date holding any primary record is `Confirmed`
//! - A date held only by the secondary source is `Unconfirmed` while the
//!   primary source is available, and produces one warning per record
//! - When the primary source is unavailable, the secondary source is the
//!   sole authority: every date is `Confirmed` and no warnings are produced
//! - Warnings are returned sorted by date

use crate::types::{CalendarDay, CalendarMap, Confidence, HolidayRecord, Warning};
use std::collections::BTreeSet;
use time::Date;

/// Reconciles primary and secondary holiday records into one calendar.
///
/// # Arguments
///
/// * `primary` - Records from the primary (authoritative) source
/// * `primary_available` - Whether the primary source covers this jurisdiction
/// * `secondary` - Records from the secondary (cross-reference) source
///
/// # Returns
///
/// The calendar map and the date-sorted warnings for unconfirmed holidays.
///
/// # Enrichment
///
/// When a secondary record falls on a date the primary source already
/// covers, the name of the *first* holiday on that date is overwritten with
/// the secondary's names, since the secondary source carries native-language
/// names. Only names change; confidence and membership do not.
///
/// An available primary source that returned no records cannot be told
/// apart from one that silently failed, so every secondary record is then
/// reported as unconfirmed.
#[must_use]
pub fn reconcile(
    primary: &[HolidayRecord],
    primary_available: bool,
    secondary: &[HolidayRecord],
) -> (CalendarMap, Vec<Warning>) {
    let mut calendar: CalendarMap = CalendarMap::new();
    let mut warnings: Vec<Warning> = Vec::new();
    let mut primary_dates: BTreeSet<Date> = BTreeSet::new();

    if primary_available {
        for record in primary {
            primary_dates.insert(record.date);
            insert_record(&mut calendar, record, Confidence::Confirmed);
        }
    }

    for record in secondary {
        if !primary_available {
            insert_record(&mut calendar, record, Confidence::Confirmed);
        } else if primary_dates.contains(&record.date) {
            enrich_first_entry(&mut calendar, record);
        } else {
            insert_record(&mut calendar, record, Confidence::Unconfirmed);
            warnings.push(Warning::from(record));
        }
    }

    // Stable: same-date warnings keep merge order
    warnings.sort_by_key(|w| w.date);

    (calendar, warnings)
}

/// Appends a record to its date, creating the entry with `confidence` if absent.
fn insert_record(calendar: &mut CalendarMap, record: &HolidayRecord, confidence: Confidence) {
    calendar
        .entry(record.date)
        .or_insert_with(|| CalendarDay {
            holidays: Vec::new(),
            confidence,
        })
        .holidays
        .push(record.clone());
}

/// Overwrites the names of index 0 on the record's date.
fn enrich_first_entry(calendar: &mut CalendarMap, record: &HolidayRecord) {
    if record.local_name.is_empty() {
        return;
    }
    if let Some(first) = calendar
        .get_mut(&record.date)
        .and_then(|day| day.holidays.first_mut())
    {
        first.local_name.clone_from(&record.local_name);
        first.generic_name.clone_from(&record.generic_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_secondary_only_date_is_unconfirmed_with_warning() {
        let primary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 12 - 26),
            "Second Day of Christmas",
            "Second Day of Christmas",
        )];
        let secondary: Vec<HolidayRecord> = vec![
            HolidayRecord::national(date!(2025 - 12 - 24), "Heiligabend", "Christmas Eve"),
            HolidayRecord::national(
                date!(2025 - 12 - 26),
                "Zweiter Weihnachtstag",
                "St. Stephen's Day",
            ),
        ];

        let (calendar, warnings) = reconcile(&primary, true, &secondary);

        assert_eq!(calendar.len(), 2);
        assert_eq!(
            calendar[&date!(2025 - 12 - 26)].confidence,
            Confidence::Confirmed
        );
        assert_eq!(
            calendar[&date!(2025 - 12 - 24)].confidence,
            Confidence::Unconfirmed
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].date, date!(2025 - 12 - 24));
        assert_eq!(warnings[0].local_name, "Heiligabend");
    }

    #[test]
    fn test_primary_unavailable_makes_secondary_authoritative() {
        let secondary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 01 - 01),
            "Neujahr",
            "New Year's Day",
        )];

        let (calendar, warnings) = reconcile(&[], false, &secondary);

        assert_eq!(
            calendar[&date!(2025 - 01 - 01)].confidence,
            Confidence::Confirmed
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_primary_unavailable_ignores_primary_records() {
        let primary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 05 - 01),
            "Labour Day",
            "Labour Day",
        )];

        let (calendar, warnings) = reconcile(&primary, false, &[]);

        assert!(calendar.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_enrichment_overwrites_only_first_entry() {
        let primary: Vec<HolidayRecord> = vec![
            HolidayRecord::national(date!(2025 - 06 - 08), "Whit Sunday", "Whit Sunday"),
            HolidayRecord::national(date!(2025 - 06 - 08), "Second Feast", "Second Feast"),
        ];
        let secondary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 06 - 08),
            "Pfingstsonntag",
            "Pentecost",
        )];

        let (calendar, warnings) = reconcile(&primary, true, &secondary);
        let day: &CalendarDay = &calendar[&date!(2025 - 06 - 08)];

        assert!(warnings.is_empty());
        assert_eq!(day.holidays.len(), 2);
        assert_eq!(day.holidays[0].local_name, "Pfingstsonntag");
        assert_eq!(day.holidays[0].generic_name, "Pentecost");
        assert_eq!(day.holidays[1].local_name, "Second Feast");
        assert_eq!(day.confidence, Confidence::Confirmed);
    }

    #[test]
    fn test_enrichment_skipped_for_empty_local_name() {
        let primary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 10 - 03),
            "German Unity Day",
            "German Unity Day",
        )];
        let secondary: Vec<HolidayRecord> = vec![HolidayRecord::national(
            date!(2025 - 10 - 03),
            "",
            "Unity",
        )];

        let (calendar, _) = reconcile(&primary, true, &secondary);

        assert_eq!(
            calendar[&date!(2025 - 10 - 03)].holidays[0].generic_name,
            "German Unity Day"
        );
    }

    #[test]
    fn test_empty_primary_marks_all_secondary_unconfirmed() {
        let secondary: Vec<HolidayRecord> = vec![
            HolidayRecord::national(date!(2025 - 01 - 01), "Neujahr", "New Year's Day"),
            HolidayRecord::national(date!(2025 - 12 - 25), "Weihnachten", "Christmas Day"),
        ];

        let (calendar, warnings) = reconcile(&[], true, &secondary);

        assert!(
            calendar
                .values()
                .all(|d| d.confidence == Confidence::Unconfirmed)
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_secondary_duplicates_append_to_same_date() {
        let secondary: Vec<HolidayRecord> = vec![
            HolidayRecord::national(date!(2025 - 04 - 21), "Ostermontag", "Easter Monday"),
            HolidayRecord::national(date!(2025 - 04 - 21), "Feiertag", "Local Feast"),
        ];

        let (calendar, warnings) = reconcile(&[], true, &secondary);

        assert_eq!(calendar[&date!(2025 - 04 - 21)].holidays.len(), 2);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_warnings_sorted_by_date() {
        let secondary: Vec<HolidayRecord> = vec![
            HolidayRecord::national(date!(2025 - 11 - 01), "Allerheiligen", "All Saints"),
            HolidayRecord::national(date!(2025 - 01 - 06), "Dreikönig", "Epiphany"),
            HolidayRecord::national(date!(2025 - 08 - 15), "Mariä Himmelfahrt", "Assumption"),
        ];

        let (_, warnings) = reconcile(&[], true, &secondary);

        let dates: Vec<Date> = warnings.iter().map(|w| w.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2025 - 01 - 06),
                date!(2025 - 08 - 15),
                date!(2025 - 11 - 01)
            ]
        );
    }
}
