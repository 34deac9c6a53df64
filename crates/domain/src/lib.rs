// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocate;
mod error;
mod gaps;
mod reconcile;
mod sequence;
mod stats;
mod summary;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allocate::{BRIDGE_GAP_LIMIT, VacationPlan, allocate};
pub use gaps::{Gap, find_gaps};
pub use reconcile::reconcile;
pub use sequence::{Day, is_free_day, is_weekend, sequence_days, sequence_days_with, year_bounds};
pub use stats::{Stats, report};
pub use summary::{HolidaySummary, summarize};

// Re-export public types
pub use error::DomainError;
pub use types::{
    CalendarDay, CalendarMap, Confidence, HolidayRecord, JurisdictionScope, SourceResults, Warning,
};
pub use validation::{
    MAX_YEAR, MIN_YEAR, normalize_country_code, parse_iso_date, validate_date_in_year,
    validate_year,
};
