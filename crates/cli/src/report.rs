// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plan rendering.

use bridgeday::{PipelineResult, PlanningInputs};
use bridgeday_domain::{HolidaySummary, Stats, Warning};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use time::Date;

/// A finished plan ready to print.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    inputs: &'a PlanningInputs,
    summary: HolidaySummary,
    warnings: &'a [Warning],
    selected_dates: &'a BTreeSet<Date>,
    budget_remaining: u16,
    stats: Option<&'a Stats>,
}

impl<'a> Report<'a> {
    /// Collects the printable parts of a planning run.
    #[must_use]
    pub fn new(
        inputs: &'a PlanningInputs,
        result: &'a PipelineResult,
        summary: HolidaySummary,
    ) -> Self {
        Self {
            inputs,
            summary,
            warnings: &result.warnings,
            selected_dates: result.plan.selected_dates(),
            budget_remaining: result.plan.budget_remaining(),
            stats: result.stats.as_ref(),
        }
    }

    /// Renders the report as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jurisdiction: String = self.inputs.subdivision().map_or_else(
            || self.inputs.country().to_string(),
            |code| format!("{} ({code})", self.inputs.country()),
        );
        writeln!(
            f,
            "Vacation plan for {jurisdiction}, {}",
            self.inputs.year()
        )?;
        writeln!(
            f,
            "Budget: {} days, starting {}",
            self.inputs.budget(),
            self.inputs.start_date()
        )?;
        writeln!(f)?;

        let s: &HolidaySummary = &self.summary;
        writeln!(
            f,
            "Holidays: {} ({} confirmed, {} unconfirmed), {} on weekdays, {} weekend days",
            s.total, s.confirmed, s.unconfirmed, s.weekday_holidays, s.weekend_days
        )?;
        if !self.warnings.is_empty() {
            writeln!(f, "Unconfirmed holidays (secondary source only):")?;
            for warning in self.warnings {
                writeln!(f, "  {}  {}", warning.date, warning.label())?;
            }
        }
        writeln!(f)?;

        let Some(stats) = self.stats else {
            return writeln!(f, "No vacation days selected.");
        };

        writeln!(
            f,
            "Vacation days ({} used, {} remaining):",
            stats.used, self.budget_remaining
        )?;
        for date in self.selected_dates {
            writeln!(f, "  {date}  {}", date.weekday())?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Streaks: {}, longest {} days, {} days off in total",
            stats.streaks, stats.longest_streak, stats.total_days_off
        )?;
        writeln!(
            f,
            "Efficiency: {:.1} days off per vacation day",
            stats.efficiency
        )
    }
}
