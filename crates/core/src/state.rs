// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use bridgeday_domain::{
    CalendarMap, HolidaySummary, SourceResults, Stats, VacationPlan, Warning,
    normalize_country_code, reconcile, report, summarize, validate_date_in_year, validate_year,
    year_bounds,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// Validated inputs for one planning run.
///
/// Inputs are immutable; changing any of them produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningInputs {
    year: i32,
    country: String,
    subdivision: Option<String>,
    budget: u16,
    start_date: Date,
}

impl PlanningInputs {
    /// Creates validated planning inputs.
    ///
    /// The country code is normalized to uppercase. A blank subdivision is
    /// treated as no subdivision.
    ///
    /// # Arguments
    ///
    /// * `year` - The planning year
    /// * `country` - ISO 3166-1 alpha-2 country code
    /// * `subdivision` - Optional ISO 3166-2 subdivision code
    /// * `budget` - Number of vacation days available
    /// * `start_date` - First day the optimizer may consider
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The year is outside the supported range
    /// - The country code is not two letters
    /// - The start date is outside the planning year
    pub fn new(
        year: i32,
        country: &str,
        subdivision: Option<&str>,
        budget: u16,
        start_date: Date,
    ) -> Result<Self, CoreError> {
        validate_year(year)?;
        let country: String = normalize_country_code(country)?;
        validate_date_in_year(start_date, year)?;

        let subdivision: Option<String> = subdivision
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_ascii_uppercase);

        Ok(Self {
            year,
            country,
            subdivision,
            budget,
            start_date,
        })
    }

    /// Returns the planning year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the normalized country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the subdivision code, if any.
    #[must_use]
    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }

    /// Returns the vacation-day budget.
    #[must_use]
    pub const fn budget(&self) -> u16 {
        self.budget
    }

    /// Returns the first day the optimizer may consider.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns a copy of these inputs with a different budget.
    #[must_use]
    pub fn with_budget(&self, budget: u16) -> Self {
        Self {
            budget,
            ..self.clone()
        }
    }
}

/// Returns the default optimizer start date for a planning year.
///
/// Planning the current year starts today; any other year starts on January 1.
///
/// # Arguments
///
/// * `year` - The planning year
/// * `today` - The current date
///
/// # Errors
///
/// Returns an error if January 1 of the year cannot be represented.
pub fn default_start_date(year: i32, today: Date) -> Result<Date, CoreError> {
    if today.year() == year {
        return Ok(today);
    }
    let (first, _) = year_bounds(year)?;
    Ok(first)
}

/// The planner state: reconciled calendar plus the current selection.
///
/// States are never mutated. Every command produces a new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerState {
    /// The inputs this state was planned with.
    pub inputs: PlanningInputs,
    /// The reconciled holiday calendar.
    pub calendar: CalendarMap,
    /// Holidays reported only by the secondary source.
    pub warnings: Vec<Warning>,
    /// The current vacation selection.
    pub plan: VacationPlan,
}

impl PlannerState {
    /// Reconciles the source results into a fresh state with nothing selected.
    ///
    /// # Arguments
    ///
    /// * `inputs` - The validated planning inputs
    /// * `sources` - The fetched holiday records
    #[must_use]
    pub fn new(inputs: PlanningInputs, sources: &SourceResults) -> Self {
        let (calendar, warnings) = reconcile(
            &sources.primary,
            sources.primary_available,
            &sources.secondary,
        );
        let plan: VacationPlan = VacationPlan::empty(inputs.budget());
        Self {
            inputs,
            calendar,
            warnings,
            plan,
        }
    }

    /// Computes statistics for the current selection.
    ///
    /// # Returns
    ///
    /// `None` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the planning year cannot be sequenced.
    pub fn stats(&self) -> Result<Option<Stats>, CoreError> {
        Ok(report(
            self.inputs.year(),
            &self.calendar,
            self.plan.selected_dates(),
        )?)
    }

    /// Summarizes the reconciled holiday calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the planning year cannot be sequenced.
    pub fn summary(&self) -> Result<HolidaySummary, CoreError> {
        Ok(summarize(self.inputs.year(), &self.calendar)?)
    }

    /// Returns whether more days are selected than the budget allows.
    ///
    /// Lowering the budget keeps the selection, so this can become true.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.plan.used() > usize::from(self.inputs.budget())
    }

    /// Returns a copy of this state with a different selection.
    pub(crate) fn with_selection(&self, selected: BTreeSet<Date>) -> Self {
        Self {
            plan: plan_for(selected, self.inputs.budget()),
            ..self.clone()
        }
    }

    /// Returns a copy of this state with different inputs, keeping the selection.
    pub(crate) fn with_inputs(&self, inputs: PlanningInputs) -> Self {
        let plan: VacationPlan = plan_for(self.plan.selected_dates().clone(), inputs.budget());
        Self {
            inputs,
            plan,
            ..self.clone()
        }
    }
}

/// Builds a plan whose remaining budget reflects the selection size.
fn plan_for(selected: BTreeSet<Date>, budget: u16) -> VacationPlan {
    let used: u16 = u16::try_from(selected.len()).unwrap_or(u16::MAX);
    VacationPlan::new(selected, budget.saturating_sub(used))
}

/// How a command affected the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOutcome {
    /// The command changed the state.
    Applied,
    /// The addition was refused because the budget is spent.
    RejectedOverBudget,
    /// The command had nothing to do.
    Unchanged,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the transition.
    pub new_state: PlannerState,
    /// What the command did.
    pub outcome: EditOutcome,
}
