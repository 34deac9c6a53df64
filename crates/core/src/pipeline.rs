// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The end-to-end planning pipeline.

use crate::error::CoreError;
use crate::state::{PlannerState, PlanningInputs};
use bridgeday_domain::{
    CalendarMap, Day, Gap, SourceResults, Stats, VacationPlan, Warning, allocate, find_gaps,
    report, sequence_days, year_bounds,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything a single planning run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The reconciled holiday calendar.
    pub calendar: CalendarMap,
    /// Holidays reported only by the secondary source, sorted by date.
    pub warnings: Vec<Warning>,
    /// The optimized selection.
    pub plan: VacationPlan,
    /// Statistics for the selection, absent when nothing was selected.
    pub stats: Option<Stats>,
}

/// Runs the optimizer over a reconciled calendar.
///
/// Only days from the start date through December 31 are considered.
///
/// # Errors
///
/// Returns an error if the date range cannot be sequenced.
pub fn optimize(inputs: &PlanningInputs, calendar: &CalendarMap) -> Result<VacationPlan, CoreError> {
    let (_, last) = year_bounds(inputs.year())?;
    let days: Vec<Day> = sequence_days(inputs.start_date(), last, calendar)?;
    let gaps: Vec<Gap> = find_gaps(&days);
    debug!(
        start = %inputs.start_date(),
        days = days.len(),
        gaps = gaps.len(),
        "Sequenced planning range"
    );

    let plan: VacationPlan = allocate(&gaps, inputs.budget());
    debug!(
        used = plan.used(),
        remaining = plan.budget_remaining(),
        "Allocated vacation budget"
    );
    Ok(plan)
}

/// Runs the full pipeline: reconcile, sequence, find gaps, allocate, report.
///
/// This is a pure function of its arguments. The same inputs and source
/// results always produce the same plan.
///
/// # Arguments
///
/// * `inputs` - The validated planning inputs
/// * `sources` - The fetched holiday records
///
/// # Errors
///
/// Returns an error if the planning year cannot be sequenced.
pub fn run_pipeline(
    inputs: &PlanningInputs,
    sources: &SourceResults,
) -> Result<PipelineResult, CoreError> {
    let state: PlannerState = PlannerState::new(inputs.clone(), sources);
    debug!(
        holidays = state.calendar.len(),
        warnings = state.warnings.len(),
        primary_available = sources.primary_available,
        "Reconciled holiday sources"
    );

    let plan: VacationPlan = optimize(inputs, &state.calendar)?;
    let stats: Option<Stats> = report(inputs.year(), &state.calendar, plan.selected_dates())?;

    info!(
        year = inputs.year(),
        country = inputs.country(),
        subdivision = inputs.subdivision().unwrap_or("-"),
        used = plan.used(),
        total_days_off = stats.as_ref().map_or(0, |s| s.total_days_off),
        "Planning complete"
    );

    Ok(PipelineResult {
        calendar: state.calendar,
        warnings: state.warnings,
        plan,
        stats,
    })
}
