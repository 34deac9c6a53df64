// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::pipeline::optimize;
use crate::state::{EditOutcome, PlannerState, PlanningInputs, TransitionResult};
use bridgeday_domain::{DomainError, VacationPlan, is_free_day, validate_date_in_year};
use std::collections::BTreeSet;
use time::Date;
use tracing::debug;

/// Applies a command to the current state, producing a new state.
///
/// This function is pure: the given state is never modified.
///
/// # Arguments
///
/// * `state` - The current planner state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the edit outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An added date is outside the planning year
/// - An added date is a weekend day or public holiday
/// - The planning range cannot be sequenced
pub fn apply(state: &PlannerState, command: Command) -> Result<TransitionResult, CoreError> {
    debug!(?command, "Applying planner command");
    match command {
        Command::Optimize => {
            let plan: VacationPlan = optimize(&state.inputs, &state.calendar)?;
            let new_state: PlannerState = PlannerState {
                plan,
                ..state.clone()
            };
            Ok(applied(new_state))
        }
        Command::AddVacationDay { date } => add_day(state, date),
        Command::RemoveVacationDay { date } => Ok(remove_day(state, date)),
        Command::ToggleVacationDay { date } => {
            if state.plan.contains(date) {
                Ok(remove_day(state, date))
            } else {
                add_day(state, date)
            }
        }
        Command::ClearVacation => {
            if state.plan.used() == 0 {
                return Ok(unchanged(state));
            }
            Ok(applied(state.with_selection(BTreeSet::new())))
        }
        Command::SetBudget { budget } => {
            if budget == state.inputs.budget() {
                return Ok(unchanged(state));
            }
            let inputs: PlanningInputs = state.inputs.with_budget(budget);
            Ok(applied(state.with_inputs(inputs)))
        }
    }
}

fn add_day(state: &PlannerState, date: Date) -> Result<TransitionResult, CoreError> {
    validate_date_in_year(date, state.inputs.year())?;
    if is_free_day(date, &state.calendar) {
        return Err(CoreError::DomainViolation(DomainError::NotAWorkingDay {
            date,
        }));
    }
    if state.plan.contains(date) {
        return Ok(unchanged(state));
    }
    if state.plan.used() >= usize::from(state.inputs.budget()) {
        debug!(%date, budget = state.inputs.budget(), "Budget spent, addition rejected");
        return Ok(TransitionResult {
            new_state: state.clone(),
            outcome: EditOutcome::RejectedOverBudget,
        });
    }

    let mut selected: BTreeSet<Date> = state.plan.selected_dates().clone();
    selected.insert(date);
    Ok(applied(state.with_selection(selected)))
}

fn remove_day(state: &PlannerState, date: Date) -> TransitionResult {
    if !state.plan.contains(date) {
        return unchanged(state);
    }
    let mut selected: BTreeSet<Date> = state.plan.selected_dates().clone();
    selected.remove(&date);
    applied(state.with_selection(selected))
}

const fn applied(new_state: PlannerState) -> TransitionResult {
    TransitionResult {
        new_state,
        outcome: EditOutcome::Applied,
    }
}

fn unchanged(state: &PlannerState) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        outcome: EditOutcome::Unchanged,
    }
}
