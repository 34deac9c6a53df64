// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation day allocation.
//!
//! Spends a vacation-day budget on gaps between free blocks using a
//! two-phase greedy heuristic.
//!
//! ## Invariants
//!
//! - A gap is either filled completely or left untouched
//! - Selected dates are always a subset of the given gaps' dates
//! - The number of selected dates never exceeds the budget
//! - Identical inputs always produce identical plans

use crate::gaps::Gap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use time::Date;

/// Gaps shorter than this are bridge gaps, filled first.
pub const BRIDGE_GAP_LIMIT: usize = 5;

/// The vacation days chosen for a planning run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VacationPlan {
    /// The selected vacation days.
    selected_dates: BTreeSet<Date>,
    /// Budget left after selection.
    budget_remaining: u16,
}

impl VacationPlan {
    /// Creates a plan from an explicit selection.
    ///
    /// # Arguments
    ///
    /// * `selected_dates` - The selected vacation days
    /// * `budget_remaining` - The unspent budget
    #[must_use]
    pub const fn new(selected_dates: BTreeSet<Date>, budget_remaining: u16) -> Self {
        Self {
            selected_dates,
            budget_remaining,
        }
    }

    /// Creates an empty plan that leaves the whole budget unspent.
    #[must_use]
    pub const fn empty(budget: u16) -> Self {
        Self {
            selected_dates: BTreeSet::new(),
            budget_remaining: budget,
        }
    }

    /// Returns the selected vacation days.
    #[must_use]
    pub const fn selected_dates(&self) -> &BTreeSet<Date> {
        &self.selected_dates
    }

    /// Returns the unspent budget.
    #[must_use]
    pub const fn budget_remaining(&self) -> u16 {
        self.budget_remaining
    }

    /// Returns the number of vacation days used.
    #[must_use]
    pub fn used(&self) -> usize {
        self.selected_dates.len()
    }

    /// Returns whether a date is a selected vacation day.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.selected_dates.contains(&date)
    }
}

/// Allocates a vacation-day budget across gaps.
///
/// Phase 1 fills bridge gaps (shorter than five days), shortest first,
/// breaking ties in favour of more adjacent free days. Phase 2 runs only if
/// budget remains and fills the longer gaps in order of descending
/// efficiency `(free_before + free_after + length) / length`, breaking ties
/// in favour of the shorter gap. Each phase is a single pass: a gap that
/// cannot be afforded is skipped and never revisited.
///
/// This is a greedy heuristic, not an optimizer. It can leave budget unused
/// when a different combination of gaps would have spent it, and it does
/// not guarantee the maximum total days off for a budget. A true optimum
/// would need a knapsack formulation over the gaps.
///
/// # Arguments
///
/// * `gaps` - The gaps to choose from
/// * `budget` - The number of vacation days available
///
/// # Returns
///
/// The selected days and the unspent budget. An empty budget or an empty
/// gap list yields an empty plan.
#[must_use]
pub fn allocate(gaps: &[Gap], budget: u16) -> VacationPlan {
    if budget == 0 || gaps.is_empty() {
        return VacationPlan::empty(budget);
    }

    let mut remaining: usize = usize::from(budget);
    let mut selected: BTreeSet<Date> = BTreeSet::new();

    let mut bridges: Vec<&Gap> = gaps
        .iter()
        .filter(|g| g.length() < BRIDGE_GAP_LIMIT)
        .collect();
    bridges.sort_by(|a, b| compare_bridges(a, b));
    fill_in_order(&bridges, &mut remaining, &mut selected);

    if remaining > 0 {
        let mut spans: Vec<&Gap> = gaps
            .iter()
            .filter(|g| g.length() >= BRIDGE_GAP_LIMIT)
            .collect();
        spans.sort_by(|a, b| compare_spans(a, b));
        fill_in_order(&spans, &mut remaining, &mut selected);
    }

    // remaining never exceeds the starting budget
    let budget_remaining: u16 = u16::try_from(remaining).unwrap_or(budget);
    VacationPlan::new(selected, budget_remaining)
}

/// Ascending length, then descending adjacent free days.
fn compare_bridges(a: &Gap, b: &Gap) -> Ordering {
    a.length()
        .cmp(&b.length())
        .then_with(|| b.adjacent_free().cmp(&a.adjacent_free()))
}

/// Descending efficiency, then ascending length.
///
/// Efficiencies are compared as cross-multiplied integers so that equal
/// ratios tie exactly.
fn compare_spans(a: &Gap, b: &Gap) -> Ordering {
    let left: usize = a.span_if_filled() * b.length();
    let right: usize = b.span_if_filled() * a.length();
    right
        .cmp(&left)
        .then_with(|| a.length().cmp(&b.length()))
}

fn fill_in_order(ordered: &[&Gap], remaining: &mut usize, selected: &mut BTreeSet<Date>) {
    for gap in ordered {
        if *remaining < gap.length() {
            continue;
        }
        selected.extend(gap.dates().iter().copied());
        *remaining -= gap.length();
    }
}
