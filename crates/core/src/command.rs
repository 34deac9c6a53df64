// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// A command represents a requested change to a vacation plan, as data only.
///
/// Commands are the only way to change a `PlannerState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Discard the current selection and run the optimizer.
    Optimize,
    /// Select a working day as a vacation day.
    AddVacationDay {
        /// The day to select.
        date: Date,
    },
    /// Deselect a vacation day.
    RemoveVacationDay {
        /// The day to deselect.
        date: Date,
    },
    /// Select the day if unselected, otherwise deselect it.
    ToggleVacationDay {
        /// The day to toggle.
        date: Date,
    },
    /// Deselect every vacation day.
    ClearVacation,
    /// Change the vacation-day budget, keeping the current selection.
    SetBudget {
        /// The new budget.
        budget: u16,
    },
}
