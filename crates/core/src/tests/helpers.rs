// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PlannerState, PlanningInputs};
use bridgeday_domain::{HolidayRecord, SourceResults};
use time::macros::date;

pub fn create_test_inputs(budget: u16) -> PlanningInputs {
    PlanningInputs::new(2025, "DE", Some("DE-BE"), budget, date!(2025 - 01 - 01)).unwrap()
}

/// Labour Day 2025 falls on a Thursday, leaving Friday May 2 as a one-day bridge.
pub fn create_labour_day_sources() -> SourceResults {
    SourceResults {
        primary: vec![HolidayRecord::national(
            date!(2025 - 05 - 01),
            "Labour Day",
            "Labour Day",
        )],
        primary_available: true,
        secondary: vec![
            HolidayRecord::national(date!(2025 - 05 - 01), "Tag der Arbeit", "Labour Day"),
            HolidayRecord::national(date!(2025 - 12 - 24), "Heiligabend", "Christmas Eve"),
        ],
    }
}

pub fn create_test_state(budget: u16) -> PlannerState {
    PlannerState::new(create_test_inputs(budget), &create_labour_day_sources())
}
