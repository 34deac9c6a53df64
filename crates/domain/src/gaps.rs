// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gap detection over a classified day sequence.
//!
//! A gap is a maximal run of consecutive working days. Each gap records the
//! length of the free runs on either side, which is what makes filling it
//! valuable.

use crate::sequence::Day;
use serde::{Deserialize, Serialize};
use time::Date;

/// A maximal run of consecutive non-free days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// The working days in this gap, in date order. Never empty.
    dates: Vec<Date>,
    /// Length of the free run immediately before the gap.
    free_before: usize,
    /// Length of the free run immediately after the gap.
    free_after: usize,
}

impl Gap {
    /// Creates a new `Gap`.
    ///
    /// # Arguments
    ///
    /// * `dates` - The working days of the gap, in date order
    /// * `free_before` - Length of the preceding free run (0 if none)
    /// * `free_after` - Length of the following free run (0 if none)
    #[must_use]
    pub const fn new(dates: Vec<Date>, free_before: usize, free_after: usize) -> Self {
        Self {
            dates,
            free_before,
            free_after,
        }
    }

    /// Returns the working days of this gap.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the number of working days in this gap.
    #[must_use]
    pub fn length(&self) -> usize {
        self.dates.len()
    }

    /// Returns the length of the free run before this gap.
    #[must_use]
    pub const fn free_before(&self) -> usize {
        self.free_before
    }

    /// Returns the length of the free run after this gap.
    #[must_use]
    pub const fn free_after(&self) -> usize {
        self.free_after
    }

    /// Returns the free days adjacent to this gap on both sides.
    #[must_use]
    pub const fn adjacent_free(&self) -> usize {
        self.free_before + self.free_after
    }

    /// Returns the contiguous days off produced by filling this gap.
    #[must_use]
    pub fn span_if_filled(&self) -> usize {
        self.free_before + self.free_after + self.dates.len()
    }
}

/// Partitions a day sequence into gaps, in date order.
///
/// The sequence is scanned once. A free run that precedes a gap is recorded
/// as that gap's `free_before`, including a free run at the very start of
/// the sequence. A gap still open when the sequence ends gets
/// `free_after = 0`.
#[must_use]
pub fn find_gaps(days: &[Day]) -> Vec<Gap> {
    let mut gaps: Vec<Gap> = Vec::new();
    let mut current: Vec<Date> = Vec::new();
    let mut free_before: usize = 0;
    let mut index: usize = 0;

    while index < days.len() {
        if days[index].free {
            let run: usize = free_run_length(days, index);
            if !current.is_empty() {
                gaps.push(Gap::new(std::mem::take(&mut current), free_before, run));
            }
            free_before = run;
            index += run;
        } else {
            current.push(days[index].date);
            index += 1;
        }
    }

    if !current.is_empty() {
        gaps.push(Gap::new(current, free_before, 0));
    }

    gaps
}

/// Counts consecutive free days starting at `start`.
fn free_run_length(days: &[Day], start: usize) -> usize {
    days[start..].iter().take_while(|d| d.free).count()
}
