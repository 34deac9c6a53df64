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
#![allow(clippy::multiple_crate_versions)]

mod defaults;
mod error;
mod fetch;
mod file;
mod nager;
mod open_holidays;
mod source;

#[cfg(test)]
mod tests;

pub use defaults::{OPEN_HOLIDAYS_COUNTRIES, default_subdivision, is_open_holidays_country};
pub use error::SourceError;
pub use fetch::fetch_sources;
pub use file::{JsonFileSource, decode_any};
pub use nager::{NAGER_BASE_URL, NagerSource, decode_nager};
pub use open_holidays::{OPEN_HOLIDAYS_BASE_URL, OpenHolidaysSource, decode_open_holidays};
pub use source::{HolidaySource, SourceQuery};
