// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bridgeday::{CoreError, PlanningInputs, default_start_date};
use bridgeday_domain::{normalize_country_code, parse_iso_date};
use bridgeday_sources::default_subdivision;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Bridgeday - plan vacation days around public holidays
#[derive(Debug, Parser)]
#[command(name = "bridgeday", author, version, about, long_about = None)]
pub struct Args {
    /// Planning year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// ISO 3166-1 alpha-2 country code
    #[arg(short, long, default_value = "DE")]
    pub country: String,

    /// ISO 3166-2 subdivision code (defaults to the country's preset, if any)
    #[arg(short, long, conflicts_with = "national")]
    pub subdivision: Option<String>,

    /// Plan with country-wide holidays only
    #[arg(long)]
    pub national: bool,

    /// Number of vacation days to spend
    #[arg(short, long, default_value_t = 20)]
    pub budget: u16,

    /// First day the optimizer may use, YYYY-MM-DD (defaults to today in the current year)
    #[arg(long, value_parser = parse_iso_date)]
    pub start_date: Option<Date>,

    /// Read primary holidays from a saved JSON response instead of `OpenHolidays`
    #[arg(long)]
    pub primary_file: Option<PathBuf>,

    /// Read secondary holidays from a saved JSON response instead of Nager.Date
    #[arg(long)]
    pub secondary_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

/// How the plan is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Machine-readable JSON document
    Json,
}

impl Args {
    /// Returns the log level selected with `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Resolves the command line into validated planning inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the year, country, or start date is invalid.
    pub fn planning_inputs(&self, today: Date) -> Result<PlanningInputs, CoreError> {
        let year: i32 = self.year.unwrap_or_else(|| today.year());
        let country: String = normalize_country_code(&self.country)?;
        let start_date: Date = match self.start_date {
            Some(date) => date,
            None => default_start_date(year, today)?,
        };

        let subdivision: Option<&str> = if self.national {
            None
        } else {
            self.subdivision
                .as_deref()
                .or_else(|| default_subdivision(&country))
        };

        PlanningInputs::new(year, &country, subdivision, self.budget, start_date)
    }
}
