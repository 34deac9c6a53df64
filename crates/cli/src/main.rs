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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod report;

use crate::args::{Args, OutputFormat};
use crate::report::Report;
use bridgeday::{PipelineResult, PlanningInputs, run_pipeline};
use bridgeday_domain::{HolidaySummary, SourceResults, summarize};
use bridgeday_sources::{
    HolidaySource, JsonFileSource, NagerSource, OpenHolidaysSource, SourceQuery, fetch_sources,
};
use clap::Parser;
use color_eyre::{Result, eyre::Context};
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    let today: Date = OffsetDateTime::now_utc().date();
    let inputs: PlanningInputs = args
        .planning_inputs(today)
        .wrap_err("Invalid planning inputs")?;
    info!(
        year = inputs.year(),
        country = inputs.country(),
        subdivision = inputs.subdivision().unwrap_or("-"),
        budget = inputs.budget(),
        "Planning vacation"
    );

    let client: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("bridgeday/", env!("CARGO_PKG_VERSION")))
        .timeout(HTTP_TIMEOUT)
        .build()
        .wrap_err("Failed to build HTTP client")?;
    let primary: Box<dyn HolidaySource> = match &args.primary_file {
        Some(path) => boxed(JsonFileSource::named("primary file", path)),
        None => boxed(OpenHolidaysSource::new(client.clone())),
    };
    let secondary: Box<dyn HolidaySource> = match &args.secondary_file {
        Some(path) => boxed(JsonFileSource::named("secondary file", path)),
        None => boxed(NagerSource::new(client)),
    };

    let query: SourceQuery = SourceQuery::new(inputs.country(), inputs.year(), inputs.subdivision());
    let sources: SourceResults = fetch_sources(primary.as_ref(), secondary.as_ref(), &query).await;

    let result: PipelineResult = run_pipeline(&inputs, &sources)?;
    let summary: HolidaySummary = summarize(inputs.year(), &result.calendar)?;
    let report: Report<'_> = Report::new(&inputs, &result, summary);

    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!(
            "{}",
            report.to_json().wrap_err("Failed to serialize report")?
        ),
    }
    Ok(())
}

/// Installs the log subscriber; `RUST_LOG` takes precedence over `-v`/`-q`.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn boxed<S: HolidaySource + 'static>(source: S) -> Box<dyn HolidaySource> {
    Box::new(source)
}
