// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SourceError;
use crate::source::{HolidaySource, SourceQuery};
use bridgeday_domain::{HolidayRecord, SourceResults};
use tracing::{info, warn};

/// Fetches both sources concurrently and joins their results.
///
/// Returns once both fetches have completed or failed. A failed fetch is
/// logged and replaced by an empty list; a failed primary also marks the
/// primary as unavailable so the secondary's holidays count as confirmed.
///
/// # Arguments
///
/// * `primary` - The authoritative source
/// * `secondary` - The cross-checking source
/// * `query` - The jurisdiction and year to fetch
pub async fn fetch_sources(
    primary: &dyn HolidaySource,
    secondary: &dyn HolidaySource,
    query: &SourceQuery,
) -> SourceResults {
    let (primary_result, secondary_result) =
        futures::join!(primary.fetch(query), secondary.fetch(query));

    let (primary_records, primary_available) = match primary_result {
        Ok(records) => (logged(primary.name(), records), true),
        Err(error) => (substitute(primary.name(), &error), false),
    };
    let secondary_records: Vec<HolidayRecord> = match secondary_result {
        Ok(records) => logged(secondary.name(), records),
        Err(error) => substitute(secondary.name(), &error),
    };

    SourceResults {
        primary: primary_records,
        primary_available,
        secondary: secondary_records,
    }
}

fn logged(source: &str, records: Vec<HolidayRecord>) -> Vec<HolidayRecord> {
    info!(source, count = records.len(), "Fetched holidays");
    records
}

fn substitute(source: &str, error: &SourceError) -> Vec<HolidayRecord> {
    warn!(source, %error, "Holiday source unavailable, continuing without it");
    Vec::new()
}
