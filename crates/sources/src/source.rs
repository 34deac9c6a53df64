// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SourceError;
use bridgeday_domain::HolidayRecord;
use futures::future::BoxFuture;

/// The jurisdiction and year to fetch holidays for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceQuery {
    /// ISO 3166-1 alpha-2 country code, uppercase.
    pub country: String,
    /// The calendar year.
    pub year: i32,
    /// Optional ISO 3166-2 subdivision code.
    pub subdivision: Option<String>,
}

impl SourceQuery {
    /// Creates a new query.
    #[must_use]
    pub fn new(country: &str, year: i32, subdivision: Option<&str>) -> Self {
        Self {
            country: country.to_string(),
            year,
            subdivision: subdivision.map(str::to_string),
        }
    }

    /// Keeps only the records observed in this query's jurisdiction.
    #[must_use]
    pub fn retain_applicable(&self, records: Vec<HolidayRecord>) -> Vec<HolidayRecord> {
        records
            .into_iter()
            .filter(|record| record.scope.applies_to(self.subdivision.as_deref()))
            .collect()
    }
}

/// A provider of public holiday records.
///
/// Implementations return records already normalized into domain types
/// and filtered to the query's jurisdiction.
pub trait HolidaySource: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetches the holidays for a query.
    fn fetch<'a>(
        &'a self,
        query: &'a SourceQuery,
    ) -> BoxFuture<'a, Result<Vec<HolidayRecord>, SourceError>>;
}
