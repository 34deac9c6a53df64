// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `OpenHolidays` API, the primary holiday source.

use crate::defaults::is_open_holidays_country;
use crate::error::SourceError;
use crate::source::{HolidaySource, SourceQuery};
use bridgeday_domain::{HolidayRecord, JurisdictionScope};
use futures::future::BoxFuture;
use serde::Deserialize;
use time::Date;
use tracing::debug;

/// Public endpoint of the `OpenHolidays` API.
pub const OPEN_HOLIDAYS_BASE_URL: &str = "https://openholidaysapi.org";

const SOURCE_NAME: &str = "OpenHolidays";

/// A single holiday as the `OpenHolidays` API encodes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OpenHolidaysRecord {
    start_date: Date,
    #[serde(default)]
    name: Vec<LocalizedText>,
    #[serde(default)]
    nationwide: bool,
    #[serde(default)]
    subdivisions: Vec<SubdivisionRef>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocalizedText {
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SubdivisionRef {
    code: String,
}

impl OpenHolidaysRecord {
    /// Converts the wire record into a domain record.
    ///
    /// When the provider already filtered by subdivision, regional records
    /// are trusted as-is; otherwise they keep their subdivision codes.
    fn into_record(self, query: &SourceQuery, provider_scoped: bool) -> HolidayRecord {
        let name: String = self
            .name
            .into_iter()
            .next()
            .map(|n| n.text)
            .unwrap_or_default();

        let scope: JurisdictionScope = if self.nationwide {
            JurisdictionScope::National
        } else if provider_scoped && query.subdivision.is_some() {
            JurisdictionScope::Unrestricted
        } else {
            JurisdictionScope::Subdivision(self.subdivisions.into_iter().map(|s| s.code).collect())
        };

        HolidayRecord::new(self.start_date, &name, &name, scope)
    }
}

/// Normalizes decoded `OpenHolidays` records and filters them to the query.
pub(crate) fn normalize_open_holidays(
    records: Vec<OpenHolidaysRecord>,
    query: &SourceQuery,
    provider_scoped: bool,
) -> Vec<HolidayRecord> {
    query.retain_applicable(
        records
            .into_iter()
            .map(|record| record.into_record(query, provider_scoped))
            .collect(),
    )
}

/// Decodes an `OpenHolidays` response body.
///
/// # Errors
///
/// Returns `SourceError::Decode` if the body is not a list of holidays.
pub fn decode_open_holidays(
    body: &[u8],
    query: &SourceQuery,
) -> Result<Vec<HolidayRecord>, SourceError> {
    let records: Vec<OpenHolidaysRecord> =
        serde_json::from_slice(body).map_err(|error| SourceError::Decode {
            source_name: SOURCE_NAME,
            error,
        })?;
    Ok(normalize_open_holidays(records, query, true))
}

/// Client for the `OpenHolidays` public holiday endpoint.
#[derive(Debug, Clone)]
pub struct OpenHolidaysSource {
    client: reqwest::Client,
    base_url: String,
}

impl OpenHolidaysSource {
    /// Creates a source against the public endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, OPEN_HOLIDAYS_BASE_URL)
    }

    /// Creates a source against another endpoint.
    #[must_use]
    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_records(&self, query: &SourceQuery) -> Result<Vec<HolidayRecord>, SourceError> {
        if !is_open_holidays_country(&query.country) {
            return Err(SourceError::UnsupportedCountry {
                source_name: SOURCE_NAME,
                country: query.country.clone(),
            });
        }

        let url: String = format!("{}/PublicHolidays", self.base_url);
        let mut params: Vec<(&str, String)> = vec![
            ("countryIsoCode", query.country.clone()),
            ("validFrom", format!("{:04}-01-01", query.year)),
            ("validTo", format!("{:04}-12-31", query.year)),
            ("languageIsoCode", String::from("EN")),
        ];
        if let Some(subdivision) = &query.subdivision {
            params.push(("subdivisionCode", subdivision.clone()));
        }
        debug!(%url, country = %query.country, year = query.year, "Requesting OpenHolidays");

        let response: reqwest::Response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|error| SourceError::Transport {
                source_name: SOURCE_NAME,
                error,
            })?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                source_name: SOURCE_NAME,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| SourceError::Transport {
                source_name: SOURCE_NAME,
                error,
            })?;
        decode_open_holidays(&body, query)
    }
}

impl HolidaySource for OpenHolidaysSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn fetch<'a>(
        &'a self,
        query: &'a SourceQuery,
    ) -> BoxFuture<'a, Result<Vec<HolidayRecord>, SourceError>> {
        Box::pin(self.fetch_records(query))
    }
}
