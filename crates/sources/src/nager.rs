// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Nager.Date API, the secondary holiday source.

use crate::error::SourceError;
use crate::source::{HolidaySource, SourceQuery};
use bridgeday_domain::{HolidayRecord, JurisdictionScope};
use futures::future::BoxFuture;
use serde::Deserialize;
use time::Date;
use tracing::debug;

/// Public endpoint of the Nager.Date API.
pub const NAGER_BASE_URL: &str = "https://date.nager.at/api/v3";

const SOURCE_NAME: &str = "Nager.Date";

/// A single holiday as the Nager.Date API encodes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NagerRecord {
    date: Date,
    local_name: String,
    name: String,
    #[serde(default)]
    counties: Option<Vec<String>>,
}

impl NagerRecord {
    fn into_record(self) -> HolidayRecord {
        let scope: JurisdictionScope = match self.counties {
            Some(counties) if !counties.is_empty() => JurisdictionScope::Subdivision(counties),
            _ => JurisdictionScope::National,
        };
        HolidayRecord::new(self.date, &self.local_name, &self.name, scope)
    }
}

/// Normalizes decoded Nager.Date records and filters them to the query.
pub(crate) fn normalize_nager(records: Vec<NagerRecord>, query: &SourceQuery) -> Vec<HolidayRecord> {
    query.retain_applicable(records.into_iter().map(NagerRecord::into_record).collect())
}

/// Decodes a Nager.Date response body.
///
/// An empty body means the country has no data and decodes to no records.
///
/// # Errors
///
/// Returns `SourceError::Decode` if the body is not a list of holidays.
pub fn decode_nager(body: &[u8], query: &SourceQuery) -> Result<Vec<HolidayRecord>, SourceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let records: Vec<NagerRecord> =
        serde_json::from_slice(body).map_err(|error| SourceError::Decode {
            source_name: SOURCE_NAME,
            error,
        })?;
    Ok(normalize_nager(records, query))
}

/// Client for the Nager.Date public holiday endpoint.
#[derive(Debug, Clone)]
pub struct NagerSource {
    client: reqwest::Client,
    base_url: String,
}

impl NagerSource {
    /// Creates a source against the public endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, NAGER_BASE_URL)
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
        let url: String = format!(
            "{}/PublicHolidays/{}/{}",
            self.base_url, query.year, query.country
        );
        debug!(%url, "Requesting Nager.Date");

        let response: reqwest::Response =
            self.client
                .get(&url)
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
        decode_nager(&body, query)
    }
}

impl HolidaySource for NagerSource {
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
