// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday data read from a local JSON file.
//!
//! Files hold a saved response from either provider. The format is
//! detected from the record shape, so an `OpenHolidays` dump and a
//! Nager.Date dump can be used interchangeably as either source.

use crate::error::SourceError;
use crate::nager::{NagerRecord, normalize_nager};
use crate::open_holidays::{OpenHolidaysRecord, normalize_open_holidays};
use crate::source::{HolidaySource, SourceQuery};
use bridgeday_domain::HolidayRecord;
use futures::future::BoxFuture;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_NAME: &str = "file";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireRecords {
    OpenHolidays(Vec<OpenHolidaysRecord>),
    Nager(Vec<NagerRecord>),
}

/// Decodes a saved provider response in either wire format.
///
/// Regional `OpenHolidays` records keep their subdivision codes, since a
/// saved file is not necessarily filtered to the query's subdivision.
///
/// # Errors
///
/// Returns `SourceError::Decode` if the content matches neither format.
pub fn decode_any(body: &[u8], query: &SourceQuery) -> Result<Vec<HolidayRecord>, SourceError> {
    decode_named(body, query, DEFAULT_NAME)
}

fn decode_named(
    body: &[u8],
    query: &SourceQuery,
    source_name: &'static str,
) -> Result<Vec<HolidayRecord>, SourceError> {
    let records: WireRecords = serde_json::from_slice(body)
        .map_err(|error| SourceError::Decode { source_name, error })?;
    Ok(match records {
        WireRecords::OpenHolidays(records) => normalize_open_holidays(records, query, false),
        WireRecords::Nager(records) => normalize_nager(records, query),
    })
}

/// A holiday source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    name: &'static str,
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from a file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::named(DEFAULT_NAME, path)
    }

    /// Creates a source reading from a file under a role name.
    ///
    /// The name appears in logs and errors, which tells two file sources apart.
    #[must_use]
    pub fn named(name: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }

    /// Returns the file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self, query: &SourceQuery) -> Result<Vec<HolidayRecord>, SourceError> {
        debug!(source = self.name, path = %self.path.display(), "Reading holiday file");
        let body: Vec<u8> = tokio::fs::read(&self.path)
            .await
            .map_err(|error| SourceError::Io {
                path: self.path.clone(),
                error,
            })?;
        decode_named(&body, query, self.name)
    }
}

impl HolidaySource for JsonFileSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn fetch<'a>(
        &'a self,
        query: &'a SourceQuery,
    ) -> BoxFuture<'a, Result<Vec<HolidayRecord>, SourceError>> {
        Box::pin(self.read_records(query))
    }
}
