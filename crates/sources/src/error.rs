// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for holiday sources.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching or decoding holiday data.
///
/// None of these are fatal to planning: the fetch join replaces a failed
/// source with an empty record list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request could not be completed.
    #[error("Request to {source_name} failed: {error}")]
    Transport {
        source_name: &'static str,
        #[source]
        error: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{source_name} returned HTTP {status}")]
    Status {
        source_name: &'static str,
        status: u16,
    },

    /// The response body was not valid holiday data.
    #[error("Could not decode {source_name} response: {error}")]
    Decode {
        source_name: &'static str,
        #[source]
        error: serde_json::Error,
    },

    /// The provider does not cover the requested country.
    #[error("{source_name} does not cover country {country}")]
    UnsupportedCountry {
        source_name: &'static str,
        country: String,
    },

    /// A holiday file could not be read.
    #[error("Could not read holiday file {}: {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}
