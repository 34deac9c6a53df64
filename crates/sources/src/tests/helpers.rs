// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{HolidaySource, SourceError, SourceQuery};
use bridgeday_domain::HolidayRecord;
use futures::future::BoxFuture;

/// Saved `OpenHolidays` response for Germany, 2025 (abridged).
pub const OPEN_HOLIDAYS_DE_2025: &str = r#"[
  {
    "id": "a1",
    "startDate": "2025-01-01",
    "endDate": "2025-01-01",
    "type": "Public",
    "name": [{ "language": "EN", "text": "New Year's Day" }],
    "nationwide": true
  },
  {
    "id": "a2",
    "startDate": "2025-03-08",
    "endDate": "2025-03-08",
    "type": "Public",
    "name": [{ "language": "EN", "text": "International Women's Day" }],
    "nationwide": false,
    "subdivisions": [{ "code": "DE-BE", "shortName": "BE" }, { "code": "DE-MV", "shortName": "MV" }]
  },
  {
    "id": "a3",
    "startDate": "2025-11-19",
    "endDate": "2025-11-19",
    "type": "Public",
    "name": [{ "language": "EN", "text": "Day of Repentance and Prayer" }],
    "nationwide": false,
    "subdivisions": [{ "code": "DE-SN", "shortName": "SN" }]
  }
]"#;

/// Saved Nager.Date response for Germany, 2025 (abridged).
pub const NAGER_DE_2025: &str = r#"[
  {
    "date": "2025-01-01",
    "localName": "Neujahr",
    "name": "New Year's Day",
    "countryCode": "DE",
    "fixed": false,
    "global": true,
    "counties": null,
    "launchYear": 1967,
    "types": ["Public"]
  },
  {
    "date": "2025-03-08",
    "localName": "Internationaler Frauentag",
    "name": "International Women's Day",
    "countryCode": "DE",
    "fixed": false,
    "global": false,
    "counties": ["DE-BE", "DE-MV"],
    "launchYear": null,
    "types": ["Public"]
  },
  {
    "date": "2025-11-19",
    "localName": "Buß- und Bettag",
    "name": "Repentance and Prayer Day",
    "countryCode": "DE",
    "fixed": false,
    "global": false,
    "counties": ["DE-SN"],
    "launchYear": null,
    "types": ["Public"]
  }
]"#;

pub fn national_query() -> SourceQuery {
    SourceQuery::new("DE", 2025, None)
}

pub fn berlin_query() -> SourceQuery {
    SourceQuery::new("DE", 2025, Some("DE-BE"))
}

/// A source answering from memory, or failing when it holds no records.
pub struct CannedSource {
    pub name: &'static str,
    pub records: Option<Vec<HolidayRecord>>,
}

impl HolidaySource for CannedSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn fetch<'a>(
        &'a self,
        query: &'a SourceQuery,
    ) -> BoxFuture<'a, Result<Vec<HolidayRecord>, SourceError>> {
        Box::pin(async move {
            self.records
                .clone()
                .ok_or_else(|| SourceError::UnsupportedCountry {
                    source_name: self.name,
                    country: query.country.clone(),
                })
        })
    }
}
