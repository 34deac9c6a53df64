// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static jurisdiction tables.

/// Countries the `OpenHolidays` API publishes public holidays for.
pub const OPEN_HOLIDAYS_COUNTRIES: [&str; 36] = [
    "AD", "AL", "AT", "BE", "BG", "BR", "BY", "CH", "CZ", "DE", "EE", "ES", "FR", "HR", "HU", "IE",
    "IT", "LI", "LT", "LU", "LV", "MC", "MD", "MT", "MX", "NL", "PL", "PT", "RO", "RS", "SE", "SI",
    "SK", "SM", "VA", "ZA",
];

/// Returns the subdivision preselected for a country, if it has one.
///
/// # Arguments
///
/// * `country` - ISO 3166-1 alpha-2 country code, uppercase
#[must_use]
pub fn default_subdivision(country: &str) -> Option<&'static str> {
    match country {
        "DE" => Some("DE-BE"),
        "AT" => Some("AT-9"),
        "CH" => Some("CH-ZH"),
        "AU" => Some("AU-NSW"),
        "CA" => Some("CA-ON"),
        "US" => Some("US-NY"),
        _ => None,
    }
}

/// Returns whether the `OpenHolidays` API covers a country.
#[must_use]
pub fn is_open_holidays_country(country: &str) -> bool {
    OPEN_HOLIDAYS_COUNTRIES.contains(&country)
}
