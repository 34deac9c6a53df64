// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidRange {
        start: date!(2025 - 06 - 02),
        end: date!(2025 - 06 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: start 2025-06-02 is after end 2025-06-01"
    );

    let err: DomainError = DomainError::InvalidYear(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid year: test");

    let err: DomainError = DomainError::InvalidCountryCode(String::from("XYZ"));
    assert_eq!(
        format!("{err}"),
        "Invalid country code 'XYZ': expected two letters"
    );

    let err: DomainError = DomainError::DateOutsideYear {
        date: date!(2026 - 01 - 01),
        year: 2025,
    };
    assert_eq!(
        format!("{err}"),
        "Date 2026-01-01 is outside planning year 2025"
    );

    let err: DomainError = DomainError::NotAWorkingDay {
        date: date!(2025 - 05 - 03),
    };
    assert_eq!(
        format!("{err}"),
        "Date 2025-05-03 is already a weekend day or public holiday"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("advancing"),
    };
    assert_eq!(format!("{err}"), "Date arithmetic overflow while advancing");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2025-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2025-13-01': bad month"
    );
}
