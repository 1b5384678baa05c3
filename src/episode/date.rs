// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

/// Abbreviated month names in Brazilian Portuguese, January first
const PT_BR_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// ISO-8601 forms with a `±hh`, `±hhmm` or `±hh:mm` offset that RFC 3339 rejects
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
];

/// Parse an ISO-8601 publish timestamp.
///
/// Strict RFC 3339 first, then other offset forms; timestamps without an
/// offset are taken as UTC.
pub fn parse_published_at(date_str: &str) -> Option<DateTime<FixedOffset>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt);
        }
    }

    // `Z` on a form RFC 3339 does not cover, e.g. minute precision
    let naive_str = date_str.strip_suffix(['Z', 'z']).unwrap_or(date_str);
    parse_relaxed(naive_str).map(|naive| naive.and_utc().fixed_offset())
}

fn parse_relaxed(date_str: &str) -> Option<NaiveDateTime> {
    let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format as `d MMM yy` in Brazilian Portuguese, e.g. `10 mai 21`
pub fn format_published_at(dt: &DateTime<FixedOffset>) -> String {
    let month = PT_BR_MONTHS[dt.month0() as usize];
    format!("{} {} {:02}", dt.day(), month, dt.year().rem_euclid(100))
}
