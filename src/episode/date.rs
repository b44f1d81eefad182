// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime};

/// Locale used for every date shown on the page
pub const DISPLAY_LOCALE: Locale = Locale::pt_BR;

/// Day without padding, abbreviated month, two-digit year (e.g. "8 jan 21")
const DISPLAY_FORMAT: &str = "%-d %b %y";

/// Length of the `YYYY-MM-DD` prefix
const DATE_LEN: usize = 10;

/// Timestamp formats carrying an `±HH:MM` offset, tried after RFC 3339
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Timestamp formats without an offset; these are read as UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Rewrite a trailing `Z`, `±HH` or `±HHMM` offset as `±HH:MM`
fn normalize_offset(value: &str) -> Cow<'_, str> {
    if value.len() > DATE_LEN
        && let Some(rest) = value.strip_suffix(['Z', 'z'])
    {
        return Cow::Owned(format!("{rest}+00:00"));
    }

    let Some(sign_at) = value
        .get(DATE_LEN..)
        .and_then(|time| time.rfind(['+', '-']))
    else {
        return Cow::Borrowed(value);
    };

    let (head, offset) = value.split_at(DATE_LEN + sign_at);
    let (sign, digits) = offset.split_at(1);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(value);
    }

    match digits.len() {
        2 => Cow::Owned(format!("{head}{sign}{digits}:00")),
        4 => Cow::Owned(format!("{head}{sign}{}:{}", &digits[..2], &digits[2..])),
        _ => Cow::Borrowed(value),
    }
}

/// Parse an ISO-8601 publish timestamp as sent by the episodes API
///
/// Accepts RFC 3339 plus the relaxed ISO forms: `T` or space separator,
/// optional seconds and fraction, and an optional `Z`, `±HH`, `±HHMM` or
/// `±HH:MM` offset. A bare `YYYY-MM-DD` date is midnight UTC.
pub fn parse_publish_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    let normalized = normalize_offset(value);
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Format a publish timestamp for display, in the timestamp's own offset
pub fn format_publish_date(date: &DateTime<FixedOffset>) -> String {
    date.format_localized(DISPLAY_FORMAT, DISPLAY_LOCALE).to_string()
}
