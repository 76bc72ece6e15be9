// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Resolves the timezone argument of the date formatter to a UTC offset.
//!
//! Offsets are expressed in minutes east of UTC (`+60` for UTC+1, `-420` for
//! UTC-7). Accepted inputs, after removing every `:`:
//!
//! - `Z`, `UTC`, `GMT` and `UT`
//! - explicit offsets such as `+0530`, `-08`, `+5`, optionally prefixed with
//!   `UTC`, `GMT` or `UT`
//! - the North American abbreviations `EST`, `EDT`, `CST`, `CDT`, `MST`,
//!   `MDT`, `PST` and `PDT`
//! - IANA names (`America/New_York`), evaluated at the formatted instant
//!
//! Abbreviations are a best-effort convenience. Explicit offsets are the
//! portable form.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use ngcommon_tz::timezone_to_offset;
//!
//! let instant = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
//! assert_eq!(timezone_to_offset("+05:30", instant), Some(330));
//! assert_eq!(timezone_to_offset("America/New_York", instant), Some(-240));
//! ```

use chrono::{DateTime, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static OFFSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:UTC|GMT|UT)?([+-])(\d{1,2})(\d{2})?$").unwrap());

/// Legacy zone abbreviations understood by `Date.parse`, sorted by name.
static ABBREVIATIONS: &[(&str, i32)] = &[
    ("CDT", -300),
    ("CST", -360),
    ("EDT", -240),
    ("EST", -300),
    ("MDT", -360),
    ("MST", -420),
    ("PDT", -420),
    ("PST", -480),
];

/// Offset of `timezone` at `instant`, or `None` when the string is not
/// recognized.
pub fn timezone_to_offset<T: TimeZone>(timezone: &str, instant: DateTime<T>) -> Option<i32> {
    let compact = timezone.trim().replace(':', "");
    let upper = compact.to_ascii_uppercase();

    if matches!(upper.as_str(), "Z" | "UTC" | "GMT" | "UT") {
        return Some(0);
    }

    if let Some(captures) = OFFSET_PATTERN.captures(&upper) {
        let hours: i32 = captures[2].parse().ok()?;
        let minutes: i32 = captures
            .get(3)
            .map_or(Ok(0), |minutes| minutes.as_str().parse())
            .ok()?;
        let offset = hours * 60 + minutes;
        return Some(if &captures[1] == "-" { -offset } else { offset });
    }

    if let Ok(index) = ABBREVIATIONS.binary_search_by(|(name, _)| (*name).cmp(upper.as_str())) {
        return Some(ABBREVIATIONS[index].1);
    }

    let tz: Tz = timezone.trim().parse().ok()?;
    Some(tz_offset(&tz, instant.with_timezone(&Utc)))
}

/// Offset of the named IANA zone at `instant`.
pub fn get_offset(timezone: &str, instant: DateTime<Utc>) -> Option<i32> {
    let tz: Tz = timezone.parse().ok()?;
    Some(tz_offset(&tz, instant))
}

fn tz_offset(tz: &Tz, instant: DateTime<Utc>) -> i32 {
    instant.with_timezone(tz).offset().fix().local_minus_utc() / 60
}

/// Offset of the host zone at `instant`.
pub fn host_offset(instant: DateTime<Utc>) -> i32 {
    instant.with_timezone(&Local).offset().fix().local_minus_utc() / 60
}

/// Offset used to format `instant`: the requested zone when it resolves, the
/// host zone otherwise.
pub fn resolve_offset(timezone: Option<&str>, instant: DateTime<Utc>) -> i32 {
    match timezone {
        Some(timezone) => timezone_to_offset(timezone, instant).unwrap_or_else(|| {
            trace!(timezone, "unrecognized timezone, using the host offset");
            host_offset(instant)
        }),
        None => host_offset(instant),
    }
}

/// All IANA timezone names known to the resolver.
pub fn list_timezones() -> impl Iterator<Item = &'static str> {
    chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name())
}

#[cfg(test)]
mod tests;
