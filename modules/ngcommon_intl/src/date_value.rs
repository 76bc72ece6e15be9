// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Coercion of the date formatter's input into an instant.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc,
};
use ngcommon_numbers::str_to_number;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormatError, Result};

static DATE_ONLY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}(-\d{1,2}(-\d{1,2})?)?)$").unwrap());

static ISO8601_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})-?(\d\d)-?(\d\d)(?:T(\d\d)(?::?(\d\d)(?::?(\d\d)(?:\.(\d+))?)?)?(Z|([+-])(\d\d):?(\d\d))?)?$",
    )
    .unwrap()
});

/// A value the date formatter accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateLike<'a> {
    /// An absolute point in time.
    Instant(DateTime<Utc>),
    /// A wall-clock time in the host zone.
    Local(NaiveDateTime),
    /// Milliseconds since the Unix epoch.
    EpochMillis(f64),
    /// A date string, parsed permissively.
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateLike<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        DateLike::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for DateLike<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateLike::Instant(value.with_timezone(&Utc))
    }
}

impl From<DateTime<Local>> for DateLike<'_> {
    fn from(value: DateTime<Local>) -> Self {
        DateLike::Instant(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for DateLike<'_> {
    fn from(value: NaiveDateTime) -> Self {
        DateLike::Local(value)
    }
}

impl From<NaiveDate> for DateLike<'_> {
    fn from(value: NaiveDate) -> Self {
        DateLike::Local(value.and_time(NaiveTime::MIN))
    }
}

impl From<f64> for DateLike<'_> {
    fn from(value: f64) -> Self {
        DateLike::EpochMillis(value)
    }
}

impl From<i64> for DateLike<'_> {
    fn from(value: i64) -> Self {
        DateLike::EpochMillis(value as f64)
    }
}

impl<'a> From<&'a str> for DateLike<'a> {
    fn from(value: &'a str) -> Self {
        DateLike::Text(value)
    }
}

impl<'a> From<&'a String> for DateLike<'a> {
    fn from(value: &'a String) -> Self {
        DateLike::Text(value)
    }
}

fn invalid_date(value: impl std::fmt::Display) -> FormatError {
    FormatError::InvalidArgument(format!("Unable to convert \"{value}\" into a date"))
}

/// Converts `value` into an instant.
///
/// Strings are tried, after trimming, as `yyyy[-m[-d]]` (a local calendar
/// date), as a numeric epoch, as ISO 8601, then as RFC 3339 or RFC 2822.
pub fn to_date(value: DateLike<'_>) -> Result<DateTime<Utc>> {
    match value {
        DateLike::Instant(instant) => Ok(instant),
        DateLike::Local(naive) => Ok(local_to_utc(naive)),
        DateLike::EpochMillis(millis) => from_epoch_millis(millis),
        DateLike::Text(text) => parse_date(text),
    }
}

fn from_epoch_millis(millis: f64) -> Result<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(invalid_date(millis));
    }
    Utc.timestamp_millis_opt(millis.trunc() as i64)
        .single()
        .ok_or_else(|| invalid_date(millis))
}

fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let text = value.trim();

    if DATE_ONLY_REGEX.is_match(text) {
        let mut parts = text.split('-').map(|part| part.parse::<i64>().unwrap_or(1));
        let year = parts.next().unwrap_or(1970);
        let month = parts.next().unwrap_or(1);
        let day = parts.next().unwrap_or(1);
        return create_date(year, month - 1, day)
            .map(|date| local_to_utc(date.and_time(NaiveTime::MIN)))
            .ok_or_else(|| invalid_date(value));
    }

    if let Ok(millis) = str_to_number(text) {
        return from_epoch_millis(millis);
    }

    if let Some(captures) = ISO8601_DATE_REGEX.captures(text) {
        return iso_string_to_date(&captures).ok_or_else(|| invalid_date(value));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Ok(instant.with_timezone(&Utc));
    }

    Err(invalid_date(value))
}

fn iso_string_to_date(captures: &regex::Captures<'_>) -> Option<DateTime<Utc>> {
    let number = |index: usize| -> Option<i64> {
        captures
            .get(index)
            .map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let (tz_hours, tz_minutes) = match captures.get(9) {
        Some(sign) => {
            let sign = if sign.as_str() == "-" { -1 } else { 1 };
            (sign * number(10)?, sign * number(11)?)
        },
        None => (0, 0),
    };

    let date = create_date(number(1)?, number(2)? - 1, number(3)?)?;

    // first three fraction digits, truncated
    let millis = captures.get(7).map_or(0, |fraction| {
        let digits = fraction.as_str();
        let digits = digits.get(..3).unwrap_or(digits);
        let scale = 10i64.pow(3 - digits.len() as u32);
        digits.parse::<i64>().unwrap_or(0) * scale
    });

    let wall = date.and_time(NaiveTime::MIN)
        + Duration::hours(number(4)? - tz_hours)
        + Duration::minutes(number(5)? - tz_minutes)
        + Duration::seconds(number(6)?)
        + Duration::milliseconds(millis);

    Some(if captures.get(8).is_some() {
        Utc.from_utc_datetime(&wall)
    } else {
        local_to_utc(wall)
    })
}

/// Builds a calendar date from a zero-based month and a day of month,
/// carrying overflow into the next unit (`month = 12` is January of the next
/// year, `day = 0` the last day of the previous month).
pub fn create_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month.div_euclid(12))?;
    let month = month.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)
}

/// Interprets a wall-clock time in the host zone. Times skipped by a DST
/// transition are read with the offset in effect just before it.
pub fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| {
            let offset = Local.offset_from_utc_datetime(&naive);
            Utc.from_utc_datetime(&(naive - offset))
        })
}

pub(crate) fn weekday_of(date: NaiveDate) -> i64 {
    date.weekday().num_days_from_sunday() as i64
}
