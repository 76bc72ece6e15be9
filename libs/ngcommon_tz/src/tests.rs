// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, TimeZone, Utc};

use crate::{get_offset, host_offset, list_timezones, resolve_offset, timezone_to_offset};

fn jan_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn jul_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 3, 12, 0, 0).unwrap()
}

#[test]
fn test_utc_names() {
    for name in ["Z", "UTC", "GMT", "UT", "utc", "z"] {
        assert_eq!(timezone_to_offset(name, jan_2024()), Some(0), "{name}");
    }
}

#[test]
fn test_explicit_offsets() {
    assert_eq!(timezone_to_offset("+0100", jan_2024()), Some(60));
    assert_eq!(timezone_to_offset("+01:00", jan_2024()), Some(60));
    assert_eq!(timezone_to_offset("-0830", jan_2024()), Some(-510));
    assert_eq!(timezone_to_offset("-08", jan_2024()), Some(-480));
    assert_eq!(timezone_to_offset("+5", jan_2024()), Some(300));
    assert_eq!(timezone_to_offset("+530", jan_2024()), Some(330));
    assert_eq!(timezone_to_offset("UTC+2", jan_2024()), Some(120));
    assert_eq!(timezone_to_offset("GMT-03:30", jan_2024()), Some(-210));
}

#[test]
fn test_abbreviations() {
    assert_eq!(timezone_to_offset("EST", jan_2024()), Some(-300));
    assert_eq!(timezone_to_offset("PDT", jan_2024()), Some(-420));
    assert_eq!(timezone_to_offset("cst", jan_2024()), Some(-360));
}

#[test]
fn test_iana_names_follow_dst() {
    assert_eq!(timezone_to_offset("America/New_York", jan_2024()), Some(-300));
    assert_eq!(timezone_to_offset("America/New_York", jul_2024()), Some(-240));
    assert_eq!(get_offset("Europe/Berlin", jul_2024()), Some(120));
    assert_eq!(get_offset("Asia/Kolkata", jan_2024()), Some(330));
}

#[test]
fn test_unrecognized() {
    assert_eq!(timezone_to_offset("Invalid/Timezone", jan_2024()), None);
    assert_eq!(timezone_to_offset("+", jan_2024()), None);
    assert_eq!(timezone_to_offset("", jan_2024()), None);
}

#[test]
fn test_resolve_offset_falls_back_to_host() {
    let host = host_offset(jan_2024());
    assert!((-14 * 60..=14 * 60).contains(&host));
    assert_eq!(resolve_offset(Some("bogus"), jan_2024()), host);
    assert_eq!(resolve_offset(None, jan_2024()), host);
    assert_eq!(resolve_offset(Some("+0200"), jan_2024()), 120);
}

#[test]
fn test_list_timezones() {
    assert!(list_timezones().any(|name| name == "America/Denver"));
}
