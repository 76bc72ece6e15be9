// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use ngcommon_intl::{
    format_currency, format_date, format_number, format_percent, get_currency_symbol,
    get_plural_category, CurrencyDisplay, CurrencyFormat, EngineConfig, ErrorKind, FormatEngine,
    LocaleRegistry,
};
use ngcommon_locale::data;
use rand::Rng;

#[test]
fn formats_decimals() {
    assert_eq!(format_number(1234567, "en-US", None).unwrap(), "1,234,567");
    assert_eq!(format_number(-1234.5, "en", None).unwrap(), "-1,234.5");
    assert_eq!(format_number(9.995, "en", Some("1.2-2")).unwrap(), "10.00");
    assert_eq!(format_number(3.1, "en", Some("3.1-1")).unwrap(), "003.1");
    assert_eq!(format_number("1234.5", "de", None).unwrap(), "1.234,5");
    assert_eq!(
        format_number(1234567.891, "fr", None).unwrap(),
        "1\u{202f}234\u{202f}567,891"
    );
}

#[test]
fn rejects_bad_number_input() {
    let error = format_number(1.0, "en", Some("1.4-2")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let error = format_number(1.0, "en", Some("x.1")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let error = format_number("abc", "en", None).unwrap_err();
    assert_eq!(error.to_string(), "abc is not a number");
}

#[test]
fn formats_percentages() {
    assert_eq!(format_percent(0.255, "en-US", Some("1.0-0")).unwrap(), "26%");
    assert_eq!(format_percent(1.5, "en", None).unwrap(), "150%");
    assert_eq!(format_percent(0.5, "de", None).unwrap(), "50\u{a0}%");
}

#[test]
fn formats_currencies() {
    let engine = FormatEngine::default();
    assert_eq!(
        engine
            .format_currency_display(1.0, "en", &CurrencyDisplay::Symbol, Some("CAD"), None)
            .unwrap(),
        "CA$1.00"
    );
    assert_eq!(
        engine
            .format_currency_display(1.0, "en", &CurrencyDisplay::SymbolNarrow, Some("CAD"), None)
            .unwrap(),
        "$1.00"
    );
    assert_eq!(
        engine
            .format_currency_display(1234.5, "en", &CurrencyDisplay::Symbol, Some("JPY"), None)
            .unwrap(),
        "¥1,235"
    );
    assert_eq!(
        format_currency(1234.56, "de", "€", Some("EUR"), None).unwrap(),
        "1.234,56\u{a0}€"
    );
    assert_eq!(
        format_currency(-5, "en", "$", None, None).unwrap(),
        "-$5.00"
    );
}

#[test]
fn resolves_currency_symbols_by_locale_id() {
    assert_eq!(get_currency_symbol("CAD", CurrencyFormat::Narrow, None).unwrap(), "$");
    assert_eq!(get_currency_symbol("CAD", CurrencyFormat::Wide, None).unwrap(), "CA$");
    assert_eq!(
        get_currency_symbol("USD", CurrencyFormat::Wide, Some("fr")).unwrap(),
        "$US"
    );
}

#[test]
fn rejects_oversized_digit_counts() {
    for digits_info in ["1.0-2147483648", "4294967297.0-0", "1.4294967296-4294967296"] {
        let error = format_number(1.5, "en", Some(digits_info)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument, "{digits_info}");
    }
}

#[test]
fn formats_local_dates() {
    let date = NaiveDate::from_ymd_opt(2010, 9, 3)
        .unwrap()
        .and_hms_opt(12, 5, 8)
        .unwrap();
    assert_eq!(format_date(date, "mediumDate", "en-US", None).unwrap(), "Sep 3, 2010");
    assert_eq!(format_date(date, "shortTime", "en-US", None).unwrap(), "12:05 PM");
    assert_eq!(format_date(date, "dd/MM/yyyy", "en", None).unwrap(), "03/09/2010");
    assert_eq!(
        format_date("2016-09-19", "fullDate", "en-US", None).unwrap(),
        "Monday, September 19, 2016"
    );
}

#[test]
fn formats_in_explicit_timezones() {
    let date = Utc.with_ymd_and_hms(2016, 9, 19, 23, 30, 0).unwrap();
    assert_eq!(
        format_date(date, "yyyy-MM-dd HH:mm Z", "en", Some("+0100")).unwrap(),
        "2016-09-20 00:30 +0100"
    );
    assert_eq!(
        format_date(date, "HH:mm Z", "en", Some("-03:30")).unwrap(),
        "20:00 -0330"
    );
    assert_eq!(
        format_date(date, "HH:mm ZZZZ", "en", Some("UTC")).unwrap(),
        "23:30 GMT+00:00"
    );
    assert_eq!(
        format_date(date, "EEEE HH:mm", "de", Some("Europe/Berlin")).unwrap(),
        "Dienstag 01:30"
    );
}

#[test]
fn reports_invalid_dates() {
    let error = format_date("not a date", "mediumDate", "en", None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        error.to_string(),
        "Unable to convert \"not a date\" into a date"
    );
}

#[test]
fn selects_plural_cases() {
    let cases = ["=0", "one", "other"];
    assert_eq!(get_plural_category(0.0, &cases, "en").unwrap(), "=0");
    assert_eq!(get_plural_category(1.0, &cases, "en").unwrap(), "one");
    assert_eq!(get_plural_category(0.5, &["one", "other"], "fr").unwrap(), "one");
    assert_eq!(get_plural_category(7.0, &cases, "de").unwrap(), "other");

    let error = get_plural_category(7.0, &["one"], "en").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoPluralMatch);
}

#[test]
fn reports_missing_locales() {
    let error = format_number(1, "xx", None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MissingLocaleData);
    assert_eq!(
        error.to_string(),
        "Missing locale data for the locale \"xx\"."
    );
}

#[test]
fn registers_locales_on_a_private_registry() {
    let registry = Arc::new(LocaleRegistry::empty());
    let engine = FormatEngine::with_registry(EngineConfig::default(), registry.clone());

    assert_eq!(engine.format_number(1234.5, "en-US", None).unwrap(), "1,234.5");
    assert!(engine.format_number(1.0, "fr-CA", None).is_err());

    registry.register(data::FR.clone(), Some("fr_CA"));
    assert_eq!(engine.format_number(1234.5, "fr-CA", None).unwrap(), "1\u{202f}234,5");

    registry.unregister_all();
    let error = engine.format_number(1.0, "fr-CA", None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MissingLocaleData);
    assert_eq!(engine.format_number(1.0, "en", None).unwrap(), "1");
}

#[test]
fn groups_random_integers() {
    let mut rng = rand::thread_rng();
    for _ in 0..1_000 {
        let value: i64 = rng.gen_range(-1_000_000_000..1_000_000_000);
        let formatted = format_number(value, "en", None).unwrap();
        assert_eq!(formatted.replace(',', ""), value.to_string());

        let digits = formatted.trim_start_matches('-');
        let groups: Vec<&str> = digits.split(',').collect();
        assert!(groups[0].len() <= 3 && !groups[0].is_empty());
        assert!(groups[1..].iter().all(|group| group.len() == 3));
    }
}

fn reformat(formatted: &str, digits_info: Option<&str>) -> String {
    let number: f64 = formatted.replace(',', "").parse().unwrap();
    format_number(number, "en", digits_info).unwrap()
}

#[test]
fn reformatting_is_a_fixed_point() {
    for value in [1.005, 9.995, -0.0005, 1e21, 5e-324, 0.1 + 0.2] {
        for digits_info in [None, Some("1.2-2"), Some("1.0-0"), Some("3.1-5")] {
            let formatted = format_number(value, "en", digits_info).unwrap();
            assert_eq!(reformat(&formatted, digits_info), formatted, "{value} {digits_info:?}");
        }
    }

    let mut rng = rand::thread_rng();
    for _ in 0..1_000 {
        let value: f64 = rng.gen_range(-1e11..1e11) / 10f64.powi(rng.gen_range(0..12));
        let max_frac = rng.gen_range(0..4);
        let digits_info = format!("1.0-{max_frac}");
        let formatted = format_number(value, "en", Some(&digits_info)).unwrap();
        assert_eq!(
            reformat(&formatted, Some(&digits_info)),
            formatted,
            "{value} {digits_info}"
        );
    }
}
