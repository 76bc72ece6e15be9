// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use crate::{
    data::MONTHS_NARROW,
    locale_data::{
        CurrencyInfo, DayPeriodRule, Direction, ExtraLocaleData, FormatWidths, Forms, LocaleData,
        NumberFormats, NumberSymbols, WeekDay, Widths,
    },
    plural::plural_en,
};

const DAYS_NARROW: [&str; 7] = ["S", "M", "D", "M", "D", "F", "S"];
const DAYS_WIDE: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];
const DAYS_SHORT: [&str; 7] = ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."];

const MONTHS_WIDE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

pub static DE: LocaleData = LocaleData {
    locale_id: "de",
    day_periods: Forms::format_only(Widths::new(Some(&["AM", "PM"]), None, None)),
    days: Forms {
        format: Some(Widths::full(&DAYS_NARROW, &DAYS_SHORT, &DAYS_WIDE, &DAYS_SHORT)),
        standalone: Some(Widths::full(
            &DAYS_NARROW,
            &["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
            &DAYS_WIDE,
            &DAYS_SHORT,
        )),
    },
    months: Forms {
        format: Some(Widths::new(
            Some(&MONTHS_NARROW),
            Some(&[
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ]),
            Some(&MONTHS_WIDE),
        )),
        standalone: Some(Widths::new(
            Some(&MONTHS_NARROW),
            Some(&[
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ]),
            Some(&MONTHS_WIDE),
        )),
    },
    eras: Widths::new(Some(&["v. Chr.", "n. Chr."]), None, None),
    first_day_of_week: WeekDay::Monday,
    weekend_range: [WeekDay::Saturday, WeekDay::Sunday],
    date_formats: FormatWidths::new(
        Some("dd.MM.yy"),
        Some("dd.MM.y"),
        Some("d. MMMM y"),
        Some("EEEE, d. MMMM y"),
    ),
    time_formats: FormatWidths::new(
        Some("HH:mm"),
        Some("HH:mm:ss"),
        Some("HH:mm:ss z"),
        Some("HH:mm:ss zzzz"),
    ),
    date_time_formats: FormatWidths::new(Some("{1}, {0}"), None, Some("{1} 'um' {0}"), None),
    number_symbols: NumberSymbols {
        decimal: ",",
        group: ".",
        list: ";",
        percent_sign: "%",
        plus_sign: "+",
        minus_sign: "-",
        exponential: "E",
        superscripting_exponent: "·",
        per_mille: "‰",
        infinity: "∞",
        nan: "NaN",
        time_separator: ":",
        currency_decimal: None,
        currency_group: None,
    },
    number_formats: NumberFormats {
        decimal: "#,##0.###",
        percent: "#,##0\u{a0}%",
        currency: "#,##0.00\u{a0}¤",
        scientific: "#E0",
    },
    currency_code: Some("EUR"),
    currency_symbol: Some("€"),
    currency_name: Some("Euro"),
    currencies: &[
        ("ATS", CurrencyInfo::EMPTY.symbol("öS")),
        ("AUD", CurrencyInfo::EMPTY.symbol("AU$").narrow("$")),
        ("DEM", CurrencyInfo::EMPTY.symbol("DM")),
        ("THB", CurrencyInfo::EMPTY.symbol("฿")),
        ("TWD", CurrencyInfo::EMPTY.symbol("NT$")),
    ],
    direction: Direction::Ltr,
    plural: plural_en,
    extra: Some(&DE_EXTRA),
};

const EXTRA_FORMAT_NARROW: &[&str] = &[
    "Mitternacht",
    "morgens",
    "vorm.",
    "mittags",
    "nachm.",
    "abends",
    "nachts",
];
const EXTRA_FORMAT_WIDE: &[&str] = &[
    "Mitternacht",
    "morgens",
    "vormittags",
    "mittags",
    "nachmittags",
    "abends",
    "nachts",
];
const EXTRA_STANDALONE_NARROW: &[&str] = &[
    "Mitternacht",
    "Morgen",
    "Vorm.",
    "Mittag",
    "Nachm.",
    "Abend",
    "Nacht",
];
const EXTRA_STANDALONE_WIDE: &[&str] = &[
    "Mitternacht",
    "Morgen",
    "Vormittag",
    "Mittag",
    "Nachmittag",
    "Abend",
    "Nacht",
];

pub static DE_EXTRA: ExtraLocaleData = ExtraLocaleData {
    day_periods: Forms {
        format: Some(Widths::new(
            Some(EXTRA_FORMAT_NARROW),
            None,
            Some(EXTRA_FORMAT_WIDE),
        )),
        standalone: Some(Widths::new(
            Some(EXTRA_STANDALONE_NARROW),
            None,
            Some(EXTRA_STANDALONE_WIDE),
        )),
    },
    day_period_rules: &[
        DayPeriodRule::At("00:00"),
        DayPeriodRule::Range("05:00", "10:00"),
        DayPeriodRule::Range("10:00", "12:00"),
        DayPeriodRule::Range("12:00", "13:00"),
        DayPeriodRule::Range("13:00", "18:00"),
        DayPeriodRule::Range("18:00", "24:00"),
        DayPeriodRule::Range("00:00", "05:00"),
    ],
};
