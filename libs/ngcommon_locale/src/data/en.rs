// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use crate::{
    data::MONTHS_NARROW,
    locale_data::{
        DayPeriodRule, Direction, ExtraLocaleData, FormatWidths, Forms, LocaleData, NumberFormats,
        NumberSymbols, WeekDay, Widths,
    },
    plural::plural_en,
};

pub(crate) const DAYS_NARROW: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
pub(crate) const DAYS_ABBREVIATED: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub(crate) const DAYS_WIDE: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
pub(crate) const DAYS_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub(crate) const MONTHS_ABBREVIATED: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub(crate) const MONTHS_WIDE: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const ERAS: Widths<&[&str; 2]> = Widths::new(
    Some(&["B", "A"]),
    Some(&["BC", "AD"]),
    Some(&["Before Christ", "Anno Domini"]),
);

pub(crate) const NUMBER_SYMBOLS: NumberSymbols = NumberSymbols {
    decimal: ".",
    group: ",",
    list: ";",
    percent_sign: "%",
    plus_sign: "+",
    minus_sign: "-",
    exponential: "E",
    superscripting_exponent: "×",
    per_mille: "‰",
    infinity: "∞",
    nan: "NaN",
    time_separator: ":",
    currency_decimal: None,
    currency_group: None,
};

pub(crate) const NUMBER_FORMATS: NumberFormats = NumberFormats {
    decimal: "#,##0.###",
    percent: "#,##0%",
    currency: "¤#,##0.00",
    scientific: "#E0",
};

/// English as used in the United States.
pub static EN: LocaleData = LocaleData {
    locale_id: "en",
    day_periods: Forms::format_only(Widths::new(Some(&["a", "p"]), Some(&["AM", "PM"]), None)),
    days: Forms::format_only(Widths::full(
        &DAYS_NARROW,
        &DAYS_ABBREVIATED,
        &DAYS_WIDE,
        &DAYS_SHORT,
    )),
    months: Forms::format_only(Widths::new(
        Some(&MONTHS_NARROW),
        Some(&MONTHS_ABBREVIATED),
        Some(&MONTHS_WIDE),
    )),
    eras: ERAS,
    first_day_of_week: WeekDay::Sunday,
    weekend_range: [WeekDay::Saturday, WeekDay::Sunday],
    date_formats: FormatWidths::new(
        Some("M/d/yy"),
        Some("MMM d, y"),
        Some("MMMM d, y"),
        Some("EEEE, MMMM d, y"),
    ),
    time_formats: FormatWidths::new(
        Some("h:mm a"),
        Some("h:mm:ss a"),
        Some("h:mm:ss a z"),
        Some("h:mm:ss a zzzz"),
    ),
    date_time_formats: FormatWidths::new(Some("{1}, {0}"), None, Some("{1} 'at' {0}"), None),
    number_symbols: NUMBER_SYMBOLS,
    number_formats: NUMBER_FORMATS,
    currency_code: Some("USD"),
    currency_symbol: Some("$"),
    currency_name: Some("US Dollar"),
    currencies: &[],
    direction: Direction::Ltr,
    plural: plural_en,
    extra: Some(&EN_EXTRA),
};

const EXTRA_FORMAT_NARROW: &[&str] = &[
    "mi",
    "n",
    "in the morning",
    "in the afternoon",
    "in the evening",
    "at night",
];
const EXTRA_FORMAT_ABBREVIATED: &[&str] = &[
    "midnight",
    "noon",
    "in the morning",
    "in the afternoon",
    "in the evening",
    "at night",
];
const EXTRA_STANDALONE_NARROW: &[&str] = &[
    "midnight",
    "noon",
    "morning",
    "afternoon",
    "evening",
    "night",
];

pub static EN_EXTRA: ExtraLocaleData = ExtraLocaleData {
    day_periods: Forms {
        format: Some(Widths::new(
            Some(EXTRA_FORMAT_NARROW),
            Some(EXTRA_FORMAT_ABBREVIATED),
            None,
        )),
        standalone: Some(Widths::new(Some(EXTRA_STANDALONE_NARROW), None, None)),
    },
    day_period_rules: &[
        DayPeriodRule::At("00:00"),
        DayPeriodRule::At("12:00"),
        DayPeriodRule::Range("06:00", "12:00"),
        DayPeriodRule::Range("12:00", "18:00"),
        DayPeriodRule::Range("18:00", "21:00"),
        DayPeriodRule::Range("21:00", "06:00"),
    ],
};
