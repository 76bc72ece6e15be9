// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use crate::{
    data::{
        en::{
            DAYS_ABBREVIATED, DAYS_NARROW, DAYS_SHORT, DAYS_WIDE, ERAS, MONTHS_ABBREVIATED,
            MONTHS_WIDE, NUMBER_FORMATS, NUMBER_SYMBOLS,
        },
        EN_EXTRA, MONTHS_NARROW,
    },
    locale_data::{CurrencyInfo, Direction, FormatWidths, Forms, LocaleData, WeekDay, Widths},
    plural::plural_en,
};

const DAY_PERIODS: Widths<&[&str; 2]> = Widths::new(Some(&["a", "p"]), Some(&["am", "pm"]), None);

/// English as used in the United Kingdom.
pub static EN_GB: LocaleData = LocaleData {
    locale_id: "en-GB",
    day_periods: Forms {
        format: Some(DAY_PERIODS),
        standalone: Some(DAY_PERIODS),
    },
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
    first_day_of_week: WeekDay::Monday,
    weekend_range: [WeekDay::Saturday, WeekDay::Sunday],
    date_formats: FormatWidths::new(
        Some("dd/MM/y"),
        Some("d MMM y"),
        Some("d MMMM y"),
        Some("EEEE, d MMMM y"),
    ),
    time_formats: FormatWidths::new(
        Some("HH:mm"),
        Some("HH:mm:ss"),
        Some("HH:mm:ss z"),
        Some("HH:mm:ss zzzz"),
    ),
    date_time_formats: FormatWidths::new(Some("{1}, {0}"), None, Some("{1} 'at' {0}"), None),
    number_symbols: NUMBER_SYMBOLS,
    number_formats: NUMBER_FORMATS,
    currency_code: Some("GBP"),
    currency_symbol: Some("£"),
    currency_name: Some("British Pound"),
    currencies: &[
        ("JPY", CurrencyInfo::EMPTY.symbol("JP¥").narrow("¥")),
        ("USD", CurrencyInfo::EMPTY.symbol("US$").narrow("$")),
    ],
    direction: Direction::Ltr,
    plural: plural_en,
    extra: Some(&EN_EXTRA),
};
