// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use crate::{
    data::MONTHS_NARROW,
    locale_data::{
        CurrencyInfo, Direction, FormatWidths, Forms, LocaleData, NumberFormats, NumberSymbols,
        WeekDay, Widths,
    },
    plural::plural_fr,
};

const fn currency(symbol: &'static str, narrow: &'static str) -> CurrencyInfo {
    CurrencyInfo::EMPTY.symbol(symbol).narrow(narrow)
}

/// French. Extended day periods are not bundled.
pub static FR: LocaleData = LocaleData {
    locale_id: "fr",
    day_periods: Forms::format_only(Widths::new(Some(&["AM", "PM"]), None, None)),
    days: Forms::format_only(Widths::full(
        &["D", "L", "M", "M", "J", "V", "S"],
        &["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        &[
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ],
        &["di", "lu", "ma", "me", "je", "ve", "sa"],
    )),
    months: Forms::format_only(Widths::new(
        Some(&MONTHS_NARROW),
        Some(&[
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ]),
        Some(&[
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ]),
    )),
    eras: Widths::new(
        Some(&["av. J.-C.", "ap. J.-C."]),
        None,
        Some(&["avant Jésus-Christ", "après Jésus-Christ"]),
    ),
    first_day_of_week: WeekDay::Monday,
    weekend_range: [WeekDay::Saturday, WeekDay::Sunday],
    date_formats: FormatWidths::new(
        Some("dd/MM/y"),
        Some("d MMM y"),
        Some("d MMMM y"),
        Some("EEEE d MMMM y"),
    ),
    time_formats: FormatWidths::new(
        Some("HH:mm"),
        Some("HH:mm:ss"),
        Some("HH:mm:ss z"),
        Some("HH:mm:ss zzzz"),
    ),
    date_time_formats: FormatWidths::new(
        Some("{1} {0}"),
        Some("{1}, {0}"),
        Some("{1} 'à' {0}"),
        None,
    ),
    number_symbols: NumberSymbols {
        decimal: ",",
        group: "\u{202f}",
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
    },
    number_formats: NumberFormats {
        decimal: "#,##0.###",
        percent: "#,##0\u{a0}%",
        currency: "#,##0.00\u{a0}¤",
        scientific: "#E0",
    },
    currency_code: Some("EUR"),
    currency_symbol: Some("€"),
    currency_name: Some("euro"),
    currencies: &[
        ("ARS", currency("$AR", "$")),
        ("AUD", currency("$AU", "$")),
        ("BEF", CurrencyInfo::EMPTY.symbol("FB")),
        ("CAD", currency("$CA", "$")),
        ("CNY", CurrencyInfo::EMPTY.narrow("¥")),
        ("FRF", CurrencyInfo::EMPTY.symbol("F")),
        ("GBP", currency("£GB", "£")),
        ("HKD", CurrencyInfo::EMPTY.narrow("$")),
        ("JPY", CurrencyInfo::EMPTY.narrow("¥")),
        ("MXN", currency("$MX", "$")),
        ("NZD", currency("$NZ", "$")),
        ("SGD", currency("$SG", "$")),
        ("TWD", CurrencyInfo::EMPTY.narrow("NT$")),
        ("USD", currency("$US", "$")),
        ("XPF", CurrencyInfo::EMPTY.symbol("FCFP")),
    ],
    direction: Direction::Ltr,
    plural: plural_fr,
    extra: None,
};
