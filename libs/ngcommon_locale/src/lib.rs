// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale data repository.
//!
//! A [`LocaleRegistry`] maps locale ids to [`LocaleData`] records. The free
//! functions below resolve a locale id against the process-wide registry and
//! project one field out of the record.

mod currencies;
pub mod data;
mod error;
mod locale_data;
mod plural;
mod registry;

use std::sync::Arc;

pub use currencies::{
    currency_symbol_in, get_number_of_currency_digits, CurrencyFormat, CURRENCIES_EN,
    DEFAULT_CURRENCY_DIGITS,
};
pub use error::LocaleError;
pub use locale_data::{
    CurrencyInfo, DayNames, DayPeriodNames, DayPeriodRule, Direction, EraNames, ExtraLocaleData,
    FormStyle, FormatWidth, FormatWidths, Forms, LocaleData, MonthNames, NumberFormatStyle,
    NumberFormats, NumberSymbol, NumberSymbols, Time, TranslationWidth, WeekDay, Widths,
};
pub use plural::{get_plural_category, plural_en, plural_fr, Plural, PluralOperands};
pub use registry::{normalize_locale, LocaleRegistry};

/// Resolves `locale` against the global registry.
pub fn find_locale_data(locale: &str) -> Result<Arc<LocaleData>, LocaleError> {
    LocaleRegistry::global().find(locale)
}

/// Adds `data` to the global registry.
pub fn register_locale_data(data: LocaleData, locale_id: Option<&str>) {
    LocaleRegistry::global().register(data, locale_id)
}

/// Clears the global registry.
pub fn unregister_all_locale_data() {
    LocaleRegistry::global().unregister_all()
}

pub fn get_locale_id(locale: &str) -> Result<&'static str, LocaleError> {
    Ok(find_locale_data(locale)?.locale_id())
}

pub fn get_locale_day_periods(
    locale: &str,
    form: FormStyle,
    width: TranslationWidth,
) -> Result<DayPeriodNames, LocaleError> {
    find_locale_data(locale)?.day_periods(form, width)
}

pub fn get_locale_day_names(
    locale: &str,
    form: FormStyle,
    width: TranslationWidth,
) -> Result<DayNames, LocaleError> {
    find_locale_data(locale)?.day_names(form, width)
}

pub fn get_locale_month_names(
    locale: &str,
    form: FormStyle,
    width: TranslationWidth,
) -> Result<MonthNames, LocaleError> {
    find_locale_data(locale)?.month_names(form, width)
}

pub fn get_locale_era_names(
    locale: &str,
    width: TranslationWidth,
) -> Result<EraNames, LocaleError> {
    find_locale_data(locale)?.era_names(width)
}

pub fn get_locale_first_day_of_week(locale: &str) -> Result<WeekDay, LocaleError> {
    Ok(find_locale_data(locale)?.first_day_of_week())
}

pub fn get_locale_weekend_range(locale: &str) -> Result<[WeekDay; 2], LocaleError> {
    Ok(find_locale_data(locale)?.weekend_range())
}

pub fn get_locale_date_format(
    locale: &str,
    width: FormatWidth,
) -> Result<&'static str, LocaleError> {
    find_locale_data(locale)?.date_format(width)
}

pub fn get_locale_time_format(
    locale: &str,
    width: FormatWidth,
) -> Result<&'static str, LocaleError> {
    find_locale_data(locale)?.time_format(width)
}

/// Pattern joining a time (`{0}`) and a date (`{1}`).
pub fn get_locale_date_time_format(
    locale: &str,
    width: FormatWidth,
) -> Result<&'static str, LocaleError> {
    find_locale_data(locale)?.date_time_format(width)
}

pub fn get_locale_number_symbol(
    locale: &str,
    symbol: NumberSymbol,
) -> Result<&'static str, LocaleError> {
    Ok(find_locale_data(locale)?.number_symbol(symbol))
}

pub fn get_locale_number_format(
    locale: &str,
    style: NumberFormatStyle,
) -> Result<&'static str, LocaleError> {
    Ok(find_locale_data(locale)?.number_format(style))
}

pub fn get_locale_currency_code(locale: &str) -> Result<Option<&'static str>, LocaleError> {
    Ok(find_locale_data(locale)?.currency_code())
}

pub fn get_locale_currency_symbol(locale: &str) -> Result<Option<&'static str>, LocaleError> {
    Ok(find_locale_data(locale)?.currency_symbol())
}

pub fn get_locale_currency_name(locale: &str) -> Result<Option<&'static str>, LocaleError> {
    Ok(find_locale_data(locale)?.currency_name())
}

pub fn get_locale_currencies(
    locale: &str,
) -> Result<&'static [(&'static str, CurrencyInfo)], LocaleError> {
    Ok(find_locale_data(locale)?.currencies())
}

/// Display symbol of the currency `code` in `locale`, English by default.
pub fn get_currency_symbol(
    code: &str,
    format: CurrencyFormat,
    locale: Option<&str>,
) -> Result<String, LocaleError> {
    let data = find_locale_data(locale.unwrap_or("en"))?;
    Ok(currency_symbol_in(code, format, &data))
}

pub fn get_locale_direction(locale: &str) -> Result<Direction, LocaleError> {
    Ok(find_locale_data(locale)?.direction())
}

pub fn get_locale_plural_case(locale: &str) -> Result<fn(f64) -> Plural, LocaleError> {
    Ok(find_locale_data(locale)?.plural_case())
}

/// Plural category of `value` under the rules of `locale`.
pub fn get_plural_case(locale: &str, value: f64) -> Result<Plural, LocaleError> {
    Ok((find_locale_data(locale)?.plural)(value))
}

pub fn get_locale_extra_day_periods(
    locale: &str,
    form: FormStyle,
    width: TranslationWidth,
) -> Result<&'static [&'static str], LocaleError> {
    find_locale_data(locale)?.extra_day_periods(form, width)
}

pub fn get_locale_extra_day_period_rules(
    locale: &str,
) -> Result<Vec<DayPeriodRule<Time>>, LocaleError> {
    find_locale_data(locale)?.extra_day_period_rules()
}
