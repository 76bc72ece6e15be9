// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale-aware formatting of dates, numbers, percentages and currencies.
//!
//! The free functions use a process-wide [`FormatEngine`] configured from the
//! `NGCOMMON_*` environment variables (see [`environment`]). Construct a
//! [`FormatEngine`] directly to use another configuration or an isolated
//! [`LocaleRegistry`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let date = Utc.with_ymd_and_hms(2016, 9, 19, 10, 30, 0).unwrap();
//! assert_eq!(
//!     ngcommon_intl::format_date(date, "fullDate", "en-US", Some("UTC")).unwrap(),
//!     "Monday, September 19, 2016"
//! );
//! assert_eq!(
//!     ngcommon_intl::format_number(1234567, "en-US", None).unwrap(),
//!     "1,234,567"
//! );
//! ```

mod cache;
mod config;
pub mod date_format;
mod date_value;
mod engine;
pub mod environment;
mod error;
pub mod number_format;

pub use config::{EngineConfig, DEFAULT_CURRENCY_CODE, DEFAULT_DATE_FORMAT, DEFAULT_LOCALE};
pub use date_value::{create_date, local_to_utc, to_date, DateLike};
pub use engine::FormatEngine;
pub use error::{ErrorKind, FormatError, Result};
pub use ngcommon_locale::{
    currency_symbol_in, find_locale_data, get_currency_symbol, get_number_of_currency_digits,
    register_locale_data, unregister_all_locale_data, CurrencyFormat, LocaleData, LocaleRegistry,
    Plural,
};
pub use number_format::{CurrencyDisplay, NumberLike};

/// Formats `value` with a CLDR date pattern or a named format such as
/// `mediumDate`.
pub fn format_date<'a>(
    value: impl Into<DateLike<'a>>,
    format: &str,
    locale: &str,
    timezone: Option<&str>,
) -> Result<String> {
    FormatEngine::global().format_date(value, format, locale, timezone)
}

/// Formats `value` as a decimal number. `digits_info` has the form
/// `{minInt}.{minFrac}-{maxFrac}`.
pub fn format_number<'a>(
    value: impl Into<NumberLike<'a>>,
    locale: &str,
    digits_info: Option<&str>,
) -> Result<String> {
    FormatEngine::global().format_number(value, locale, digits_info)
}

pub fn format_percent<'a>(
    value: impl Into<NumberLike<'a>>,
    locale: &str,
    digits_info: Option<&str>,
) -> Result<String> {
    FormatEngine::global().format_percent(value, locale, digits_info)
}

/// Formats `value` with the locale currency pattern, inserting `currency`
/// verbatim.
pub fn format_currency<'a>(
    value: impl Into<NumberLike<'a>>,
    locale: &str,
    currency: &str,
    currency_code: Option<&str>,
    digits_info: Option<&str>,
) -> Result<String> {
    FormatEngine::global().format_currency(value, locale, currency, currency_code, digits_info)
}

pub fn get_plural_category(value: f64, cases: &[&str], locale: &str) -> Result<String> {
    FormatEngine::global().get_plural_category(value, cases, locale)
}
