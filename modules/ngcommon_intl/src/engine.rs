// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use chrono::Duration;
use ngcommon_locale::{
    currency_symbol_in, get_number_of_currency_digits, normalize_locale, CurrencyFormat,
    LocaleData, LocaleRegistry, NumberFormatStyle, NumberSymbol, DEFAULT_CURRENCY_DIGITS,
};
use once_cell::sync::Lazy;
use tracing::trace;

use crate::{
    cache::Cache,
    config::EngineConfig,
    date_format::{named_format, render, tokenize, FieldFormatter},
    date_value::{to_date, DateLike},
    error::{FormatError, Result},
    number_format::{
        format_number_to_locale_string, parse_number_format, replace_currency_placeholder,
        CurrencyDisplay, NumberLike, ParsedNumberFormat, PERCENT_CHAR,
    },
};

static GLOBAL: Lazy<FormatEngine> = Lazy::new(|| FormatEngine::new(EngineConfig::from_env()));

/// Formatting context: configuration, the locale registry it reads from and
/// the memo tables for number patterns, date tokens and named formats.
#[derive(Debug)]
pub struct FormatEngine {
    config: EngineConfig,
    registry: Arc<LocaleRegistry>,
    number_formats: Cache<(String, String), ParsedNumberFormat>,
    date_tokens: Cache<String, FieldFormatter>,
    named_formats: Cache<(String, String), String>,
}

impl Default for FormatEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl FormatEngine {
    /// An engine reading from the global locale registry.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(config, LocaleRegistry::global().clone())
    }

    pub fn with_registry(config: EngineConfig, registry: Arc<LocaleRegistry>) -> Self {
        Self {
            config,
            registry,
            number_formats: Cache::new(),
            date_tokens: Cache::new(),
            named_formats: Cache::new(),
        }
    }

    /// The engine behind the crate-level functions, configured from the
    /// environment.
    pub fn global() -> &'static FormatEngine {
        &GLOBAL
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<LocaleRegistry> {
        &self.registry
    }

    /// Drops every memoized pattern and token.
    pub fn clear_caches(&self) {
        self.number_formats.clear();
        self.date_tokens.clear();
        self.named_formats.clear();
    }

    /// Resolves `locale`, using the configured default for an empty id.
    pub fn locale_data(&self, locale: &str) -> Result<Arc<LocaleData>> {
        let locale = if locale.trim().is_empty() {
            self.config.default_locale.as_str()
        } else {
            locale
        };
        Ok(self.registry.find(locale)?)
    }

    fn number_pattern(&self, locale: &LocaleData, style: NumberFormatStyle) -> Result<ParsedNumberFormat> {
        let format = locale.number_format(style);
        let minus_sign = locale.number_symbol(NumberSymbol::MinusSign);
        self.number_formats
            .get_or_try_insert_with((format.to_string(), minus_sign.to_string()), || {
                trace!(format, minus_sign, "parsing number format");
                Ok(parse_number_format(format, minus_sign))
            })
    }

    /// Formats a number as a locale decimal, e.g. `1,234.5`.
    pub fn format_number<'a>(
        &self,
        value: impl Into<NumberLike<'a>>,
        locale: &str,
        digits_info: Option<&str>,
    ) -> Result<String> {
        let value = value.into().to_number()?;
        let data = self.locale_data(locale)?;
        let pattern = self.number_pattern(&data, NumberFormatStyle::Decimal)?;
        format_number_to_locale_string(
            value,
            &pattern,
            &data,
            NumberSymbol::Group,
            NumberSymbol::Decimal,
            digits_info,
            false,
        )
    }

    /// Formats a ratio as a locale percentage: `0.255` becomes `26%`.
    pub fn format_percent<'a>(
        &self,
        value: impl Into<NumberLike<'a>>,
        locale: &str,
        digits_info: Option<&str>,
    ) -> Result<String> {
        let value = value.into().to_number()?;
        let data = self.locale_data(locale)?;
        let pattern = self.number_pattern(&data, NumberFormatStyle::Percent)?;
        let formatted = format_number_to_locale_string(
            value,
            &pattern,
            &data,
            NumberSymbol::Group,
            NumberSymbol::Decimal,
            digits_info,
            true,
        )?;
        Ok(formatted.replace(PERCENT_CHAR, data.number_symbol(NumberSymbol::PercentSign)))
    }

    /// Formats an amount with the locale currency pattern and the given
    /// display string. The fraction digits follow `currency_code`, two when
    /// it is absent.
    pub fn format_currency<'a>(
        &self,
        value: impl Into<NumberLike<'a>>,
        locale: &str,
        currency: &str,
        currency_code: Option<&str>,
        digits_info: Option<&str>,
    ) -> Result<String> {
        let value = value.into().to_number()?;
        let data = self.locale_data(locale)?;
        let mut pattern = self.number_pattern(&data, NumberFormatStyle::Currency)?;
        let digits = currency_code.map_or(DEFAULT_CURRENCY_DIGITS, get_number_of_currency_digits);
        pattern.min_frac = digits;
        pattern.max_frac = digits;

        let formatted = format_number_to_locale_string(
            value,
            &pattern,
            &data,
            NumberSymbol::CurrencyGroup,
            NumberSymbol::CurrencyDecimal,
            digits_info,
            false,
        )?;
        Ok(replace_currency_placeholder(&formatted, currency))
    }

    /// Formats an amount, deriving the displayed currency from `display`.
    /// Without a currency code the configured default is used.
    pub fn format_currency_display<'a>(
        &self,
        value: impl Into<NumberLike<'a>>,
        locale: &str,
        display: &CurrencyDisplay,
        currency_code: Option<&str>,
        digits_info: Option<&str>,
    ) -> Result<String> {
        let code = currency_code.unwrap_or(&self.config.default_currency_code);
        let currency = match display {
            CurrencyDisplay::Code => code.to_string(),
            CurrencyDisplay::Symbol => {
                currency_symbol_in(code, CurrencyFormat::Wide, &*self.locale_data(locale)?)
            },
            CurrencyDisplay::SymbolNarrow => {
                currency_symbol_in(code, CurrencyFormat::Narrow, &*self.locale_data(locale)?)
            },
            CurrencyDisplay::Custom(custom) => custom.clone(),
        };
        self.format_currency(value, locale, &currency, Some(code), digits_info)
    }

    /// The pattern behind a named format such as `mediumDate`, or `None` when
    /// `name` is not one.
    pub fn named_format(&self, locale: &str, name: &str) -> Result<Option<String>> {
        let data = self.locale_data(locale)?;
        self.named_formats
            .get_or_try_insert_hit((normalize_locale(locale), name.to_string()), || {
                trace!(locale, name, "resolving named date format");
                named_format(&data, name)
            })
    }

    fn date_token(&self, token: &str) -> Result<Option<FieldFormatter>> {
        self.date_tokens.get_or_try_insert_hit(token.to_string(), || {
            trace!(token, "compiling date token");
            Ok(FieldFormatter::from_token(token))
        })
    }

    /// Formats a date with a CLDR pattern or a named format.
    ///
    /// `timezone` accepts anything `ngcommon_tz` resolves. Without one the
    /// configured default timezone applies, then the host zone.
    pub fn format_date<'a>(
        &self,
        value: impl Into<DateLike<'a>>,
        format: &str,
        locale: &str,
        timezone: Option<&str>,
    ) -> Result<String> {
        let instant = to_date(value.into())?;
        let data = self.locale_data(locale)?;
        let pattern = self
            .named_format(locale, format)?
            .unwrap_or_else(|| format.to_string());

        let parts = tokenize(&pattern)
            .into_iter()
            .map(|part| Ok((part, self.date_token(part)?)))
            .collect::<Result<Vec<_>>>()?;

        let timezone = timezone.or(self.config.default_timezone.as_deref());
        let offset = ngcommon_tz::resolve_offset(timezone, instant);
        let wall = instant
            .naive_utc()
            .checked_add_signed(Duration::minutes(offset.into()))
            .ok_or_else(|| FormatError::InvalidArgument(format!("{instant} is out of range")))?;

        render(&parts, &wall, offset, &data)
    }

    /// Formats a date with the configured default format.
    pub fn format_date_default<'a>(
        &self,
        value: impl Into<DateLike<'a>>,
        locale: &str,
        timezone: Option<&str>,
    ) -> Result<String> {
        self.format_date(value, &self.config.default_date_format, locale, timezone)
    }

    /// Picks the message key for `value` among `cases` using the plural rule
    /// of `locale`.
    pub fn get_plural_category(&self, value: f64, cases: &[&str], locale: &str) -> Result<String> {
        let data = self.locale_data(locale)?;
        Ok(ngcommon_locale::get_plural_category(value, cases, &data)?)
    }
}
