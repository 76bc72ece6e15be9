// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale record layout and the projections over it.
//!
//! Tables are sparse the way CLDR data is: a width or form without its own
//! values borrows the closest narrower one. Every accessor resolves a missing
//! slot by walking backwards from the requested index to the last defined
//! value (`short → wide → abbreviated → narrow`, `standalone → format`,
//! `full → long → medium → short`).

use crate::{plural::Plural, LocaleError};

/// Format or standalone variant of a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormStyle {
    Format = 0,
    Standalone = 1,
}

/// Width of a translated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationWidth {
    /// `T`
    Narrow = 0,
    /// `Tue`
    Abbreviated = 1,
    /// `Tuesday`
    Wide = 2,
    /// `Tu`
    Short = 3,
}

/// Width of a date, time or date-time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatWidth {
    Short = 0,
    Medium = 1,
    Long = 2,
    Full = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormatStyle {
    Decimal,
    Percent,
    Currency,
    Scientific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberSymbol {
    Decimal,
    Group,
    List,
    PercentSign,
    PlusSign,
    MinusSign,
    Exponential,
    SuperscriptingExponent,
    PerMille,
    Infinity,
    NaN,
    TimeSeparator,
    CurrencyDecimal,
    CurrencyGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeekDay {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

pub type DayPeriodNames = &'static [&'static str; 2];
pub type DayNames = &'static [&'static str; 7];
pub type MonthNames = &'static [&'static str; 12];
pub type EraNames = &'static [&'static str; 2];

/// One value per [`TranslationWidth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widths<T> {
    pub narrow: Option<T>,
    pub abbreviated: Option<T>,
    pub wide: Option<T>,
    pub short: Option<T>,
}

impl<T: Copy> Widths<T> {
    pub const fn new(narrow: Option<T>, abbreviated: Option<T>, wide: Option<T>) -> Self {
        Self {
            narrow,
            abbreviated,
            wide,
            short: None,
        }
    }

    pub const fn full(narrow: T, abbreviated: T, wide: T, short: T) -> Self {
        Self {
            narrow: Some(narrow),
            abbreviated: Some(abbreviated),
            wide: Some(wide),
            short: Some(short),
        }
    }

    pub fn get(&self, width: TranslationWidth) -> Result<T, LocaleError> {
        last_defined_value(
            &[self.narrow, self.abbreviated, self.wide, self.short],
            width as usize,
        )
    }
}

/// A [`Widths`] table per [`FormStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms<T> {
    pub format: Option<Widths<T>>,
    pub standalone: Option<Widths<T>>,
}

impl<T: Copy> Forms<T> {
    pub const fn format_only(format: Widths<T>) -> Self {
        Self {
            format: Some(format),
            standalone: None,
        }
    }

    pub fn get(&self, form: FormStyle, width: TranslationWidth) -> Result<T, LocaleError> {
        last_defined_value(&[self.format, self.standalone], form as usize)?.get(width)
    }
}

/// One pattern per [`FormatWidth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatWidths {
    pub short: Option<&'static str>,
    pub medium: Option<&'static str>,
    pub long: Option<&'static str>,
    pub full: Option<&'static str>,
}

impl FormatWidths {
    pub const fn new(
        short: Option<&'static str>,
        medium: Option<&'static str>,
        long: Option<&'static str>,
        full: Option<&'static str>,
    ) -> Self {
        Self {
            short,
            medium,
            long,
            full,
        }
    }

    pub fn get(&self, width: FormatWidth) -> Result<&'static str, LocaleError> {
        last_defined_value(
            &[self.short, self.medium, self.long, self.full],
            width as usize,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: &'static str,
    pub group: &'static str,
    pub list: &'static str,
    pub percent_sign: &'static str,
    pub plus_sign: &'static str,
    pub minus_sign: &'static str,
    pub exponential: &'static str,
    pub superscripting_exponent: &'static str,
    pub per_mille: &'static str,
    pub infinity: &'static str,
    pub nan: &'static str,
    pub time_separator: &'static str,
    pub currency_decimal: Option<&'static str>,
    pub currency_group: Option<&'static str>,
}

/// CLDR number patterns, e.g. `#,##0.###`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormats {
    pub decimal: &'static str,
    pub percent: &'static str,
    pub currency: &'static str,
    pub scientific: &'static str,
}

/// Currency display data. Absent values fall back to the English table, then
/// to the ISO code and two fraction digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub symbol: Option<&'static str>,
    pub narrow_symbol: Option<&'static str>,
    pub digits: Option<u8>,
}

impl CurrencyInfo {
    pub const EMPTY: Self = Self {
        symbol: None,
        narrow_symbol: None,
        digits: None,
    };

    pub const fn symbol(mut self, symbol: &'static str) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub const fn narrow(mut self, narrow_symbol: &'static str) -> Self {
        self.narrow_symbol = Some(narrow_symbol);
        self
    }

    pub const fn digits(mut self, digits: u8) -> Self {
        self.digits = Some(digits);
        self
    }
}

/// A time of day in a day-period rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time {
    pub hours: u32,
    pub minutes: u32,
}

impl Time {
    /// Parses a CLDR `HH:mm` value.
    pub fn parse(time: &str) -> Result<Self, LocaleError> {
        let invalid = || LocaleError::Invariant(format!("invalid day period time \"{time}\""));
        let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            hours: hours.parse().map_err(|_| invalid())?,
            minutes: minutes.parse().map_err(|_| invalid())?,
        })
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

/// An extended day period rule: a single instant (`noon`) or a
/// `[from, to)` interval that may span midnight (`night`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriodRule<T = &'static str> {
    At(T),
    Range(T, T),
}

impl DayPeriodRule<&'static str> {
    pub fn parse(&self) -> Result<DayPeriodRule<Time>, LocaleError> {
        Ok(match *self {
            DayPeriodRule::At(at) => DayPeriodRule::At(Time::parse(at)?),
            DayPeriodRule::Range(from, to) => DayPeriodRule::Range(Time::parse(from)?, Time::parse(to)?),
        })
    }
}

impl DayPeriodRule<Time> {
    pub fn matches(&self, hours: u32, minutes: u32) -> bool {
        match self {
            DayPeriodRule::At(at) => at.hours == hours && at.minutes == minutes,
            DayPeriodRule::Range(from, to) => {
                let current = hours * 60 + minutes;
                let after_from = current >= from.minutes_of_day();
                let before_to = current < to.minutes_of_day();
                if from < to {
                    after_from && before_to
                } else {
                    after_from || before_to
                }
            },
        }
    }
}

/// Extended day periods, loaded separately from the main record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraLocaleData {
    pub day_periods: Forms<&'static [&'static str]>,
    pub day_period_rules: &'static [DayPeriodRule],
}

/// Everything needed to format dates and numbers for one locale.
///
/// Every table is borrowed for `'static`, as the bundled locales are compiled
/// into the binary. Records assembled at runtime must own their strings for
/// the rest of the process: build them once at startup (for example with
/// `Box::leak` or a `once_cell::sync::Lazy`) and register the result. Derived
/// records can start from a bundled one with struct update syntax.
#[derive(Debug, Clone)]
pub struct LocaleData {
    pub locale_id: &'static str,
    pub day_periods: Forms<DayPeriodNames>,
    pub days: Forms<DayNames>,
    pub months: Forms<MonthNames>,
    pub eras: Widths<EraNames>,
    pub first_day_of_week: WeekDay,
    pub weekend_range: [WeekDay; 2],
    pub date_formats: FormatWidths,
    pub time_formats: FormatWidths,
    pub date_time_formats: FormatWidths,
    pub number_symbols: NumberSymbols,
    pub number_formats: NumberFormats,
    pub currency_code: Option<&'static str>,
    pub currency_symbol: Option<&'static str>,
    pub currency_name: Option<&'static str>,
    /// Sorted by ISO code.
    pub currencies: &'static [(&'static str, CurrencyInfo)],
    pub direction: Direction,
    pub plural: fn(f64) -> Plural,
    pub extra: Option<&'static ExtraLocaleData>,
}

impl LocaleData {
    pub fn locale_id(&self) -> &'static str {
        self.locale_id
    }

    pub fn day_periods(
        &self,
        form: FormStyle,
        width: TranslationWidth,
    ) -> Result<DayPeriodNames, LocaleError> {
        self.day_periods.get(form, width)
    }

    pub fn day_names(&self, form: FormStyle, width: TranslationWidth) -> Result<DayNames, LocaleError> {
        self.days.get(form, width)
    }

    pub fn month_names(
        &self,
        form: FormStyle,
        width: TranslationWidth,
    ) -> Result<MonthNames, LocaleError> {
        self.months.get(form, width)
    }

    pub fn era_names(&self, width: TranslationWidth) -> Result<EraNames, LocaleError> {
        self.eras.get(width)
    }

    pub fn first_day_of_week(&self) -> WeekDay {
        self.first_day_of_week
    }

    pub fn weekend_range(&self) -> [WeekDay; 2] {
        self.weekend_range
    }

    pub fn date_format(&self, width: FormatWidth) -> Result<&'static str, LocaleError> {
        self.date_formats.get(width)
    }

    pub fn time_format(&self, width: FormatWidth) -> Result<&'static str, LocaleError> {
        self.time_formats.get(width)
    }

    pub fn date_time_format(&self, width: FormatWidth) -> Result<&'static str, LocaleError> {
        self.date_time_formats.get(width)
    }

    /// Currency separators fall back to the plain decimal and group symbols.
    pub fn number_symbol(&self, symbol: NumberSymbol) -> &'static str {
        let symbols = &self.number_symbols;
        match symbol {
            NumberSymbol::Decimal => symbols.decimal,
            NumberSymbol::Group => symbols.group,
            NumberSymbol::List => symbols.list,
            NumberSymbol::PercentSign => symbols.percent_sign,
            NumberSymbol::PlusSign => symbols.plus_sign,
            NumberSymbol::MinusSign => symbols.minus_sign,
            NumberSymbol::Exponential => symbols.exponential,
            NumberSymbol::SuperscriptingExponent => symbols.superscripting_exponent,
            NumberSymbol::PerMille => symbols.per_mille,
            NumberSymbol::Infinity => symbols.infinity,
            NumberSymbol::NaN => symbols.nan,
            NumberSymbol::TimeSeparator => symbols.time_separator,
            NumberSymbol::CurrencyDecimal => symbols.currency_decimal.unwrap_or(symbols.decimal),
            NumberSymbol::CurrencyGroup => symbols.currency_group.unwrap_or(symbols.group),
        }
    }

    pub fn number_format(&self, style: NumberFormatStyle) -> &'static str {
        match style {
            NumberFormatStyle::Decimal => self.number_formats.decimal,
            NumberFormatStyle::Percent => self.number_formats.percent,
            NumberFormatStyle::Currency => self.number_formats.currency,
            NumberFormatStyle::Scientific => self.number_formats.scientific,
        }
    }

    pub fn currency_code(&self) -> Option<&'static str> {
        self.currency_code
    }

    pub fn currency_symbol(&self) -> Option<&'static str> {
        self.currency_symbol
    }

    pub fn currency_name(&self) -> Option<&'static str> {
        self.currency_name
    }

    pub fn currencies(&self) -> &'static [(&'static str, CurrencyInfo)] {
        self.currencies
    }

    /// Locale-specific override for a currency, if any.
    pub fn currency(&self, code: &str) -> Option<CurrencyInfo> {
        self.currencies
            .binary_search_by(|(candidate, _)| (*candidate).cmp(code))
            .ok()
            .map(|index| self.currencies[index].1)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn plural_case(&self) -> fn(f64) -> Plural {
        self.plural
    }

    /// The extended data, failing loudly when it was never registered.
    pub fn extra_data(&self) -> Result<&'static ExtraLocaleData, LocaleError> {
        self.extra.ok_or_else(|| LocaleError::MissingExtraLocaleData {
            locale: self.locale_id.to_string(),
        })
    }

    pub fn extra_day_periods(
        &self,
        form: FormStyle,
        width: TranslationWidth,
    ) -> Result<&'static [&'static str], LocaleError> {
        self.extra_data()?.day_periods.get(form, width)
    }

    pub fn extra_day_period_rules(&self) -> Result<Vec<DayPeriodRule<Time>>, LocaleError> {
        self.extra_data()?
            .day_period_rules
            .iter()
            .map(DayPeriodRule::parse)
            .collect()
    }
}

/// Returns the value at `index`, or the closest defined one before it.
pub(crate) fn last_defined_value<T: Copy>(
    values: &[Option<T>],
    index: usize,
) -> Result<T, LocaleError> {
    let end = index.min(values.len().saturating_sub(1));
    values
        .get(..=end)
        .and_then(|candidates| candidates.iter().rev().find_map(|value| *value))
        .ok_or_else(|| LocaleError::Invariant("locale data undefined".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_defined_value_walks_backwards() {
        let values = [Some(1), None, Some(3), None];
        assert_eq!(last_defined_value(&values, 0).unwrap(), 1);
        assert_eq!(last_defined_value(&values, 1).unwrap(), 1);
        assert_eq!(last_defined_value(&values, 3).unwrap(), 3);
    }

    #[test]
    fn test_last_defined_value_never_falls_off_the_front() {
        let values: [Option<u8>; 3] = [None, None, Some(2)];
        assert_eq!(
            last_defined_value(&values, 1),
            Err(LocaleError::Invariant("locale data undefined".into()))
        );
        assert!(last_defined_value::<u8>(&[], 0).is_err());
    }

    #[test]
    fn test_forms_fall_back_to_format() {
        static NARROW: [&str; 2] = ["a", "p"];
        static ABBREVIATED: [&str; 2] = ["AM", "PM"];
        let forms: Forms<&[&str; 2]> =
            Forms::format_only(Widths::new(Some(&NARROW), Some(&ABBREVIATED), None));

        assert_eq!(
            forms.get(FormStyle::Standalone, TranslationWidth::Wide).unwrap(),
            &ABBREVIATED
        );
        assert_eq!(
            forms.get(FormStyle::Format, TranslationWidth::Narrow).unwrap(),
            &NARROW
        );
    }

    #[test]
    fn test_time_parse() {
        assert_eq!(Time::parse("06:30").unwrap(), Time { hours: 6, minutes: 30 });
        assert!(Time::parse("0630").is_err());
        assert!(Time::parse("aa:bb").is_err());
    }

    #[test]
    fn test_day_period_rule_matches() {
        let morning = DayPeriodRule::Range("06:00", "12:00").parse().unwrap();
        assert!(morning.matches(6, 0));
        assert!(morning.matches(11, 59));
        assert!(!morning.matches(12, 0));
        assert!(!morning.matches(5, 59));

        let night = DayPeriodRule::Range("21:00", "06:00").parse().unwrap();
        assert!(night.matches(23, 15));
        assert!(night.matches(2, 0));
        assert!(!night.matches(6, 0));
        assert!(!night.matches(20, 59));

        let noon = DayPeriodRule::At("12:00").parse().unwrap();
        assert!(noon.matches(12, 0));
        assert!(!noon.matches(12, 1));
    }
}
