// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! CLDR number patterns and the digit renderer behind decimal, percent and
//! currency formatting.
//!
//! Pattern syntax follows Unicode Technical Standard #35:
//! https://unicode.org/reports/tr35/tr35-numbers.html#Number_Format_Patterns

use ngcommon_locale::{LocaleData, NumberSymbol};
use ngcommon_numbers::{checked_count, str_to_number, DigitsInfo, ParsedNumber};

use crate::error::Result;

const PATTERN_SEP: char = ';';
const GROUP_SEP: char = ',';
const DIGIT_CHAR: char = '#';
const ZERO_CHAR: char = '0';
const DECIMAL_SEP: char = '.';
pub(crate) const CURRENCY_CHAR: char = '¤';
pub(crate) const PERCENT_CHAR: char = '%';

/// Structure of a number pattern such as `#,##0.00 ¤`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumberFormat {
    pub min_int: usize,
    pub min_frac: usize,
    pub max_frac: usize,
    pub pos_pre: String,
    pub pos_suf: String,
    pub neg_pre: String,
    pub neg_suf: String,
    /// secondary grouping size
    pub g_size: usize,
    /// primary grouping size, nearest to the decimal point
    pub lg_size: usize,
}

impl Default for ParsedNumberFormat {
    fn default() -> Self {
        Self {
            min_int: 1,
            min_frac: 0,
            max_frac: 0,
            pos_pre: String::new(),
            pos_suf: String::new(),
            neg_pre: String::new(),
            neg_suf: String::new(),
            g_size: 0,
            lg_size: 0,
        }
    }
}

/// Parses a CLDR number pattern. Without an explicit negative subpattern the
/// negative affixes are the positive ones with `minus_sign` prepended.
pub fn parse_number_format(format: &str, minus_sign: &str) -> ParsedNumberFormat {
    let mut p = ParsedNumberFormat::default();

    let mut pattern_parts = format.split(PATTERN_SEP);
    let positive = pattern_parts.next().unwrap_or_default();
    let negative = pattern_parts.next().unwrap_or_default();

    let (integer, fraction) = if positive.contains(DECIMAL_SEP) {
        let mut parts = positive.split(DECIMAL_SEP);
        (
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        )
    } else {
        let split_at = positive.rfind(ZERO_CHAR).map_or(0, |index| index + 1);
        positive.split_at(split_at)
    };

    p.pos_pre = integer
        .find(DIGIT_CHAR)
        .map_or("", |index| &integer[..index])
        .to_string();

    for (i, ch) in fraction.chars().enumerate() {
        match ch {
            ZERO_CHAR => {
                p.min_frac = i + 1;
                p.max_frac = i + 1;
            },
            DIGIT_CHAR => p.max_frac = i + 1,
            _ => p.pos_suf.push(ch),
        }
    }

    let groups: Vec<&str> = integer.split(GROUP_SEP).collect();
    let secondary = groups.get(1).filter(|group| !group.is_empty());
    let primary = groups.get(2).filter(|group| !group.is_empty()).or(secondary);
    p.g_size = secondary.map_or(0, |group| group.len());
    p.lg_size = primary.map_or(0, |group| group.len());

    if !negative.is_empty() {
        let trunk_len = positive.len() - p.pos_pre.len() - p.pos_suf.len();
        let (pre, suf) = match negative.find(DIGIT_CHAR) {
            Some(pos) => (&negative[..pos], negative.get(pos + trunk_len..)),
            None => ("", negative.get(trunk_len.saturating_sub(1)..)),
        };
        p.neg_pre = pre.replace('\'', "");
        p.neg_suf = suf.unwrap_or_default().replace('\'', "");
    } else {
        p.neg_pre = format!("{minus_sign}{}", p.pos_pre);
        p.neg_suf = p.pos_suf.clone();
    }

    p
}

/// Renders `value` with `pattern`, using the locale symbols named by `group`
/// and `decimal`. Digit-info overrides are merged into the pattern's digit
/// counts first.
///
/// NaN renders as the locale NaN symbol and infinities as the locale infinity
/// symbol, both wrapped in the sign affixes. Digit counts above
/// [`ngcommon_numbers::MAX_DIGIT_COUNT`] are rejected.
pub fn format_number_to_locale_string(
    value: f64,
    pattern: &ParsedNumberFormat,
    locale: &LocaleData,
    group: NumberSymbol,
    decimal: NumberSymbol,
    digits_info: Option<&str>,
    is_percent: bool,
) -> Result<String> {
    let mut is_zero = false;

    let formatted = if value.is_nan() {
        locale.number_symbol(NumberSymbol::NaN).to_string()
    } else if value.is_infinite() {
        locale.number_symbol(NumberSymbol::Infinity).to_string()
    } else {
        let mut parsed = ParsedNumber::parse(value);
        if is_percent {
            parsed.to_percent();
        }

        let (min_int, min_frac, max_frac) = match digits_info {
            Some(digits_info) => DigitsInfo::parse(digits_info)?.apply(
                pattern.min_int,
                pattern.min_frac,
                pattern.max_frac,
            ),
            None => (pattern.min_int, pattern.min_frac, pattern.max_frac),
        };

        parsed.round(min_frac, max_frac)?;
        is_zero = parsed.is_zero();

        let ParsedNumber {
            mut digits,
            mut integer_len,
            exponent,
        } = parsed;

        let min_int = checked_count(min_int)?;
        if integer_len < min_int {
            let pad = (min_int - integer_len) as usize;
            digits.splice(0..0, std::iter::repeat(0).take(pad));
            integer_len = min_int;
        }
        if integer_len < 0 {
            digits.splice(0..0, std::iter::repeat(0).take((-integer_len) as usize));
            integer_len = 0;
        }

        let decimals = if integer_len > 0 {
            let split = (integer_len as usize).min(digits.len());
            digits.split_off(split)
        } else {
            std::mem::replace(&mut digits, vec![0])
        };

        let mut text = group_digits(&digits, pattern, locale.number_symbol(group));

        if !decimals.is_empty() {
            text.push_str(locale.number_symbol(decimal));
            text.extend(decimals.iter().map(|&d| char::from(b'0' + d)));
        }

        if exponent != 0 {
            text.push_str(locale.number_symbol(NumberSymbol::Exponential));
            text.push('+');
            let mut buffer = itoa::Buffer::new();
            text.push_str(buffer.format(exponent));
        }
        text
    };

    Ok(if value < 0.0 && !is_zero {
        format!("{}{formatted}{}", pattern.neg_pre, pattern.neg_suf)
    } else {
        format!("{}{formatted}{}", pattern.pos_pre, pattern.pos_suf)
    })
}

/// Joins the integer digits, splitting off the primary group first and
/// secondary groups after it.
fn group_digits(digits: &[u8], pattern: &ParsedNumberFormat, separator: &str) -> String {
    let mut groups: Vec<&[u8]> = Vec::new();
    let mut rest = digits;

    if rest.len() >= pattern.lg_size {
        let split = if pattern.lg_size == 0 {
            0
        } else {
            rest.len() - pattern.lg_size
        };
        groups.push(&rest[split..]);
        rest = &rest[..split];
    }
    while rest.len() > pattern.g_size {
        let split = if pattern.g_size == 0 {
            0
        } else {
            rest.len() - pattern.g_size
        };
        groups.push(&rest[split..]);
        rest = &rest[..split];
    }
    if !rest.is_empty() {
        groups.push(rest);
    }

    let mut text = String::with_capacity(digits.len() * 2);
    for (index, group) in groups.iter().rev().enumerate() {
        if index > 0 {
            text.push_str(separator);
        }
        text.extend(group.iter().map(|&d| char::from(b'0' + d)));
    }
    text
}

/// Substitutes `currency` for the first `¤` and drops a second one.
pub(crate) fn replace_currency_placeholder(formatted: &str, currency: &str) -> String {
    let Some(index) = formatted.find(CURRENCY_CHAR) else {
        return formatted.trim().to_string();
    };
    let (head, tail) = formatted.split_at(index);
    let tail = &tail[CURRENCY_CHAR.len_utf8()..];
    let tail = tail.replacen(CURRENCY_CHAR, "", 1);
    format!("{head}{currency}{tail}").trim().to_string()
}

/// How the currency of a formatted amount is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CurrencyDisplay {
    /// the ISO code, `CAD`
    Code,
    /// the locale's symbol, `CA$`
    #[default]
    Symbol,
    /// the locale's narrow symbol, `$`
    SymbolNarrow,
    /// a caller-supplied string
    Custom(String),
}

impl From<&str> for CurrencyDisplay {
    fn from(display: &str) -> Self {
        match display {
            "code" => Self::Code,
            "symbol" => Self::Symbol,
            "symbol-narrow" => Self::SymbolNarrow,
            custom => Self::Custom(custom.to_string()),
        }
    }
}

/// Input accepted by the number formatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLike<'a> {
    Number(f64),
    Text(&'a str),
}

impl NumberLike<'_> {
    /// Coerces the input, rejecting strings that are not entirely numeric.
    pub fn to_number(&self) -> Result<f64> {
        match *self {
            NumberLike::Number(value) => Ok(value),
            NumberLike::Text(text) => Ok(str_to_number(text)?),
        }
    }
}

impl From<f64> for NumberLike<'_> {
    fn from(value: f64) -> Self {
        NumberLike::Number(value)
    }
}

impl From<f32> for NumberLike<'_> {
    fn from(value: f32) -> Self {
        NumberLike::Number(value.into())
    }
}

macro_rules! number_like_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumberLike<'_> {
                fn from(value: $ty) -> Self {
                    NumberLike::Number(value as f64)
                }
            }
        )*
    };
}

number_like_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for NumberLike<'a> {
    fn from(value: &'a str) -> Self {
        NumberLike::Text(value)
    }
}

impl<'a> From<&'a String> for NumberLike<'a> {
    fn from(value: &'a String) -> Self {
        NumberLike::Text(value)
    }
}
