// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! CLDR date pattern tokenizer and field formatters.
//!
//! Pattern syntax follows Unicode Technical Standard #35:
//! https://unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use ngcommon_locale::{FormStyle, FormatWidth, LocaleData, NumberSymbol, TranslationWidth};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    date_value::{create_date, weekday_of},
    error::Result,
};

static DATE_FORMATS_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"((?:[^BEGHLMOSWYZabcdhmswyz']+)|(?:'(?:[^']|'')*')|(?:G{1,5}|y{1,4}|Y{1,4}|M{1,5}|L{1,5}|w{1,2}|W{1}|d{1,2}|E{1,6}|c{1,6}|a{1,5}|b{1,5}|B{1,5}|h{1,2}|H{1,2}|m{1,2}|s{1,2}|S{1,3}|z{1,4}|Z{1,5}|O{1,4}))",
    )
    .unwrap()
});

const THURSDAY: i64 = 4;

/// Splits a date pattern into field tokens and literal runs.
///
/// Text that matches no alternative (an unterminated quote) is dropped.
pub fn tokenize(format: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = format;
    while !rest.is_empty() {
        match DATE_FORMATS_SPLIT.find(rest) {
            Some(m) => {
                parts.push(m.as_str());
                rest = &rest[m.end()..];
            },
            None => {
                parts.push(rest);
                break;
            },
        }
    }
    parts
}

/// Text of a literal run: surrounding quotes removed, `''` unescaped.
pub fn format_literal(part: &str) -> String {
    if part == "''" {
        return "'".into();
    }
    let part = part.strip_prefix('\'').unwrap_or(part);
    let part = part.strip_suffix('\'').unwrap_or(part);
    part.replace("''", "'")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    FullYear,
    Month,
    Date,
    Hours,
    Minutes,
    Seconds,
    FractionalSeconds,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKind {
    DayPeriods,
    Days,
    Months,
    Eras,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneWidth {
    /// `+hhmm`
    Short,
    /// `GMT+h`
    ShortGmt,
    /// `GMT+hh:mm`
    Long,
    /// `+hh:mm`, or `Z` at zero
    Extended,
}

/// Formatter compiled from one pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFormatter {
    Numeric {
        field: DateField,
        digits: usize,
        offset: i64,
        trim: bool,
        neg_wrap: bool,
    },
    Translation {
        kind: TranslationKind,
        width: TranslationWidth,
        form: FormStyle,
        extended: bool,
    },
    WeekNumberingYear {
        digits: usize,
        trim: bool,
    },
    Week {
        digits: usize,
        month_based: bool,
    },
    TimeZone(ZoneWidth),
}

const fn numeric(field: DateField, digits: usize) -> FieldFormatter {
    FieldFormatter::Numeric {
        field,
        digits,
        offset: 0,
        trim: false,
        neg_wrap: false,
    }
}

const fn year(digits: usize, trim: bool) -> FieldFormatter {
    FieldFormatter::Numeric {
        field: DateField::FullYear,
        digits,
        offset: 0,
        trim,
        neg_wrap: true,
    }
}

const fn with_offset(field: DateField, digits: usize, offset: i64) -> FieldFormatter {
    FieldFormatter::Numeric {
        field,
        digits,
        offset,
        trim: false,
        neg_wrap: false,
    }
}

const fn name(kind: TranslationKind, width: TranslationWidth) -> FieldFormatter {
    FieldFormatter::Translation {
        kind,
        width,
        form: FormStyle::Format,
        extended: false,
    }
}

const fn standalone(kind: TranslationKind, width: TranslationWidth) -> FieldFormatter {
    FieldFormatter::Translation {
        kind,
        width,
        form: FormStyle::Standalone,
        extended: false,
    }
}

const fn extended(form: FormStyle, width: TranslationWidth) -> FieldFormatter {
    FieldFormatter::Translation {
        kind: TranslationKind::DayPeriods,
        width,
        form,
        extended: true,
    }
}

impl FieldFormatter {
    /// Compiles a pattern token, or `None` for text that is not a field.
    pub fn from_token(token: &str) -> Option<Self> {
        use DateField::*;
        use TranslationKind::*;
        use TranslationWidth::*;

        Some(match token {
            // era
            "G" | "GG" | "GGG" => name(Eras, Abbreviated),
            "GGGG" => name(Eras, Wide),
            "GGGGG" => name(Eras, Narrow),

            // calendar year
            "y" => year(1, false),
            "yy" => year(2, true),
            "yyy" => year(3, false),
            "yyyy" => year(4, false),

            // week-numbering year
            "Y" => FieldFormatter::WeekNumberingYear { digits: 1, trim: false },
            "YY" => FieldFormatter::WeekNumberingYear { digits: 2, trim: true },
            "YYY" => FieldFormatter::WeekNumberingYear { digits: 3, trim: false },
            "YYYY" => FieldFormatter::WeekNumberingYear { digits: 4, trim: false },

            // month
            "M" | "L" => with_offset(Month, 1, 1),
            "MM" | "LL" => with_offset(Month, 2, 1),
            "MMM" => name(Months, Abbreviated),
            "MMMM" => name(Months, Wide),
            "MMMMM" => name(Months, Narrow),
            "LLL" => standalone(Months, Abbreviated),
            "LLLL" => standalone(Months, Wide),
            "LLLLL" => standalone(Months, Narrow),

            // week
            "w" => FieldFormatter::Week { digits: 1, month_based: false },
            "ww" => FieldFormatter::Week { digits: 2, month_based: false },
            "W" => FieldFormatter::Week { digits: 1, month_based: true },

            // day
            "d" => numeric(Date, 1),
            "dd" => numeric(Date, 2),

            // weekday
            "c" | "cc" => numeric(Day, 1),
            "ccc" => standalone(Days, Abbreviated),
            "cccc" => standalone(Days, Wide),
            "ccccc" => standalone(Days, Narrow),
            "cccccc" => standalone(Days, Short),
            "E" | "EE" | "EEE" => name(Days, Abbreviated),
            "EEEE" => name(Days, Wide),
            "EEEEE" => name(Days, Narrow),
            "EEEEEE" => name(Days, Short),

            // period
            "a" | "aa" | "aaa" => name(DayPeriods, Abbreviated),
            "aaaa" => name(DayPeriods, Wide),
            "aaaaa" => name(DayPeriods, Narrow),
            "b" | "bb" | "bbb" => extended(FormStyle::Standalone, Abbreviated),
            "bbbb" => extended(FormStyle::Standalone, Wide),
            "bbbbb" => extended(FormStyle::Standalone, Narrow),
            "B" | "BB" | "BBB" => extended(FormStyle::Format, Abbreviated),
            "BBBB" => extended(FormStyle::Format, Wide),
            "BBBBB" => extended(FormStyle::Format, Narrow),

            // hour
            "h" => with_offset(Hours, 1, -12),
            "hh" => with_offset(Hours, 2, -12),
            "H" => numeric(Hours, 1),
            "HH" => numeric(Hours, 2),

            // minute, second
            "m" => numeric(Minutes, 1),
            "mm" => numeric(Minutes, 2),
            "s" => numeric(Seconds, 1),
            "ss" => numeric(Seconds, 2),
            "S" => numeric(FractionalSeconds, 1),
            "SS" => numeric(FractionalSeconds, 2),
            "SSS" => numeric(FractionalSeconds, 3),

            // zone
            "Z" | "ZZ" | "ZZZ" => FieldFormatter::TimeZone(ZoneWidth::Short),
            "ZZZZZ" => FieldFormatter::TimeZone(ZoneWidth::Extended),
            "O" | "OO" | "OOO" | "z" | "zz" | "zzz" => FieldFormatter::TimeZone(ZoneWidth::ShortGmt),
            "OOOO" | "ZZZZ" | "zzzz" => FieldFormatter::TimeZone(ZoneWidth::Long),

            _ => return None,
        })
    }

    /// Renders the field of `wall`, a wall-clock time `offset` minutes east
    /// of UTC.
    pub fn format(&self, wall: &NaiveDateTime, offset: i32, locale: &LocaleData) -> Result<String> {
        let minus = locale.number_symbol(NumberSymbol::MinusSign);
        match *self {
            FieldFormatter::Numeric {
                field,
                digits,
                offset: shift,
                trim,
                neg_wrap,
            } => {
                let mut part = date_part(field, wall);
                if shift > 0 || part > -shift {
                    part += shift;
                }
                match field {
                    DateField::Hours if part == 0 && shift == -12 => part = 12,
                    DateField::FractionalSeconds => {
                        let mut millis = pad_number(part, 3, minus, false, false);
                        millis.truncate(digits);
                        return Ok(millis);
                    },
                    _ => {},
                }
                Ok(pad_number(part, digits, minus, trim, neg_wrap))
            },
            FieldFormatter::Translation {
                kind,
                width,
                form,
                extended,
            } => translation(wall, locale, kind, width, form, extended),
            FieldFormatter::WeekNumberingYear { digits, trim } => {
                let thursday = thursday_this_iso_week(wall.date());
                Ok(pad_number(thursday.year() as i64, digits, minus, trim, false))
            },
            FieldFormatter::Week {
                digits,
                month_based,
            } => {
                let week = if month_based {
                    let first = create_date(wall.year() as i64, wall.month0() as i64, 1)
                        .map_or(0, weekday_of);
                    1 + (wall.day() as i64 + first - 1).div_euclid(7)
                } else {
                    let thursday = thursday_this_iso_week(wall.date());
                    let first_thursday = first_thursday_of_year(thursday.year());
                    1 + (thursday - first_thursday).num_days().div_euclid(7)
                };
                Ok(pad_number(week, digits, minus, false, false))
            },
            FieldFormatter::TimeZone(width) => Ok(format_zone(width, offset, minus)),
        }
    }
}

fn date_part(field: DateField, wall: &NaiveDateTime) -> i64 {
    match field {
        DateField::FullYear => wall.year() as i64,
        DateField::Month => wall.month0() as i64,
        DateField::Date => wall.day() as i64,
        DateField::Hours => wall.hour() as i64,
        DateField::Minutes => wall.minute() as i64,
        DateField::Seconds => wall.second() as i64,
        DateField::FractionalSeconds => (wall.nanosecond() / 1_000_000).min(999) as i64,
        DateField::Day => weekday_of(wall.date()),
    }
}

/// Left-pads `num` with zeros to `digits`.
///
/// Negative values get `minus_sign`, unless `neg_wrap` is set: then values
/// `<= 0` count backwards from 1 (era years, year 0 is 1 BC). `trim` keeps
/// only the last `digits` digits.
pub fn pad_number(num: i64, digits: usize, minus_sign: &str, trim: bool, neg_wrap: bool) -> String {
    let mut num = num;
    let mut neg = "";
    if num < 0 || (neg_wrap && num <= 0) {
        if neg_wrap {
            num = -num + 1;
        } else {
            num = -num;
            neg = minus_sign;
        }
    }

    let mut buffer = itoa::Buffer::new();
    let text = buffer.format(num);
    let mut padded = String::with_capacity(digits.max(text.len()) + neg.len());
    padded.push_str(neg);
    let start = padded.len();
    padded.extend(std::iter::repeat('0').take(digits.saturating_sub(text.len())));
    padded.push_str(text);
    if trim {
        let len = padded.len() - start;
        if len > digits {
            padded.replace_range(start..start + len - digits, "");
        }
    }
    padded
}

fn translation(
    wall: &NaiveDateTime,
    locale: &LocaleData,
    kind: TranslationKind,
    width: TranslationWidth,
    form: FormStyle,
    extended: bool,
) -> Result<String> {
    let text = match kind {
        TranslationKind::Months => locale.month_names(form, width)?[wall.month0() as usize],
        TranslationKind::Days => locale.day_names(form, width)?[weekday_of(wall.date()) as usize],
        TranslationKind::DayPeriods => {
            let (hours, minutes) = (wall.hour(), wall.minute());
            if extended {
                let rules = locale.extra_day_period_rules()?;
                let periods = locale.extra_day_periods(form, width)?;
                let found = rules
                    .iter()
                    .position(|rule| rule.matches(hours, minutes))
                    .and_then(|index| periods.get(index));
                if let Some(period) = found {
                    return Ok(period.to_string());
                }
            }
            locale.day_periods(form, width)?[usize::from(hours >= 12)]
        },
        TranslationKind::Eras => locale.era_names(width)?[usize::from(wall.year() > 0)],
    };
    Ok(text.to_string())
}

fn format_zone(width: ZoneWidth, offset: i32, minus_sign: &str) -> String {
    let sign = if offset >= 0 { "+" } else { minus_sign };
    let hours = (offset.abs() / 60) as i64;
    let minutes = (offset.abs() % 60) as i64;
    match width {
        ZoneWidth::Short => format!(
            "{sign}{}{}",
            pad_number(hours, 2, minus_sign, false, false),
            pad_number(minutes, 2, minus_sign, false, false)
        ),
        ZoneWidth::ShortGmt => format!("GMT{sign}{}", pad_number(hours, 1, minus_sign, false, false)),
        ZoneWidth::Long => format!(
            "GMT{sign}{}:{}",
            pad_number(hours, 2, minus_sign, false, false),
            pad_number(minutes, 2, minus_sign, false, false)
        ),
        ZoneWidth::Extended if offset == 0 => "Z".into(),
        ZoneWidth::Extended => format!(
            "{sign}{}:{}",
            pad_number(hours, 2, minus_sign, false, false),
            pad_number(minutes, 2, minus_sign, false, false)
        ),
    }
}

fn thursday_this_iso_week(date: NaiveDate) -> NaiveDate {
    let current_day = weekday_of(date);
    let delta = if current_day == 0 { -3 } else { THURSDAY - current_day };
    date + chrono::Duration::days(delta)
}

fn first_thursday_of_year(year: i32) -> NaiveDate {
    let first_day = create_date(year as i64, 0, 1).map_or(0, weekday_of);
    let target = if first_day <= THURSDAY { THURSDAY } else { THURSDAY + 7 };
    create_date(year as i64, 0, 1 + target - first_day)
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or_default()
}

/// Resolves a named format (`shortDate`, `medium`, …) to its locale pattern.
///
/// Composite names fill the locale's date-time template with the time
/// (`{0}`) and date (`{1}`) patterns of the same width.
pub fn named_format(locale: &LocaleData, name: &str) -> Result<Option<String>> {
    let pattern = match name {
        "shortDate" => locale.date_format(FormatWidth::Short)?.to_string(),
        "mediumDate" => locale.date_format(FormatWidth::Medium)?.to_string(),
        "longDate" => locale.date_format(FormatWidth::Long)?.to_string(),
        "fullDate" => locale.date_format(FormatWidth::Full)?.to_string(),
        "shortTime" => locale.time_format(FormatWidth::Short)?.to_string(),
        "mediumTime" => locale.time_format(FormatWidth::Medium)?.to_string(),
        "longTime" => locale.time_format(FormatWidth::Long)?.to_string(),
        "fullTime" => locale.time_format(FormatWidth::Full)?.to_string(),
        "short" => date_time(locale, FormatWidth::Short)?,
        "medium" => date_time(locale, FormatWidth::Medium)?,
        "long" => date_time(locale, FormatWidth::Long)?,
        "full" => date_time(locale, FormatWidth::Full)?,
        _ => return Ok(None),
    };
    Ok(Some(pattern))
}

fn date_time(locale: &LocaleData, width: FormatWidth) -> Result<String> {
    let time = locale.time_format(width)?;
    let date = locale.date_format(width)?;
    let template = locale.date_time_format(width)?;
    Ok(format_date_time(template, &[time, date]))
}

/// Replaces `{n}` placeholders with `values[n]`. Unknown placeholders are
/// kept verbatim.
pub fn format_date_time(template: &str, values: &[&str]) -> String {
    let mut result = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                let key = &after[..close];
                match key.parse::<usize>().ok().and_then(|index| values.get(index)) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[open..open + close + 2]),
                }
                rest = &after[close + 1..];
            },
            _ => {
                result.push('{');
                rest = after;
            },
        }
    }
    result.push_str(rest);
    result
}

/// Renders `parts` against a wall-clock time. Used by the engine once the
/// per-token formatters have been resolved.
pub(crate) fn render(
    parts: &[(&str, Option<FieldFormatter>)],
    wall: &NaiveDateTime,
    offset: i32,
    locale: &LocaleData,
) -> Result<String> {
    let mut text = String::with_capacity(parts.len() * 4);
    for (part, formatter) in parts {
        match formatter {
            Some(formatter) => text.push_str(&formatter.format(wall, offset, locale)?),
            None => text.push_str(&format_literal(part)),
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use ngcommon_locale::{data, LocaleError};

    use super::*;
    use crate::error::FormatError;

    fn wall(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    fn fmt(token: &str, wall: &NaiveDateTime, offset: i32, locale: &LocaleData) -> String {
        FieldFormatter::from_token(token)
            .unwrap_or_else(|| panic!("{token} is not a field"))
            .format(wall, offset, locale)
            .unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("MMM d, y"), vec!["MMM", " ", "d", ", ", "y"]);
        assert_eq!(
            tokenize("{1} 'at' {0}"),
            vec!["{1} ", "'at'", " {0}"]
        );
        assert_eq!(tokenize("GGGGGG"), vec!["GGGGG", "G"]);
        assert_eq!(tokenize("h 'o''clock'"), vec!["h", " ", "'o''clock'"]);
        assert_eq!(tokenize("''"), vec!["''"]);
    }

    #[test]
    fn test_tokenize_drops_unterminated_quote() {
        assert_eq!(tokenize("'top"), vec!["top"]);
    }

    #[test]
    fn test_format_literal() {
        assert_eq!(format_literal("''"), "'");
        assert_eq!(format_literal("'at'"), "at");
        assert_eq!(format_literal("'o''clock'"), "o'clock");
        assert_eq!(format_literal(", "), ", ");
    }

    #[test]
    fn test_pad_number() {
        assert_eq!(pad_number(5, 2, "-", false, false), "05");
        assert_eq!(pad_number(-5, 2, "-", false, false), "-05");
        assert_eq!(pad_number(2016, 2, "-", true, false), "16");
        assert_eq!(pad_number(7, 2, "-", true, false), "07");
        assert_eq!(pad_number(2016, 1, "-", false, false), "2016");
        assert_eq!(pad_number(0, 1, "-", false, true), "1");
        assert_eq!(pad_number(-43, 4, "-", false, true), "0044");
        assert_eq!(pad_number(-3, 1, "\u{2212}", false, false), "\u{2212}3");
    }

    #[test]
    fn test_year_tokens() {
        let en = &data::EN;
        let date = wall(2016, 9, 19, 0, 0, 0, 0);
        assert_eq!(fmt("y", &date, 0, en), "2016");
        assert_eq!(fmt("yy", &date, 0, en), "16");
        assert_eq!(fmt("yyy", &date, 0, en), "2016");
        assert_eq!(fmt("yyyy", &date, 0, en), "2016");

        let early = wall(33, 1, 1, 0, 0, 0, 0);
        assert_eq!(fmt("y", &early, 0, en), "33");
        assert_eq!(fmt("yyyy", &early, 0, en), "0033");
        assert_eq!(fmt("G", &early, 0, en), "AD");

        let bc = wall(0, 6, 1, 0, 0, 0, 0);
        assert_eq!(fmt("y", &bc, 0, en), "1");
        assert_eq!(fmt("GGGG", &bc, 0, en), "Before Christ");
    }

    #[test]
    fn test_month_and_day_tokens() {
        let en = &data::EN;
        let date = wall(2010, 9, 3, 12, 5, 8, 0);
        assert_eq!(fmt("M", &date, 0, en), "9");
        assert_eq!(fmt("MM", &date, 0, en), "09");
        assert_eq!(fmt("MMM", &date, 0, en), "Sep");
        assert_eq!(fmt("MMMM", &date, 0, en), "September");
        assert_eq!(fmt("MMMMM", &date, 0, en), "S");
        assert_eq!(fmt("LLLL", &date, 0, en), "September");
        assert_eq!(fmt("d", &date, 0, en), "3");
        assert_eq!(fmt("dd", &date, 0, en), "03");
        assert_eq!(fmt("EEE", &date, 0, en), "Fri");
        assert_eq!(fmt("EEEE", &date, 0, en), "Friday");
        assert_eq!(fmt("EEEEE", &date, 0, en), "F");
        assert_eq!(fmt("EEEEEE", &date, 0, en), "Fr");
        assert_eq!(fmt("c", &date, 0, en), "5");
        assert_eq!(fmt("cccc", &date, 0, en), "Friday");
    }

    #[test]
    fn test_standalone_names() {
        let de = &data::DE;
        let date = wall(2016, 3, 7, 0, 0, 0, 0);
        assert_eq!(fmt("MMM", &date, 0, de), "März");
        assert_eq!(fmt("LLL", &date, 0, de), "Mär");
        assert_eq!(fmt("EEE", &date, 0, de), "Mo.");
        assert_eq!(fmt("ccc", &date, 0, de), "Mo");
    }

    #[test]
    fn test_hour_tokens() {
        let en = &data::EN;
        let midnight = wall(2016, 1, 1, 0, 7, 0, 0);
        let noon = wall(2016, 1, 1, 12, 7, 0, 0);
        let evening = wall(2016, 1, 1, 21, 7, 0, 0);
        assert_eq!(fmt("h", &midnight, 0, en), "12");
        assert_eq!(fmt("h", &noon, 0, en), "12");
        assert_eq!(fmt("hh", &evening, 0, en), "09");
        assert_eq!(fmt("H", &midnight, 0, en), "0");
        assert_eq!(fmt("HH", &evening, 0, en), "21");
        assert_eq!(fmt("a", &midnight, 0, en), "AM");
        assert_eq!(fmt("a", &noon, 0, en), "PM");
        assert_eq!(fmt("aaaaa", &evening, 0, en), "p");
        assert_eq!(fmt("m", &midnight, 0, en), "7");
        assert_eq!(fmt("mm", &midnight, 0, en), "07");
    }

    #[test]
    fn test_fractional_seconds_truncate() {
        let en = &data::EN;
        let date = wall(2016, 1, 1, 0, 0, 9, 78);
        assert_eq!(fmt("s", &date, 0, en), "9");
        assert_eq!(fmt("ss", &date, 0, en), "09");
        assert_eq!(fmt("S", &date, 0, en), "0");
        assert_eq!(fmt("SS", &date, 0, en), "07");
        assert_eq!(fmt("SSS", &date, 0, en), "078");
    }

    #[test]
    fn test_week_tokens() {
        let en = &data::EN;
        // 2016-01-01 is a Friday, ISO week 53 of 2015
        let date = wall(2016, 1, 1, 0, 0, 0, 0);
        assert_eq!(fmt("w", &date, 0, en), "53");
        assert_eq!(fmt("Y", &date, 0, en), "2015");
        assert_eq!(fmt("YY", &date, 0, en), "15");

        let date = wall(2016, 1, 4, 0, 0, 0, 0);
        assert_eq!(fmt("ww", &date, 0, en), "01");
        assert_eq!(fmt("YYYY", &date, 0, en), "2016");

        let date = wall(2014, 12, 29, 0, 0, 0, 0);
        assert_eq!(fmt("w", &date, 0, en), "1");
        assert_eq!(fmt("Y", &date, 0, en), "2015");

        // September 2016 starts on a Thursday
        assert_eq!(fmt("W", &wall(2016, 9, 3, 0, 0, 0, 0), 0, en), "1");
        assert_eq!(fmt("W", &wall(2016, 9, 4, 0, 0, 0, 0), 0, en), "2");
        assert_eq!(fmt("W", &wall(2016, 9, 30, 0, 0, 0, 0), 0, en), "5");
    }

    #[test]
    fn test_zone_tokens() {
        let en = &data::EN;
        let date = wall(2016, 1, 1, 0, 0, 0, 0);
        assert_eq!(fmt("Z", &date, 60, en), "+0100");
        assert_eq!(fmt("Z", &date, -330, en), "-0530");
        assert_eq!(fmt("Z", &date, -30, en), "-0030");
        assert_eq!(fmt("ZZZZ", &date, -330, en), "GMT-05:30");
        assert_eq!(fmt("O", &date, 120, en), "GMT+2");
        assert_eq!(fmt("z", &date, 0, en), "GMT+0");
        assert_eq!(fmt("zzzz", &date, 0, en), "GMT+00:00");
        assert_eq!(fmt("ZZZZZ", &date, 0, en), "Z");
        assert_eq!(fmt("ZZZZZ", &date, 90, en), "+01:30");
    }

    #[test]
    fn test_extended_day_periods() {
        let en = &data::EN;
        assert_eq!(fmt("B", &wall(2016, 1, 1, 0, 0, 0, 0), 0, en), "midnight");
        assert_eq!(fmt("B", &wall(2016, 1, 1, 12, 0, 0, 0), 0, en), "noon");
        assert_eq!(fmt("B", &wall(2016, 1, 1, 7, 30, 0, 0), 0, en), "in the morning");
        assert_eq!(fmt("BBBBB", &wall(2016, 1, 1, 12, 0, 0, 0), 0, en), "n");
        assert_eq!(fmt("b", &wall(2016, 1, 1, 19, 0, 0, 0), 0, en), "evening");
        assert_eq!(fmt("bbbb", &wall(2016, 1, 1, 23, 0, 0, 0), 0, en), "night");

        let de = &data::DE;
        assert_eq!(fmt("BBBB", &wall(2016, 1, 1, 11, 0, 0, 0), 0, de), "vormittags");
    }

    #[test]
    fn test_extended_day_periods_need_extra_data() {
        let formatter = FieldFormatter::from_token("B").unwrap();
        let error = formatter
            .format(&wall(2016, 1, 1, 7, 30, 0, 0), 0, &data::FR)
            .unwrap_err();
        assert_eq!(
            error,
            FormatError::Locale(LocaleError::MissingExtraLocaleData {
                locale: "fr".into()
            })
        );
    }

    #[test]
    fn test_named_format() {
        let en = &data::EN;
        assert_eq!(named_format(en, "mediumDate").unwrap().as_deref(), Some("MMM d, y"));
        assert_eq!(
            named_format(en, "short").unwrap().as_deref(),
            Some("M/d/yy, h:mm a")
        );
        assert_eq!(
            named_format(en, "full").unwrap().as_deref(),
            Some("EEEE, MMMM d, y 'at' h:mm:ss a zzzz")
        );
        assert_eq!(
            named_format(en, "medium").unwrap().as_deref(),
            Some("MMM d, y, h:mm:ss a")
        );
        assert_eq!(named_format(en, "yyyy").unwrap(), None);
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time("{1}, {0}", &["T", "D"]), "D, T");
        assert_eq!(format_date_time("{2} {x} {}", &["T"]), "{2} {x} {}");
    }

    #[test]
    fn test_unknown_tokens_are_literals() {
        assert_eq!(FieldFormatter::from_token("GGGGGG"), None);
        assert_eq!(FieldFormatter::from_token(", "), None);
    }
}
