// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! CLDR plural categories and the rules of the bundled locales.

use std::fmt;

use ngcommon_numbers::number_to_string;

use crate::{LocaleData, LocaleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plural {
    Zero = 0,
    One = 1,
    Two = 2,
    Few = 3,
    Many = 4,
    Other = 5,
}

impl Plural {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plural::Zero => "zero",
            Plural::One => "one",
            Plural::Two => "two",
            Plural::Few => "few",
            Plural::Many => "many",
            Plural::Other => "other",
        }
    }
}

impl fmt::Display for Plural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plural operands as defined by UTS #35.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    /// absolute value
    pub n: f64,
    /// integer digits
    pub i: u64,
    /// number of visible fraction digits
    pub v: usize,
    /// visible fraction digits
    pub f: u64,
    /// visible fraction digits without trailing zeros
    pub t: u64,
    /// compact decimal exponent
    pub e: i32,
}

impl PluralOperands {
    pub fn new(value: f64) -> Self {
        let n = value.abs();
        let text = number_to_string(n);
        let (mantissa, e) = match text.split_once('e') {
            Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
            None => (text.as_str(), 0),
        };
        let fraction = mantissa.split_once('.').map(|(_, f)| f).unwrap_or("");
        let trimmed = fraction.trim_end_matches('0');

        Self {
            n,
            i: n.trunc() as u64,
            v: fraction.len(),
            f: fraction.parse().unwrap_or(0),
            t: trimmed.parse().unwrap_or(0),
            e,
        }
    }
}

/// English and German.
pub fn plural_en(value: f64) -> Plural {
    let op = PluralOperands::new(value);
    if op.i == 1 && op.v == 0 {
        return Plural::One;
    }
    Plural::Other
}

pub fn plural_fr(value: f64) -> Plural {
    let op = PluralOperands::new(value);
    if op.i == 0 || op.i == 1 {
        return Plural::One;
    }
    if (op.e == 0 && op.i != 0 && op.i % 1_000_000 == 0 && op.v == 0) || !(0..=5).contains(&op.e) {
        return Plural::Many;
    }
    Plural::Other
}

/// Picks the message key for `value` among `cases`.
///
/// An exact `=value` case wins over the locale's category, which wins over
/// `other`.
pub fn get_plural_category(
    value: f64,
    cases: &[&str],
    locale: &LocaleData,
) -> Result<String, LocaleError> {
    let exact = format!("={}", number_to_string(value));
    if cases.contains(&exact.as_str()) {
        return Ok(exact);
    }

    let category = (locale.plural)(value).as_str();
    if cases.contains(&category) {
        return Ok(category.to_string());
    }

    if cases.contains(&"other") {
        return Ok("other".to_string());
    }

    Err(LocaleError::NoPluralMatch {
        value: number_to_string(value),
    })
}
