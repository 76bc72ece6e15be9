// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The `{minIntegerDigits}.{minFractionDigits}-{maxFractionDigits}` precision string.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{parse_digit_count, NumberError};

static NUMBER_FORMAT_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)?\.((\d+)(-(\d+))?)?$").unwrap());

/// Parsed digit info. Every part is optional; absent parts keep the value of
/// the locale pattern they are applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitsInfo {
    pub min_integer: Option<usize>,
    pub min_fraction: Option<usize>,
    pub max_fraction: Option<usize>,
}

impl DigitsInfo {
    pub fn parse(digits_info: &str) -> Result<Self, NumberError> {
        let captures = NUMBER_FORMAT_REGEXP
            .captures(digits_info)
            .ok_or_else(|| NumberError::InvalidDigitsInfo(digits_info.to_string()))?;

        let group = |index: usize| -> Result<Option<usize>, NumberError> {
            captures
                .get(index)
                .map(|m| parse_digit_count(m.as_str()))
                .transpose()
        };

        Ok(Self {
            min_integer: group(1)?,
            min_fraction: group(3)?,
            max_fraction: group(5)?,
        })
    }

    /// Merges these overrides into the `(min_int, min_frac, max_frac)` of a
    /// pattern.
    ///
    /// A minimum fraction given without a maximum raises the maximum when it
    /// would otherwise be exceeded. An explicit maximum below the minimum is
    /// kept as is and rejected later by rounding.
    pub fn apply(&self, min_int: usize, min_frac: usize, max_frac: usize) -> (usize, usize, usize) {
        let min_int = self.min_integer.unwrap_or(min_int);
        let min_frac = self.min_fraction.unwrap_or(min_frac);
        let max_frac = match (self.max_fraction, self.min_fraction) {
            (Some(max), _) => max,
            (None, Some(_)) if min_frac > max_frac => min_frac,
            _ => max_frac,
        };
        (min_int, min_frac, max_frac)
    }
}

impl FromStr for DigitsInfo {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
