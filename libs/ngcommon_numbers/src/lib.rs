// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Decimal helpers shared by the number formatting engine and the plural rules.
//!
//! Values are never rounded with binary floating point arithmetic. A float is
//! first printed with the shortest round-trip representation (the same digits
//! an ECMAScript engine prints for `Number.prototype.toString`) and every
//! further step works on that decimal text or on the digit buffer of a
//! [`ParsedNumber`].

mod digits_info;
mod error;
mod parsed_number;

pub use digits_info::DigitsInfo;
pub use error::NumberError;
pub use parsed_number::{checked_count, ParsedNumber, MAX_DIGITS};

use std::result::Result as StdResult;

/// Largest integer an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns a string representation of the float value.
///
/// Returns error with a `str` if value is non-finite
#[inline(always)]
pub fn float_to_str(buf: &mut ryu::Buffer, float: f64) -> StdResult<&str, &str> {
    const EXP_MASK: u64 = 0x7ff0000000000000;
    let bits = float.to_bits();
    if bits & EXP_MASK == EXP_MASK {
        return Err(get_nonfinite(bits));
    }

    let str = buf.format_finite(float);
    Ok(str)
}

#[inline(always)]
#[cold]
fn get_nonfinite<'a>(bits: u64) -> &'a str {
    const MANTISSA_MASK: u64 = 0x000fffffffffffff;
    const SIGN_MASK: u64 = 0x8000000000000000;
    if bits & MANTISSA_MASK != 0 {
        "NaN"
    } else if bits & SIGN_MASK != 0 {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// Prints `value` the way `Number.prototype.toString()` does in radix 10.
///
/// Plain notation is used for decimal exponents in `-7 < n <= 21`,
/// scientific notation (`1.5e-7`, `1e+21`) otherwise. Negative zero prints
/// as `0`.
pub fn number_to_string(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        let mut buffer = itoa::Buffer::new();
        // -0.0 as i64 is 0
        return buffer.format(value as i64).into();
    }

    let mut buffer = ryu::Buffer::new();
    let raw = match float_to_str(&mut buffer, value) {
        Ok(raw) => raw,
        Err(nonfinite) => return nonfinite.into(),
    };

    let (negative, raw) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (mantissa, exponent) = match raw.find('e') {
        Some(index) => (&raw[..index], raw[index + 1..].parse::<i32>().unwrap_or(0)),
        None => (raw, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mut point = int_part.len() as i32 + exponent;

    let leading = digits.len() - digits.trim_start_matches('0').len();
    if leading == digits.len() {
        return "0".into();
    }
    digits.drain(..leading);
    point -= leading as i32;
    digits.truncate(digits.trim_end_matches('0').len());

    let k = digits.len() as i32;
    let mut result = String::with_capacity(digits.len() + 8);
    if negative {
        result.push('-');
    }

    if k <= point && point <= 21 {
        result.push_str(&digits);
        result.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        result.push_str(&digits[..point as usize]);
        result.push('.');
        result.push_str(&digits[point as usize..]);
    } else if -6 < point && point <= 0 {
        result.push_str("0.");
        result.extend(std::iter::repeat('0').take((-point) as usize));
        result.push_str(&digits);
    } else {
        result.push_str(&digits[..1]);
        if k > 1 {
            result.push('.');
            result.push_str(&digits[1..]);
        }
        result.push('e');
        let exp = point - 1;
        if exp >= 0 {
            result.push('+');
        }
        let mut buffer = itoa::Buffer::new();
        result.push_str(buffer.format(exp));
    }
    result
}

/// Largest digit count accepted for integer or fraction digits, the bound
/// ECMAScript puts on `maximumFractionDigits`.
pub const MAX_DIGIT_COUNT: usize = 100;

/// Parses a decimal integer literal, as found in a digit-info string.
/// Counts above [`MAX_DIGIT_COUNT`] are rejected.
pub fn parse_digit_count(text: &str) -> StdResult<usize, NumberError> {
    let text = text.trim();
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        let significant = text.trim_start_matches('0');
        return match significant.parse::<usize>() {
            Ok(count) if count <= MAX_DIGIT_COUNT => Ok(count),
            _ if significant.is_empty() => Ok(0),
            _ => Err(NumberError::DigitCountOutOfRange {
                value: text.to_string(),
                max: MAX_DIGIT_COUNT,
            }),
        };
    }
    Err(NumberError::InvalidInteger(text.to_string()))
}

/// Coerces a numeric string into a number.
///
/// The whole string (surrounding whitespace aside) has to be a finite decimal
/// number: `"1234"` and `"1.5e3"` are accepted, `"1234abc"` and `""` are not.
pub fn str_to_number(value: &str) -> StdResult<f64, NumberError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NumberError::NotANumber(value.to_string()));
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(NumberError::NotANumber(value.to_string())),
    }
}
