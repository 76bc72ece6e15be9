// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point digit buffer used to scale and round values before rendering.

use crate::{number_to_string, NumberError, MAX_DIGIT_COUNT};

/// Integer parts longer than this are rendered with an exponent instead.
pub const MAX_DIGITS: i32 = 22;

/// A non-negative decimal value as a buffer of digits.
///
/// The value is `0.d₀d₁d₂… × 10^integer_len × 10^exponent`. `integer_len` may
/// be negative (leading fractional zeros) or larger than `digits.len()`
/// (trailing integer zeros). `exponent` is only non-zero for values whose
/// integer part is longer than [`MAX_DIGITS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub digits: Vec<u8>,
    pub integer_len: i32,
    pub exponent: i32,
}

impl ParsedNumber {
    /// Decomposes `|value|` from its shortest round-trip decimal text.
    ///
    /// `value` must be finite.
    pub fn parse(value: f64) -> Self {
        let mut num_str = number_to_string(value.abs());
        let mut exponent = 0;

        let mut integer_len = match num_str.find('.') {
            Some(index) => {
                num_str.remove(index);
                index as i32
            },
            None => -1,
        };

        match num_str.find(['e', 'E']) {
            Some(index) if index > 0 => {
                if integer_len < 0 {
                    integer_len = index as i32;
                }
                integer_len += num_str[index + 1..].parse::<i32>().unwrap_or(0);
                num_str.truncate(index);
            },
            _ => {
                if integer_len < 0 {
                    integer_len = num_str.len() as i32;
                }
            },
        }

        let bytes = num_str.as_bytes();
        let leading = bytes.iter().take_while(|&&b| b == b'0').count();

        let mut digits = if leading == bytes.len() {
            integer_len = 1;
            vec![0]
        } else {
            let last = bytes.iter().rposition(|&b| b != b'0').unwrap_or(leading);
            integer_len -= leading as i32;
            bytes[leading..=last].iter().map(|b| b - b'0').collect()
        };

        if integer_len > MAX_DIGITS {
            digits.truncate((MAX_DIGITS - 1) as usize);
            exponent = integer_len - 1;
            integer_len = 1;
        }

        Self {
            digits,
            integer_len,
            exponent,
        }
    }

    /// Whether every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Multiplies the value by 100 by moving the decimal point.
    pub fn to_percent(&mut self) {
        if self.digits.first() == Some(&0) {
            return;
        }

        if self.exponent != 0 {
            self.exponent += 2;
            return;
        }

        let fraction_len = self.digits.len() as i32 - self.integer_len;
        match fraction_len {
            0 => self.digits.extend_from_slice(&[0, 0]),
            1 => self.digits.push(0),
            _ => {},
        }
        self.integer_len += 2;
    }

    /// Rounds half-up to at most `max_frac` fraction digits and pads to at
    /// least `min_frac`.
    ///
    /// A carry out of the most significant digit grows the integer part
    /// (`9.995` at two digits becomes `10.00`). Trailing fractional zeros
    /// beyond `min_frac` are dropped.
    pub fn round(&mut self, min_frac: usize, max_frac: usize) -> Result<(), NumberError> {
        if min_frac > max_frac {
            return Err(NumberError::FractionRange {
                min: min_frac,
                max: max_frac,
            });
        }
        let max_frac = checked_count(max_frac)?;
        let min_frac = checked_count(min_frac)?;

        let mut fraction_len = self.digits.len() as i32 - self.integer_len;
        let fraction_size = fraction_len.max(min_frac).min(max_frac);

        // index of the first dropped digit
        let mut round_at = fraction_size + self.integer_len;
        let digit = usize::try_from(round_at)
            .ok()
            .and_then(|index| self.digits.get(index).copied())
            .unwrap_or(0);

        if round_at > 0 {
            self.digits.truncate(round_at as usize);
        } else {
            // rounded to zero
            fraction_len = fraction_len.max(0);
            self.integer_len = 1;
            round_at = fraction_size + 1;
            self.digits.clear();
            self.digits.resize(round_at.max(1) as usize, 0);
        }

        if digit >= 5 {
            self.digits[(round_at - 1) as usize] += 1;
        }

        while fraction_len < fraction_size.max(0) {
            self.digits.push(0);
            fraction_len += 1;
        }

        let mut drop_trailing_zeros = fraction_size != 0;
        let min_len = min_frac + self.integer_len;

        let mut carry = 0;
        for index in (0..self.digits.len()).rev() {
            let d = self.digits[index] + carry;
            self.digits[index] = if d < 10 { d } else { d - 10 };
            if drop_trailing_zeros {
                if self.digits[index] == 0 && index as i32 >= min_len {
                    self.digits.pop();
                } else {
                    drop_trailing_zeros = false;
                }
            }
            carry = u8::from(d >= 10);
        }

        if carry != 0 {
            self.digits.insert(0, carry);
            self.integer_len += 1;
        }

        Ok(())
    }
}

/// Converts a digit count for index arithmetic, rejecting counts above
/// [`MAX_DIGIT_COUNT`].
pub fn checked_count(count: usize) -> Result<i32, NumberError> {
    i32::try_from(count)
        .ok()
        .filter(|_| count <= MAX_DIGIT_COUNT)
        .ok_or_else(|| NumberError::DigitCountOutOfRange {
            value: count.to_string(),
            max: MAX_DIGIT_COUNT,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(digits: &[u8], integer_len: i32, exponent: i32) -> ParsedNumber {
        ParsedNumber {
            digits: digits.to_vec(),
            integer_len,
            exponent,
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(ParsedNumber::parse(1200.0), parsed(&[1, 2], 4, 0));
        assert_eq!(ParsedNumber::parse(-7.0), parsed(&[7], 1, 0));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(ParsedNumber::parse(12.5), parsed(&[1, 2, 5], 2, 0));
        assert_eq!(ParsedNumber::parse(0.004), parsed(&[4], -2, 0));
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(ParsedNumber::parse(0.0), parsed(&[0], 1, 0));
        assert!(ParsedNumber::parse(0.0).is_zero());
    }

    #[test]
    fn test_parse_exponential_notation() {
        assert_eq!(ParsedNumber::parse(1.5e-7), parsed(&[1, 5], -6, 0));
        assert_eq!(ParsedNumber::parse(1e21), parsed(&[1], 22, 0));
    }

    #[test]
    fn test_parse_huge_number_uses_exponent() {
        let number = ParsedNumber::parse(1.2345e30);
        assert_eq!(number, parsed(&[1, 2, 3, 4, 5], 1, 30));

        let number = ParsedNumber::parse(1e22);
        assert_eq!(number, parsed(&[1], 1, 22));
    }

    #[test]
    fn test_to_percent() {
        let mut number = ParsedNumber::parse(0.255);
        number.to_percent();
        assert_eq!(number, parsed(&[2, 5, 5], 2, 0));

        let mut number = ParsedNumber::parse(3.0);
        number.to_percent();
        assert_eq!(number, parsed(&[3, 0, 0], 3, 0));

        let mut number = ParsedNumber::parse(0.0);
        number.to_percent();
        assert_eq!(number, parsed(&[0], 1, 0));

        let mut number = ParsedNumber::parse(1e30);
        number.to_percent();
        assert_eq!(number.exponent, 32);
    }

    #[test]
    fn test_round_carry_into_integer_part() {
        let mut number = ParsedNumber::parse(9.995);
        number.round(2, 2).unwrap();
        assert_eq!(number, parsed(&[1, 0, 0, 0], 2, 0));
    }

    #[test]
    fn test_round_half_up() {
        let mut number = ParsedNumber::parse(25.5);
        number.round(0, 0).unwrap();
        assert_eq!(number, parsed(&[2, 6], 2, 0));

        let mut number = ParsedNumber::parse(0.5);
        number.round(0, 0).unwrap();
        assert_eq!(number, parsed(&[1], 1, 0));
    }

    #[test]
    fn test_round_to_zero() {
        let mut number = ParsedNumber::parse(0.004);
        number.round(2, 2).unwrap();
        assert_eq!(number, parsed(&[0, 0, 0], 1, 0));
        assert!(number.is_zero());

        let mut number = ParsedNumber::parse(0.006);
        number.round(0, 2).unwrap();
        assert_eq!(number, parsed(&[0, 0, 1], 1, 0));
    }

    #[test]
    fn test_round_pads_to_min_fraction() {
        let mut number = ParsedNumber::parse(1200.0);
        number.round(2, 3).unwrap();
        assert_eq!(number, parsed(&[1, 2, 0, 0, 0, 0], 4, 0));
    }

    #[test]
    fn test_round_drops_trailing_zeros_down_to_min() {
        let mut number = ParsedNumber::parse(15.5);
        number.round(0, 3).unwrap();
        assert_eq!(number, parsed(&[1, 5, 5], 2, 0));

        let mut number = ParsedNumber::parse(1.99999);
        number.round(1, 3).unwrap();
        assert_eq!(number, parsed(&[2, 0], 1, 0));
    }

    #[test]
    fn test_round_rejects_inverted_range() {
        let mut number = ParsedNumber::parse(1.0);
        assert_eq!(
            number.round(3, 2),
            Err(NumberError::FractionRange { min: 3, max: 2 })
        );
    }

    #[test]
    fn test_round_rejects_oversized_counts() {
        let mut number = ParsedNumber::parse(1.5);
        assert_eq!(
            number.round(0, 2_147_483_648),
            Err(NumberError::DigitCountOutOfRange {
                value: "2147483648".into(),
                max: MAX_DIGIT_COUNT,
            })
        );
        assert_eq!(number, ParsedNumber::parse(1.5));

        number.round(MAX_DIGIT_COUNT, MAX_DIGIT_COUNT).unwrap();
        assert_eq!(number.digits.len(), 1 + MAX_DIGIT_COUNT);
    }

    #[test]
    fn test_checked_count() {
        assert_eq!(checked_count(0), Ok(0));
        assert_eq!(checked_count(MAX_DIGIT_COUNT), Ok(100));
        assert!(checked_count(usize::MAX).is_err());
    }
}
