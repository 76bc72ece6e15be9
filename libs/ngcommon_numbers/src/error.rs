// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("{0} is not a valid digit info")]
    InvalidDigitsInfo(String),

    #[error("Invalid integer literal when parsing {0}")]
    InvalidInteger(String),

    #[error(
        "The minimum number of digits after fraction ({min}) is higher than the maximum ({max})."
    )]
    FractionRange { min: usize, max: usize },

    #[error("Digit count {value} is larger than {max}")]
    DigitCountOutOfRange { value: String, max: usize },

    #[error("{0} is not a number")]
    NotANumber(String),
}
