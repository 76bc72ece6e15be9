// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use ngcommon_locale::LocaleError;
use ngcommon_numbers::NumberError;
use thiserror::Error;

/// Broad classification of a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    MissingLocaleData,
    NoPluralMatch,
    InvariantViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Number(#[from] NumberError),

    #[error("{0}")]
    Invariant(String),
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::InvalidArgument(_) | FormatError::Number(_) => ErrorKind::InvalidArgument,
            FormatError::Locale(LocaleError::MissingLocaleData { .. })
            | FormatError::Locale(LocaleError::MissingExtraLocaleData { .. }) => {
                ErrorKind::MissingLocaleData
            },
            FormatError::Locale(LocaleError::NoPluralMatch { .. }) => ErrorKind::NoPluralMatch,
            FormatError::Locale(LocaleError::Invariant(_)) | FormatError::Invariant(_) => {
                ErrorKind::InvariantViolation
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let error: FormatError = NumberError::FractionRange { min: 3, max: 2 }.into();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);

        let error: FormatError = LocaleError::MissingLocaleData {
            locale: "xx".into(),
        }
        .into();
        assert_eq!(error.kind(), ErrorKind::MissingLocaleData);
        assert_eq!(
            error.to_string(),
            "Missing locale data for the locale \"xx\"."
        );

        let error: FormatError = LocaleError::MissingExtraLocaleData {
            locale: "fr".into(),
        }
        .into();
        assert_eq!(error.kind(), ErrorKind::MissingLocaleData);

        let error: FormatError = LocaleError::NoPluralMatch { value: "5".into() }.into();
        assert_eq!(error.kind(), ErrorKind::NoPluralMatch);

        let error = FormatError::Invariant("unknown token".into());
        assert_eq!(error.kind(), ErrorKind::InvariantViolation);
    }
}
