// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Missing locale data for the locale \"{locale}\".")]
    MissingLocaleData { locale: String },

    #[error("Missing extra locale data for the locale \"{locale}\". Use \"register_locale_data\" to load new data.")]
    MissingExtraLocaleData { locale: String },

    #[error("No plural message found for value \"{value}\"")]
    NoPluralMatch { value: String },

    #[error("Locale data API: {0}")]
    Invariant(String),
}
