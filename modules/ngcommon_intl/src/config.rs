// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::env;

use tracing::trace;

use crate::environment::{
    ENV_NGCOMMON_CURRENCY_CODE, ENV_NGCOMMON_DATE_FORMAT, ENV_NGCOMMON_LOCALE,
    ENV_NGCOMMON_TIMEZONE,
};

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_CURRENCY_CODE: &str = "USD";
pub const DEFAULT_DATE_FORMAT: &str = "mediumDate";

/// Defaults applied by a [`crate::FormatEngine`] when a caller leaves a
/// parameter out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_locale: String,
    pub default_currency_code: String,
    pub default_timezone: Option<String>,
    pub default_date_format: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.into(),
            default_currency_code: DEFAULT_CURRENCY_CODE.into(),
            default_timezone: None,
            default_date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by the `NGCOMMON_*` environment variables.
    /// Empty variables are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty()).map(|value| {
                trace!(key, value = %value, "engine config override");
                value
            })
        };

        let defaults = Self::default();
        Self {
            default_locale: read(ENV_NGCOMMON_LOCALE).unwrap_or(defaults.default_locale),
            default_currency_code: read(ENV_NGCOMMON_CURRENCY_CODE)
                .unwrap_or(defaults.default_currency_code),
            default_timezone: read(ENV_NGCOMMON_TIMEZONE).or(defaults.default_timezone),
            default_date_format: read(ENV_NGCOMMON_DATE_FORMAT)
                .unwrap_or(defaults.default_date_format),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.default_currency_code = currency_code.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = Some(timezone.into());
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.default_date_format = date_format.into();
        self
    }
}
