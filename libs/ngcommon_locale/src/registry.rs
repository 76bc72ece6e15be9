// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use once_cell::sync::Lazy;
use tracing::trace;

use crate::{data, LocaleData, LocaleError};

static GLOBAL: Lazy<Arc<LocaleRegistry>> = Lazy::new(|| Arc::new(LocaleRegistry::new()));

/// Lowercases `locale` and replaces `_` separators with `-`.
pub fn normalize_locale(locale: &str) -> String {
    locale.to_lowercase().replace('_', "-")
}

/// Locale records keyed by normalized id.
///
/// Lookups try the exact id, then its language subtag. English is always
/// available for `en*` ids even after [`LocaleRegistry::unregister_all`].
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: RwLock<HashMap<String, Arc<LocaleData>>>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// A registry holding the baked locales.
    pub fn new() -> Self {
        let locales = data::BAKED
            .iter()
            .map(|locale| (normalize_locale(locale.locale_id), Arc::new((*locale).clone())))
            .collect();
        Self {
            locales: RwLock::new(locales),
        }
    }

    /// A registry with no registered locales.
    pub fn empty() -> Self {
        Self {
            locales: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Arc<LocaleRegistry> {
        &GLOBAL
    }

    /// Registers `data` under `locale_id`, or under its own id when `None`.
    /// A later registration for the same id replaces the earlier one.
    ///
    /// `data` borrows its tables for `'static`; see [`LocaleData`] for
    /// registering records built at runtime.
    pub fn register(&self, data: LocaleData, locale_id: Option<&str>) {
        let key = normalize_locale(locale_id.unwrap_or(data.locale_id));
        trace!(locale = %key, "registering locale data");
        let mut locales = self.locales.write().unwrap_or_else(|e| e.into_inner());
        locales.insert(key, Arc::new(data));
    }

    /// Exact lookup of a normalized id.
    pub fn get(&self, normalized: &str) -> Option<Arc<LocaleData>> {
        let locales = self.locales.read().unwrap_or_else(|e| e.into_inner());
        locales.get(normalized).cloned()
    }

    /// Resolves `locale` to a record.
    pub fn find(&self, locale: &str) -> Result<Arc<LocaleData>, LocaleError> {
        let normalized = normalize_locale(locale);

        if let Some(found) = self.get(&normalized) {
            return Ok(found);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        if let Some(found) = self.get(language) {
            trace!(locale, language, "falling back to language subtag");
            return Ok(found);
        }

        if language == "en" {
            return Ok(Arc::new(data::EN.clone()));
        }

        Err(LocaleError::MissingLocaleData {
            locale: locale.to_string(),
        })
    }

    /// Removes every registration. English stays resolvable.
    pub fn unregister_all(&self) {
        let mut locales = self.locales.write().unwrap_or_else(|e| e.into_inner());
        locales.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormStyle, TranslationWidth};

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en_US"), "en-us");
        assert_eq!(normalize_locale("DE-at"), "de-at");
    }

    #[test]
    fn test_find_exact_then_language() {
        let registry = LocaleRegistry::new();
        assert_eq!(registry.find("en-GB").unwrap().locale_id, "en-GB");
        assert_eq!(registry.find("en_gb").unwrap().locale_id, "en-GB");
        assert_eq!(registry.find("de-AT").unwrap().locale_id, "de");
        assert_eq!(registry.find("fr-CA").unwrap().locale_id, "fr");
    }

    #[test]
    fn test_find_english_fallback() {
        let registry = LocaleRegistry::empty();
        assert_eq!(registry.find("en-US").unwrap().locale_id, "en");
        assert_eq!(registry.find("en").unwrap().locale_id, "en");
    }

    #[test]
    fn test_find_missing() {
        let registry = LocaleRegistry::new();
        assert_eq!(
            registry.find("xx").unwrap_err(),
            LocaleError::MissingLocaleData {
                locale: "xx".into()
            }
        );
    }

    #[test]
    fn test_register_under_custom_id() {
        let registry = LocaleRegistry::empty();
        registry.register(data::FR.clone(), Some("fr_CH"));
        assert_eq!(registry.find("fr-ch").unwrap().locale_id, "fr");
        assert!(registry.find("fr").is_err());
    }

    #[test]
    fn test_register_runtime_record() {
        let currency: &'static str = Box::leak(String::from("CHF").into_boxed_str());
        let registry = LocaleRegistry::empty();
        registry.register(
            LocaleData {
                locale_id: "de-CH",
                currency_code: Some(currency),
                currency_symbol: Some(currency),
                ..data::DE.clone()
            },
            None,
        );

        let found = registry.find("de_CH").unwrap();
        assert_eq!(found.locale_id, "de-CH");
        assert_eq!(found.currency_code(), Some("CHF"));
        assert_eq!(
            found
                .month_names(FormStyle::Format, TranslationWidth::Wide)
                .unwrap()[2],
            "März"
        );
    }

    #[test]
    fn test_unregister_all() {
        let registry = LocaleRegistry::new();
        registry.unregister_all();
        assert!(registry.find("de").is_err());
        assert!(registry.find("en-GB").is_ok());
    }
}
