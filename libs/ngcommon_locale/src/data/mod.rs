// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Baked CLDR locale data.
//!
//! Data sourced from: https://github.com/unicode-org/cldr-json

mod de;
mod en;
mod en_gb;
mod fr;

pub use de::{DE, DE_EXTRA};
pub use en::{EN, EN_EXTRA};
pub use en_gb::EN_GB;
pub use fr::FR;

use crate::LocaleData;

/// Locales registered when a registry is created. English is always
/// available as the built-in fallback and is not part of this list.
pub static BAKED: &[&LocaleData] = &[&EN_GB, &DE, &FR];

pub(crate) const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
