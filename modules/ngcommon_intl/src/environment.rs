// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

// Default locale used when a caller passes an empty locale id
pub const ENV_NGCOMMON_LOCALE: &str = "NGCOMMON_LOCALE";

// Default ISO 4217 code for currency formatting
pub const ENV_NGCOMMON_CURRENCY_CODE: &str = "NGCOMMON_CURRENCY_CODE";

// Default timezone for date formatting, otherwise the host zone
pub const ENV_NGCOMMON_TIMEZONE: &str = "NGCOMMON_TIMEZONE";

// Named format or pattern used by `FormatEngine::format_date_default`
pub const ENV_NGCOMMON_DATE_FORMAT: &str = "NGCOMMON_DATE_FORMAT";
