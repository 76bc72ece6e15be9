// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! ISO 4217 display data shared by every locale.

use crate::locale_data::{CurrencyInfo, LocaleData};

/// Fraction digits of a currency without explicit data.
pub const DEFAULT_CURRENCY_DIGITS: usize = 2;

/// Which of the two currency symbols to prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyFormat {
    Wide,
    Narrow,
}

const fn info() -> CurrencyInfo {
    CurrencyInfo::EMPTY
}

/// English currency data, sorted by code.
pub static CURRENCIES_EN: &[(&str, CurrencyInfo)] = &[
    ("ADP", info().digits(0)),
    ("AFN", info().narrow("؋").digits(0)),
    ("ALL", info().digits(0)),
    ("AMD", info().narrow("֏").digits(2)),
    ("AOA", info().narrow("Kz")),
    ("ARS", info().narrow("$")),
    ("AUD", info().symbol("A$").narrow("$")),
    ("AZN", info().narrow("₼")),
    ("BAM", info().narrow("KM")),
    ("BBD", info().narrow("$")),
    ("BDT", info().narrow("৳")),
    ("BHD", info().digits(3)),
    ("BIF", info().digits(0)),
    ("BMD", info().narrow("$")),
    ("BND", info().narrow("$")),
    ("BOB", info().narrow("Bs")),
    ("BRL", info().symbol("R$")),
    ("BSD", info().narrow("$")),
    ("BWP", info().narrow("P")),
    ("BYN", info().digits(2)),
    ("BYR", info().digits(0)),
    ("BZD", info().narrow("$")),
    ("CAD", info().symbol("CA$").narrow("$").digits(2)),
    ("CHF", info().digits(2)),
    ("CLF", info().digits(4)),
    ("CLP", info().narrow("$").digits(0)),
    ("CNY", info().symbol("CN¥").narrow("¥")),
    ("COP", info().narrow("$").digits(2)),
    ("CRC", info().narrow("₡").digits(2)),
    ("CUC", info().narrow("$")),
    ("CUP", info().narrow("$")),
    ("CZK", info().narrow("Kč").digits(2)),
    ("DJF", info().digits(0)),
    ("DKK", info().narrow("kr").digits(2)),
    ("DOP", info().narrow("$")),
    ("EGP", info().narrow("E£")),
    ("ESP", info().narrow("₧").digits(0)),
    ("EUR", info().symbol("€")),
    ("FJD", info().narrow("$")),
    ("FKP", info().narrow("£")),
    ("GBP", info().symbol("£")),
    ("GEL", info().narrow("₾")),
    ("GHS", info().narrow("GH₵")),
    ("GIP", info().narrow("£")),
    ("GNF", info().narrow("FG").digits(0)),
    ("GTQ", info().narrow("Q")),
    ("GYD", info().narrow("$").digits(2)),
    ("HKD", info().symbol("HK$").narrow("$")),
    ("HNL", info().narrow("L")),
    ("HRK", info().narrow("kn")),
    ("HUF", info().narrow("Ft").digits(2)),
    ("IDR", info().narrow("Rp").digits(2)),
    ("ILS", info().symbol("₪")),
    ("INR", info().symbol("₹")),
    ("IQD", info().digits(0)),
    ("IRR", info().digits(0)),
    ("ISK", info().narrow("kr").digits(0)),
    ("ITL", info().digits(0)),
    ("JMD", info().narrow("$")),
    ("JOD", info().digits(3)),
    ("JPY", info().symbol("¥").digits(0)),
    ("KHR", info().narrow("៛")),
    ("KMF", info().narrow("CF").digits(0)),
    ("KPW", info().narrow("₩").digits(0)),
    ("KRW", info().symbol("₩").digits(0)),
    ("KWD", info().digits(3)),
    ("KYD", info().narrow("$")),
    ("KZT", info().narrow("₸")),
    ("LAK", info().narrow("₭").digits(0)),
    ("LBP", info().narrow("L£").digits(0)),
    ("LKR", info().narrow("Rs")),
    ("LRD", info().narrow("$")),
    ("LTL", info().narrow("Lt")),
    ("LUF", info().digits(0)),
    ("LVL", info().narrow("Ls")),
    ("LYD", info().digits(3)),
    ("MGA", info().narrow("Ar").digits(0)),
    ("MGF", info().digits(0)),
    ("MMK", info().narrow("K").digits(0)),
    ("MNT", info().narrow("₮").digits(2)),
    ("MRO", info().digits(0)),
    ("MUR", info().narrow("Rs").digits(2)),
    ("MXN", info().symbol("MX$").narrow("$")),
    ("MYR", info().narrow("RM")),
    ("NAD", info().narrow("$")),
    ("NGN", info().narrow("₦")),
    ("NIO", info().narrow("C$")),
    ("NOK", info().narrow("kr").digits(2)),
    ("NPR", info().narrow("Rs")),
    ("NZD", info().symbol("NZ$").narrow("$")),
    ("OMR", info().digits(3)),
    ("PHP", info().symbol("₱")),
    ("PKR", info().narrow("Rs").digits(2)),
    ("PLN", info().narrow("zł")),
    ("PYG", info().narrow("₲").digits(0)),
    ("RON", info().narrow("lei")),
    ("RSD", info().digits(0)),
    ("RUB", info().narrow("₽")),
    ("RWF", info().narrow("RF").digits(0)),
    ("SBD", info().narrow("$")),
    ("SEK", info().narrow("kr").digits(2)),
    ("SGD", info().narrow("$")),
    ("SHP", info().narrow("£")),
    ("SLE", info().digits(2)),
    ("SLL", info().digits(0)),
    ("SOS", info().digits(0)),
    ("SRD", info().narrow("$")),
    ("SSP", info().narrow("£")),
    ("STD", info().digits(0)),
    ("STN", info().narrow("Db")),
    ("SYP", info().narrow("£").digits(0)),
    ("THB", info().narrow("฿")),
    ("TMM", info().digits(0)),
    ("TND", info().digits(3)),
    ("TOP", info().narrow("T$")),
    ("TRL", info().digits(0)),
    ("TRY", info().narrow("₺")),
    ("TTD", info().narrow("$")),
    ("TWD", info().symbol("NT$").narrow("$").digits(2)),
    ("TZS", info().digits(2)),
    ("UAH", info().narrow("₴")),
    ("UGX", info().digits(0)),
    ("USD", info().symbol("$")),
    ("UYI", info().digits(0)),
    ("UYU", info().narrow("$")),
    ("UYW", info().digits(4)),
    ("UZS", info().digits(2)),
    ("VEF", info().narrow("Bs").digits(2)),
    ("VND", info().symbol("₫").digits(0)),
    ("VUV", info().digits(0)),
    ("XAF", info().symbol("FCFA").digits(0)),
    ("XCD", info().symbol("EC$").narrow("$")),
    ("XOF", info().symbol("F\u{202f}CFA").digits(0)),
    ("XPF", info().symbol("CFPF").digits(0)),
    ("XXX", info().symbol("¤")),
    ("YER", info().digits(0)),
    ("ZAR", info().narrow("R")),
    ("ZMK", info().digits(0)),
    ("ZMW", info().narrow("ZK")),
    ("ZWD", info().digits(0)),
];

fn lookup(table: &[(&str, CurrencyInfo)], code: &str) -> Option<CurrencyInfo> {
    table
        .binary_search_by(|(candidate, _)| (*candidate).cmp(code))
        .ok()
        .map(|index| table[index].1)
}

fn currency_info(code: &str, locale: &LocaleData) -> Option<CurrencyInfo> {
    locale.currency(code).or_else(|| lookup(CURRENCIES_EN, code))
}

/// Display symbol of `code` in `locale`, or `code` itself when none is known.
///
/// A narrow symbol is only used when one exists; otherwise the wide symbol is
/// returned.
pub fn currency_symbol_in(code: &str, format: CurrencyFormat, locale: &LocaleData) -> String {
    let info = currency_info(code, locale).unwrap_or_default();
    if format == CurrencyFormat::Narrow {
        if let Some(narrow) = info.narrow_symbol {
            return narrow.to_string();
        }
    }
    info.symbol.unwrap_or(code).to_string()
}

/// Number of fraction digits conventionally shown for `code`.
pub fn get_number_of_currency_digits(code: &str) -> usize {
    lookup(CURRENCIES_EN, code)
        .and_then(|info| info.digits)
        .map(usize::from)
        .unwrap_or(DEFAULT_CURRENCY_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_table_is_sorted() {
        assert!(CURRENCIES_EN.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_currency_symbol_in() {
        let en = &data::EN;
        assert_eq!(currency_symbol_in("USD", CurrencyFormat::Wide, en), "$");
        assert_eq!(currency_symbol_in("CAD", CurrencyFormat::Wide, en), "CA$");
        assert_eq!(currency_symbol_in("CAD", CurrencyFormat::Narrow, en), "$");
        assert_eq!(currency_symbol_in("EUR", CurrencyFormat::Narrow, en), "€");
        assert_eq!(currency_symbol_in("ZZZ", CurrencyFormat::Wide, en), "ZZZ");
    }

    #[test]
    fn test_locale_overrides_english_symbols() {
        let fr = &data::FR;
        assert_eq!(currency_symbol_in("CAD", CurrencyFormat::Wide, fr), "$CA");
        assert_eq!(currency_symbol_in("USD", CurrencyFormat::Wide, fr), "$US");
        assert_eq!(currency_symbol_in("USD", CurrencyFormat::Narrow, fr), "$");
    }

    #[test]
    fn test_get_number_of_currency_digits() {
        assert_eq!(get_number_of_currency_digits("USD"), 2);
        assert_eq!(get_number_of_currency_digits("JPY"), 0);
        assert_eq!(get_number_of_currency_digits("BHD"), 3);
        assert_eq!(get_number_of_currency_digits("CLF"), 4);
        assert_eq!(get_number_of_currency_digits("ZZZ"), 2);
    }
}
