//! Number and currency formatting.

use super::locale::{CurrencyPosition, LocaleRules, NBSP};

/// Fraction digits shown for plain numbers.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with the locale's separators.
///
/// Up to three fraction digits are kept and trailing zeros dropped.
pub fn format_decimal(value: f64, rules: &LocaleRules) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    let (negative, integer, fraction) = split_rounded(value, MAX_FRACTION_DIGITS);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&integer, rules));
    if !fraction.is_empty() {
        out.push(rules.decimal);
        out.push_str(fraction);
    }
    out
}

/// Format a currency amount with the locale's symbol placement.
pub fn format_currency_amount(amount: f64, currency: &str, rules: &LocaleRules) -> String {
    if let Some(text) = non_finite(amount) {
        return text;
    }
    let (negative, integer, fraction) = split_rounded(amount, minor_digits(currency));

    let mut number = group_digits(&integer, rules);
    if !fraction.is_empty() {
        number.push(rules.decimal);
        number.push_str(&fraction);
    }

    let sign = if negative { "-" } else { "" };
    let symbol = currency_symbol(currency, rules.tag);
    let is_code = symbol.chars().all(|c| c.is_ascii_uppercase());

    match rules.currency_position {
        CurrencyPosition::Before if is_code => format!("{sign}{symbol}{NBSP}{number}"),
        CurrencyPosition::Before => format!("{sign}{symbol}{number}"),
        CurrencyPosition::BeforeSpaced => format!("{symbol}{NBSP}{sign}{number}"),
        CurrencyPosition::After => format!("{sign}{number}{NBSP}{symbol}"),
    }
}

/// Display symbol for an ISO 4217 code; unknown codes display as the code.
pub fn currency_symbol(currency: &str, locale_tag: &str) -> String {
    let code = currency.to_ascii_uppercase();
    let symbol = match code.as_str() {
        "USD" if locale_tag == "en-US" => "$",
        "USD" => "US$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        _ => return code,
    };
    symbol.to_string()
}

/// Digits after the decimal point for a currency.
fn minor_digits(currency: &str) -> usize {
    match currency.to_ascii_uppercase().as_str() {
        "JPY" | "KRW" | "ISK" | "CLP" | "VND" => 0,
        _ => 2,
    }
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

/// Round to `digits` fraction digits and split into sign, integer digits and
/// fraction digits. A value that rounds to zero is never negative.
fn split_rounded(value: f64, digits: usize) -> (bool, String, String) {
    let rendered = format!("{:.*}", digits, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (rendered, String::new()),
    };
    let is_zero = integer.chars().chain(fraction.chars()).all(|c| c == '0');
    (value < 0.0 && !is_zero, integer, fraction)
}

fn group_digits(integer: &str, rules: &LocaleRules) -> String {
    if integer.len() < 3 + rules.min_grouping_digits {
        return integer.to_string();
    }
    let mut out = String::with_capacity(integer.len() + integer.len() / 3);
    let first = integer.len() % 3;
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (i + 3 - first) % 3 == 0 {
            out.push(rules.group);
        }
        out.push(c);
    }
    out
}
