//! Locale-aware number, currency and date formatting.
//!
//! The functions here resolve a language's profile through the
//! [`LanguageConfig`] (falling back to the default language) and format with
//! the rules of the profile's locale tag. They are pure: the same input and
//! profile always give the same string.

mod date;
mod locale;
mod number;

use chrono::{DateTime, Utc};

pub use date::{DateStyle, format_date_with, parse_date};
pub use locale::{CurrencyPosition, LocaleRules};
pub use number::{currency_symbol, format_currency_amount, format_decimal};

use crate::i18n::LanguageConfig;

/// Format a number for `language`, e.g. `1234.5` -> `1.234,5` for Dutch.
pub fn format_number(config: &LanguageConfig, value: f64, language: &str) -> String {
    let profile = config.number_format_profile(language);
    format_decimal(value, LocaleRules::for_tag(&profile.locale))
}

/// Format an amount in the currency of `language`'s number profile.
pub fn format_currency(config: &LanguageConfig, amount: f64, language: &str) -> String {
    let profile = config.number_format_profile(language);
    format_currency_amount(amount, &profile.currency, LocaleRules::for_tag(&profile.locale))
}

/// Format a date for `language`.
///
/// Without an explicit style the profile's month option decides.
pub fn format_date(
    config: &LanguageConfig,
    date: &DateTime<Utc>,
    language: &str,
    style: Option<DateStyle>,
) -> String {
    let profile = config.date_format_profile(language);
    let style = style.unwrap_or_else(|| DateStyle::from_options(&profile.options));
    format_date_with(
        date,
        LocaleRules::for_tag(&profile.locale),
        &profile.options,
        style,
    )
}
