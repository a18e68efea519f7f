//! Date parsing and formatting.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use clap::ValueEnum;

use super::locale::LocaleRules;
use crate::i18n::{DateOptions, I18nError, MonthStyle, NumericStyle};

/// How a date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DateStyle {
    /// Full month name: `January 5, 2025`.
    Long,
    /// Abbreviated month name: `Jan 5, 2025`.
    Short,
    /// All numeric: `1/5/2025`.
    Numeric,
    /// RFC 3339 in UTC with milliseconds: `2025-01-05T00:00:00.000Z`.
    Iso,
}

impl DateStyle {
    /// The style implied by a profile's month option.
    pub fn from_options(options: &DateOptions) -> Self {
        match options.month {
            MonthStyle::Long => DateStyle::Long,
            MonthStyle::Short => DateStyle::Short,
            MonthStyle::Numeric | MonthStyle::TwoDigit => DateStyle::Numeric,
        }
    }
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, I18nError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        && let Some(datetime) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(datetime.and_utc());
    }
    DateTime::parse_from_rfc3339(input)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| I18nError::InvalidDate(input.to_string()))
}

/// Format a date with the locale's layout. Dates are read in UTC.
pub fn format_date_with(
    date: &DateTime<Utc>,
    rules: &LocaleRules,
    options: &DateOptions,
    style: DateStyle,
) -> String {
    let month_index = date.month0() as usize;
    let (pattern, month) = match style {
        DateStyle::Iso => return date.to_rfc3339_opts(SecondsFormat::Millis, true),
        DateStyle::Long => (rules.long_date, rules.months_long[month_index].to_string()),
        DateStyle::Short => (rules.short_date, rules.months_short[month_index].to_string()),
        DateStyle::Numeric => {
            let padded = rules.numeric_date_padded || options.month == MonthStyle::TwoDigit;
            (rules.numeric_date, pad(date.month(), padded))
        }
    };

    let day_padded = options.day == NumericStyle::TwoDigit
        || (style == DateStyle::Numeric && rules.numeric_date_padded);
    let day = pad(date.day(), day_padded);
    let year = match options.year {
        NumericStyle::Numeric => date.year().to_string(),
        NumericStyle::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
    };

    pattern
        .replace("{day}", &day)
        .replace("{month}", &month)
        .replace("{year}", &year)
}

fn pad(value: u32, padded: bool) -> String {
    if padded {
        format!("{:02}", value)
    } else {
        value.to_string()
    }
}
