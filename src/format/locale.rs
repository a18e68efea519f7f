//! Per-locale formatting rules.
//!
//! Each supported locale tag carries its separators, currency placement and
//! date layouts. Unknown tags fall back to the first locale sharing their
//! primary language subtag, then to `en-US`.

use unic_langid::LanguageIdentifier;

/// Non-breaking space.
pub(crate) const NBSP: char = '\u{a0}';
/// Narrow non-breaking space.
const NNBSP: char = '\u{202f}';

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPosition {
    /// `$1,234.50`, `-$1,234.50`
    Before,
    /// `€ 1.234,50`, `€ -1.234,50`
    BeforeSpaced,
    /// `1.234,50 €`, `-1.234,50 €`
    After,
}

/// Formatting rules for one locale tag.
///
/// Date patterns use `{day}`, `{month}` and `{year}`.
#[derive(Debug)]
pub struct LocaleRules {
    pub tag: &'static str,
    pub decimal: char,
    pub group: char,
    /// Digits required in the leading group before grouping applies.
    pub min_grouping_digits: usize,
    pub currency_position: CurrencyPosition,
    pub long_date: &'static str,
    pub short_date: &'static str,
    pub numeric_date: &'static str,
    /// Zero-pad day and month in numeric dates.
    pub numeric_date_padded: bool,
    pub months_long: [&'static str; 12],
    pub months_short: [&'static str; 12],
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const NL_MONTHS: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
    "oktober", "november", "december",
];

const NL_MONTHS_SHORT: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

static RULES: &[LocaleRules] = &[
    LocaleRules {
        tag: "en-US",
        decimal: '.',
        group: ',',
        min_grouping_digits: 1,
        currency_position: CurrencyPosition::Before,
        long_date: "{month} {day}, {year}",
        short_date: "{month} {day}, {year}",
        numeric_date: "{month}/{day}/{year}",
        numeric_date_padded: false,
        months_long: EN_MONTHS,
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
    },
    LocaleRules {
        tag: "en-GB",
        decimal: '.',
        group: ',',
        min_grouping_digits: 1,
        currency_position: CurrencyPosition::Before,
        long_date: "{day} {month} {year}",
        short_date: "{day} {month} {year}",
        numeric_date: "{day}/{month}/{year}",
        numeric_date_padded: true,
        months_long: EN_MONTHS,
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
        ],
    },
    LocaleRules {
        tag: "nl-NL",
        decimal: ',',
        group: '.',
        min_grouping_digits: 1,
        currency_position: CurrencyPosition::BeforeSpaced,
        long_date: "{day} {month} {year}",
        short_date: "{day} {month} {year}",
        numeric_date: "{day}-{month}-{year}",
        numeric_date_padded: false,
        months_long: NL_MONTHS,
        months_short: NL_MONTHS_SHORT,
    },
    LocaleRules {
        tag: "nl-BE",
        decimal: ',',
        group: '.',
        min_grouping_digits: 1,
        currency_position: CurrencyPosition::BeforeSpaced,
        long_date: "{day} {month} {year}",
        short_date: "{day} {month} {year}",
        numeric_date: "{day}/{month}/{year}",
        numeric_date_padded: false,
        months_long: NL_MONTHS,
        months_short: NL_MONTHS_SHORT,
    },
    LocaleRules {
        tag: "de-DE",
        decimal: ',',
        group: '.',
        min_grouping_digits: 1,
        currency_position: CurrencyPosition::After,
        long_date: "{day}. {month} {year}",
        short_date: "{day}. {month} {year}",
        numeric_date: "{day}.{month}.{year}",
        numeric_date_padded: false,
        months_long: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        months_short: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
            "Nov.", "Dez.",
        ],
    },
    LocaleRules {
        tag: "fr-FR",
        decimal: ',',
        group: NNBSP,
        min_grouping_digits: 1,
        currency_position: CurrencyPosition::After,
        long_date: "{day} {month} {year}",
        short_date: "{day} {month} {year}",
        numeric_date: "{day}/{month}/{year}",
        numeric_date_padded: true,
        months_long: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        months_short: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
    },
    LocaleRules {
        tag: "es-ES",
        decimal: ',',
        group: '.',
        min_grouping_digits: 2,
        currency_position: CurrencyPosition::After,
        long_date: "{day} de {month} de {year}",
        short_date: "{day} {month} {year}",
        numeric_date: "{day}/{month}/{year}",
        numeric_date_padded: false,
        months_long: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        months_short: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
    },
];

impl LocaleRules {
    /// Rules for a BCP 47 tag such as `nl-NL`, `nl` or `en_GB`.
    pub fn for_tag(tag: &str) -> &'static LocaleRules {
        let Ok(requested) = tag.parse::<LanguageIdentifier>() else {
            return &RULES[0];
        };
        let known = || {
            RULES.iter().filter_map(|rules| {
                rules
                    .tag
                    .parse::<LanguageIdentifier>()
                    .ok()
                    .map(|id| (rules, id))
            })
        };

        known()
            .find(|(_, id)| *id == requested)
            .or_else(|| known().find(|(_, id)| id.language == requested.language))
            .map(|(rules, _)| rules)
            .unwrap_or(&RULES[0])
    }
}
