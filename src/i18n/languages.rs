//! Language config: per-language metadata and the default language.
//!
//! Every lookup by code falls back to the default language's entry when the
//! code is not configured, so callers always get a usable profile.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::error::{I18nError, Result};

/// Text direction of a language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a numeric date field (day or year) is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericStyle {
    #[default]
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// How the month of a date is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[default]
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOptions {
    #[serde(default)]
    pub year: NumericStyle,
    #[serde(default)]
    pub month: MonthStyle,
    #[serde(default)]
    pub day: NumericStyle,
}

/// Locale tag and options used to format dates for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormatProfile {
    pub locale: String,
    #[serde(default)]
    pub options: DateOptions,
}

/// Locale tag and currency used to format numbers for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormatProfile {
    pub locale: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Static metadata for one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    /// English name of the language.
    #[serde(default)]
    pub name: String,
    pub native_name: String,
    #[serde(default)]
    pub dir: Direction,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<DateFormatProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormatProfile>,
}

impl Language {
    /// Date profile, using the language code as locale tag when none is set.
    pub fn date_format_profile(&self) -> DateFormatProfile {
        self.date_format.clone().unwrap_or_else(|| DateFormatProfile {
            locale: self.code.clone(),
            options: DateOptions::default(),
        })
    }

    /// Number profile, using the language code as locale tag when none is set.
    pub fn number_format_profile(&self) -> NumberFormatProfile {
        self.number_format
            .clone()
            .unwrap_or_else(|| NumberFormatProfile {
                locale: self.code.clone(),
                currency: default_currency(),
            })
    }
}

/// On-disk shape of the language config document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_language: Option<String>,
    languages: Vec<Language>,
}

/// Validated language config with exactly one default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    languages: Vec<Language>,
    default_index: usize,
}

impl LanguageConfig {
    /// Validate a language list.
    ///
    /// The default language is `default_language` when given, otherwise the
    /// single language flagged `default`.
    pub fn new(mut languages: Vec<Language>, default_language: Option<&str>) -> Result<Self> {
        for (i, language) in languages.iter().enumerate() {
            if languages[..i].iter().any(|l| l.code == language.code) {
                return Err(I18nError::DuplicateLanguage(language.code.clone()));
            }
        }

        let flagged: Vec<usize> = languages
            .iter()
            .enumerate()
            .filter(|(_, l)| l.default)
            .map(|(i, _)| i)
            .collect();

        let default_index = match default_language {
            Some(code) => {
                let index = position(&languages, code)?;
                if let Some(&other) = flagged.iter().find(|&&i| i != index) {
                    return Err(I18nError::ConflictingDefault {
                        declared: code.to_string(),
                        flagged: languages[other].code.clone(),
                    });
                }
                index
            }
            None => match flagged.as_slice() {
                [index] => *index,
                _ => {
                    return Err(I18nError::NoDefaultLanguage {
                        found: flagged.len(),
                    });
                }
            },
        };

        for (i, language) in languages.iter_mut().enumerate() {
            language.default = i == default_index;
        }

        Ok(Self {
            languages,
            default_index,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: LanguageConfigFile =
            serde_json::from_str(content).map_err(I18nError::LanguageConfigParse)?;
        Self::new(file.languages, file.default_language.as_deref())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| I18nError::LanguageConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize back to the on-disk document shape.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let file = LanguageConfigFile {
            default_language: Some(self.default_language().code.clone()),
            languages: self.languages.clone(),
        };
        serde_json::to_string_pretty(&file)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Language used for unprefixed URLs, and consulted when a key or
    /// profile is missing.
    pub fn default_language(&self) -> &Language {
        &self.languages[self.default_index]
    }

    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.language(code).is_some()
    }

    /// The configured language for `code`, or the default language.
    pub fn language_or_default(&self, code: &str) -> &Language {
        self.language(code)
            .unwrap_or_else(|| self.default_language())
    }

    /// `code` when configured, otherwise the default language code.
    pub fn resolve_language<'a>(&'a self, code: &str) -> &'a str {
        &self.language_or_default(code).code
    }

    pub fn native_name(&self, code: &str) -> &str {
        &self.language_or_default(code).native_name
    }

    pub fn direction(&self, code: &str) -> Direction {
        self.language_or_default(code).dir
    }

    pub fn date_format_profile(&self, code: &str) -> DateFormatProfile {
        self.language_or_default(code).date_format_profile()
    }

    pub fn number_format_profile(&self, code: &str) -> NumberFormatProfile {
        self.language_or_default(code).number_format_profile()
    }
}

impl Default for LanguageConfig {
    /// English (default) and Dutch.
    fn default() -> Self {
        let date = |locale: &str| DateFormatProfile {
            locale: locale.to_string(),
            options: DateOptions::default(),
        };
        let number = |locale: &str, currency: &str| NumberFormatProfile {
            locale: locale.to_string(),
            currency: currency.to_string(),
        };
        Self {
            languages: vec![
                Language {
                    code: "en".to_string(),
                    name: "English".to_string(),
                    native_name: "English".to_string(),
                    dir: Direction::Ltr,
                    default: true,
                    date_format: Some(date("en-US")),
                    number_format: Some(number("en-US", "USD")),
                },
                Language {
                    code: "nl".to_string(),
                    name: "Dutch".to_string(),
                    native_name: "Nederlands".to_string(),
                    dir: Direction::Ltr,
                    default: false,
                    date_format: Some(date("nl-NL")),
                    number_format: Some(number("nl-NL", "EUR")),
                },
            ],
            default_index: 0,
        }
    }
}

fn position(languages: &[Language], code: &str) -> Result<usize> {
    languages
        .iter()
        .position(|l| l.code == code)
        .ok_or_else(|| I18nError::UnknownLanguage(code.to_string()))
}
