use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading catalogs or the language config.
///
/// Translation lookups never return these: a catalog that fails to load is
/// treated as empty and the failure is kept on the registry for reporting.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read catalog {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path:?}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog {path:?} must contain a JSON object at the top level")]
    CatalogShape { path: PathBuf },

    #[error("failed to read language config {path:?}: {source}")]
    LanguageConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse language config: {0}")]
    LanguageConfigParse(#[source] serde_json::Error),

    #[error("language config must mark exactly one default language (found {found})")]
    NoDefaultLanguage { found: usize },

    #[error("defaultLanguage is '{declared}' but '{flagged}' is marked as default")]
    ConflictingDefault { declared: String, flagged: String },

    #[error("language '{0}' is not listed in the language config")]
    UnknownLanguage(String),

    #[error("language '{0}' is listed more than once")]
    DuplicateLanguage(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
