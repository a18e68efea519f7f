//! Translation catalogs, resolution and language metadata.
//!
//! - `catalog`: nested key/value documents, one per language
//! - `registry`: the immutable set of loaded catalogs
//! - `resolver`: key lookup with fallback and the missing sentinel
//! - `interpolate`: `{{name}}` placeholder substitution
//! - `languages`: language config and per-language profiles
//! - `urls`: language-prefixed site URLs

mod catalog;
mod error;
mod interpolate;
mod languages;
mod registry;
mod resolver;
mod urls;

pub use catalog::{Catalog, CatalogEntry, CatalogNode};
pub use error::{I18nError, Result};
pub use interpolate::{Interpolations, interpolate, placeholders};
pub use languages::{
    DateFormatProfile, DateOptions, Direction, Language, LanguageConfig, MonthStyle,
    NumberFormatProfile, NumericStyle,
};
pub use registry::{CatalogLoadFailure, CatalogRegistry, catalog_path};
pub use resolver::{MISSING_PREFIX, Resolution, Translator, missing_sentinel};
pub use urls::{alternate_url, current_language, localize_url};
