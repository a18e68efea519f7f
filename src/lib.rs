//! Tolk - translation resolution and locale-aware rendering for static sites
//!
//! Tolk is a library and CLI that resolves dotted translation keys against
//! per-language JSON catalogs with fallback to a default language, fills
//! `{{name}}` placeholders, formats numbers, currency amounts and dates per
//! language, and checks catalogs for drift against the default language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: `.tolkrc.json` loading and parsing
//! - `format`: Number, currency and date formatting
//! - `i18n`: Catalogs, registry, resolver, language config and URLs
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Catalog checks
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod format;
pub mod i18n;
pub mod issues;
pub mod rules;
pub mod utils;
