//! Missing translation detection rule.
//!
//! Detects keys that exist in the default catalog but are missing from one or
//! more other catalogs. Such keys still render, through fallback, but in the
//! wrong language.

use crate::{
    i18n::Catalog,
    issues::MissingTranslationIssue,
    rules::helpers::{entry_context, sort_by_location},
};

/// Find every default-catalog key that other catalogs do not resolve.
///
/// # Arguments
/// * `default` - The default (fallback) language's catalog
/// * `others` - Catalogs of all other languages
pub fn check_missing_translations(
    default: &Catalog,
    others: &[&Catalog],
) -> Vec<MissingTranslationIssue> {
    let mut issues: Vec<MissingTranslationIssue> = default
        .entries()
        .iter()
        .filter_map(|entry| {
            let mut missing_in: Vec<String> = others
                .iter()
                .filter(|c| c.lookup(&entry.key).is_none())
                .map(|c| c.language().to_string())
                .collect();
            missing_in.sort();

            (!missing_in.is_empty()).then(|| MissingTranslationIssue {
                context: entry_context(default, entry),
                default_language: default.language().to_string(),
                missing_in,
            })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
