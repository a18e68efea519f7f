//! Untranslated value detection rule.
//!
//! Detects values identical to the default language's value, which may mean
//! the text was copied but never translated. Points at the default catalog
//! and lists the languages with the identical value.

use glob::Pattern;

use crate::{
    i18n::{Catalog, CatalogNode},
    issues::UntranslatedIssue,
    rules::helpers::{entry_context, sort_by_location},
    utils::has_translatable_text,
};

/// # Arguments
/// * `default` - The default (fallback) language's catalog
/// * `others` - Catalogs of all other languages
/// * `ignored` - Key patterns allowed to stay identical (brand names etc.)
pub fn check_untranslated(
    default: &Catalog,
    others: &[&Catalog],
    ignored: &[Pattern],
) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for entry in default.entries() {
        let CatalogNode::Text(value) = entry.node else {
            continue;
        };
        if !has_translatable_text(value) || ignored.iter().any(|p| p.matches(&entry.key)) {
            continue;
        }

        let mut identical_in: Vec<String> = others
            .iter()
            .filter(|c| c.lookup(&entry.key).and_then(CatalogNode::as_text) == Some(value.as_str()))
            .map(|c| c.language().to_string())
            .collect();
        identical_in.sort();

        if !identical_in.is_empty() {
            issues.push(UntranslatedIssue {
                context: entry_context(default, &entry),
                default_language: default.language().to_string(),
                identical_in,
            });
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
