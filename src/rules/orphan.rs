//! Orphan key detection rule.
//!
//! Detects keys in non-default catalogs that the default catalog does not
//! have. They are never reached through fallback and usually point at a
//! renamed or deleted key.

use crate::{
    i18n::Catalog,
    issues::OrphanKeyIssue,
    rules::helpers::{entry_context, sort_by_location},
};

pub fn check_orphan_keys(default: &Catalog, others: &[&Catalog]) -> Vec<OrphanKeyIssue> {
    let mut issues: Vec<OrphanKeyIssue> = others
        .iter()
        .flat_map(|catalog| {
            catalog
                .entries()
                .into_iter()
                .filter(|entry| default.lookup(&entry.key).is_none())
                .map(|entry| OrphanKeyIssue {
                    context: entry_context(catalog, &entry),
                    language: catalog.language().to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
