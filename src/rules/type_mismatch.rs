//! Type mismatch detection rule.
//!
//! Detects keys whose value is text in one catalog and structured (object,
//! array or scalar) in the default catalog, or the other way round.

use crate::{
    i18n::Catalog,
    issues::TypeMismatchIssue,
    rules::helpers::{entry_context, sort_by_location},
};

pub fn check_type_mismatches(default: &Catalog, others: &[&Catalog]) -> Vec<TypeMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in others {
        for entry in catalog.entries() {
            let Some(expected) = default.lookup(&entry.key) else {
                continue;
            };
            if expected.kind() != entry.node.kind() {
                issues.push(TypeMismatchIssue {
                    context: entry_context(catalog, &entry),
                    language: catalog.language().to_string(),
                    expected: expected.kind().to_string(),
                    found: entry.node.kind().to_string(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
