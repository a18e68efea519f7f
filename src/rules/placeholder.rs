//! Placeholder mismatch detection rule.
//!
//! A translation must use the same `{{name}}` placeholders as the default
//! value; otherwise interpolation leaves a raw `{{name}}` on the page or drops
//! a value silently.

use crate::{
    i18n::{Catalog, CatalogNode, placeholders},
    issues::PlaceholderMismatchIssue,
    rules::helpers::{entry_context, sort_by_location},
};

pub fn check_placeholders(default: &Catalog, others: &[&Catalog]) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in others {
        for entry in catalog.entries() {
            let CatalogNode::Text(translated) = entry.node else {
                continue;
            };
            let Some(CatalogNode::Text(original)) = default.lookup(&entry.key) else {
                continue;
            };

            let expected = placeholders(original);
            let found = placeholders(translated);
            if expected == found {
                continue;
            }

            issues.push(PlaceholderMismatchIssue {
                context: entry_context(catalog, &entry),
                language: catalog.language().to_string(),
                missing: expected.difference(&found).cloned().collect(),
                unexpected: found.difference(&expected).cloned().collect(),
            });
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::helpers::test_support::catalog;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_matching_placeholders() {
        let en = catalog("en", json!({"greeting": "Hello {{name}}"}));
        let nl = catalog("nl", json!({"greeting": "Hallo {{ name }}"}));
        assert!(check_placeholders(&en, &[&nl]).is_empty());
    }

    #[test]
    fn test_renamed_placeholder() {
        let en = catalog("en", json!({"greeting": "Hello {{name}}"}));
        let nl = catalog("nl", json!({"greeting": "Hallo {{naam}}"}));

        let issues = check_placeholders(&en, &[&nl]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.key, "greeting");
        assert_eq!(issues[0].language, "nl");
        assert_eq!(issues[0].missing, vec!["name"]);
        assert_eq!(issues[0].unexpected, vec!["naam"]);
    }

    #[test]
    fn test_dropped_placeholder() {
        let en = catalog("en", json!({"footer": "© {{year}} {{company}}"}));
        let nl = catalog("nl", json!({"footer": "© {{year}}"}));

        let issues = check_placeholders(&en, &[&nl]);
        assert_eq!(issues[0].missing, vec!["company"]);
        assert!(issues[0].unexpected.is_empty());
    }

    #[test]
    fn test_keys_absent_from_default_ignored() {
        let en = catalog("en", json!({}));
        let nl = catalog("nl", json!({"extra": "{{x}}"}));
        assert!(check_placeholders(&en, &[&nl]).is_empty());
    }
}
