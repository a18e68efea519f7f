//! `{{name}}` placeholder substitution.

use std::{
    collections::{BTreeSet, HashMap},
    sync::LazyLock,
};

use regex::{Captures, Regex};

/// Placeholder name to replacement value.
pub type Interpolations = HashMap<String, String>;

/// `{{name}}`: any name without braces, surrounding whitespace excluded.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").unwrap());

/// Replace every `{{name}}` in `template` with its entry in `values`.
///
/// Placeholders without an entry are left verbatim. Replacement text is not
/// scanned again, so a value containing `{{other}}` stays as written.
///
/// # Examples
///
/// ```
/// use tolk::i18n::{Interpolations, interpolate};
///
/// let mut values = Interpolations::new();
/// values.insert("name".to_string(), "Ada".to_string());
///
/// assert_eq!(interpolate("Hello {{name}}", &values), "Hello Ada");
/// assert_eq!(interpolate("Hello {{user}}", &values), "Hello {{user}}");
/// ```
pub fn interpolate(template: &str, values: &Interpolations) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let name = caps[1].trim();
            match values.get(name) {
                Some(value) if !name.is_empty() => value.clone(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Names of all placeholders used in `template`.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
