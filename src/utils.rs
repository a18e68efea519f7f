//! Small text helpers shared by the catalog checks.

/// True if the text has at least one alphabetic character outside of
/// `{{placeholder}}` markers.
///
/// Values such as `"{{count}}"`, `"2025"` or `"+31 20"` read the same in every
/// language, so they are never flagged as untranslated.
///
/// # Examples
///
/// ```
/// use tolk::utils::has_translatable_text;
///
/// assert!(has_translatable_text("About us"));
/// assert!(has_translatable_text("Over {{company}}"));
/// assert!(!has_translatable_text("{{company}}"));
/// assert!(!has_translatable_text("© 2025"));
/// ```
pub fn has_translatable_text(text: &str) -> bool {
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        if rest[..start].chars().any(char::is_alphabetic) {
            return true;
        }
        match rest[start..].find("}}") {
            Some(end) => rest = &rest[start + end + 2..],
            None => return rest[start..].chars().any(char::is_alphabetic),
        }
    }
    rest.chars().any(char::is_alphabetic)
}
