//! Language-prefixed site URLs.
//!
//! Pages in the default language live at the site root (`/about/`); every
//! other language lives under its code (`/nl/about/`).

use super::languages::LanguageConfig;

/// Prefix `url` with `language` unless it is the default language.
///
/// Leading slashes are collapsed so `/about/` and `about/` both become
/// `/nl/about/`.
pub fn localize_url(config: &LanguageConfig, url: &str, language: &str) -> String {
    if language == config.default_language().code {
        return url.to_string();
    }
    format!("/{}/{}", language, url.trim_start_matches('/'))
}

/// The URL of the same page in `target_language`.
///
/// Any non-default language prefix is removed from `current_url` before the
/// target prefix is applied.
pub fn alternate_url(config: &LanguageConfig, current_url: &str, target_language: &str) -> String {
    localize_url(config, strip_language_prefix(config, current_url), target_language)
}

/// The language a URL belongs to, judged by its prefix.
pub fn current_language<'a>(config: &'a LanguageConfig, url: &str) -> &'a str {
    config
        .languages()
        .iter()
        .filter(|l| !is_default(config, &l.code))
        .find(|l| url.starts_with(&format!("/{}/", l.code)))
        .map(|l| l.code.as_str())
        .unwrap_or(config.default_language().code.as_str())
}

fn strip_language_prefix<'u>(config: &LanguageConfig, url: &'u str) -> &'u str {
    for language in config.languages() {
        if is_default(config, &language.code) {
            continue;
        }
        let prefix = format!("/{}/", language.code);
        if url.starts_with(&prefix) {
            // Keep the slash that ends the prefix.
            return &url[prefix.len() - 1..];
        }
    }
    url
}

fn is_default(config: &LanguageConfig, code: &str) -> bool {
    config.default_language().code == code
}
