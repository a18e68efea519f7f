//! Translation resolution with fallback and interpolation.
//!
//! Resolution never fails: a key that is absent from both the requested and
//! the default language's catalog resolves to the visible sentinel `[Missing: <key>]`,
//! so page rendering can continue and QA tooling can grep for it.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{
    catalog::CatalogNode,
    interpolate::{Interpolations, interpolate},
    languages::LanguageConfig,
    registry::CatalogRegistry,
};

/// Prefix of the missing-translation sentinel.
pub const MISSING_PREFIX: &str = "[Missing: ";

/// The sentinel returned for a key that resolves nowhere.
///
/// ```
/// assert_eq!(tolk::i18n::missing_sentinel("nav.contact"), "[Missing: nav.contact]");
/// ```
pub fn missing_sentinel(key: &str) -> String {
    format!("{}{}]", MISSING_PREFIX, key)
}

/// Outcome of looking up a key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Found in the requested language's catalog.
    Found(&'a CatalogNode),
    /// Found only in the default language's catalog.
    Fallback {
        node: &'a CatalogNode,
        language: &'a str,
    },
    /// Found nowhere.
    Missing,
}

impl<'a> Resolution<'a> {
    pub fn node(&self) -> Option<&'a CatalogNode> {
        match *self {
            Resolution::Found(node) | Resolution::Fallback { node, .. } => Some(node),
            Resolution::Missing => None,
        }
    }
}

/// Resolves translation keys against a catalog registry.
#[derive(Debug, Clone)]
pub struct Translator {
    registry: Arc<CatalogRegistry>,
    languages: Arc<LanguageConfig>,
}

impl Translator {
    pub fn new(registry: impl Into<Arc<CatalogRegistry>>, languages: impl Into<Arc<LanguageConfig>>) -> Self {
        Self {
            registry: registry.into(),
            languages: languages.into(),
        }
    }

    pub fn registry(&self) -> &CatalogRegistry {
        &self.registry
    }

    pub fn languages(&self) -> &LanguageConfig {
        &self.languages
    }

    /// Look up `key` for `language`, falling back to the default language.
    ///
    /// The default language never falls back.
    pub fn lookup<'a>(&'a self, language: &str, key: &str) -> Resolution<'a> {
        if !self.languages.is_supported(language) {
            debug!(language = %language, "language not configured");
        }
        if let Some(node) = self.registry.get(language).and_then(|c| c.lookup(key)) {
            return Resolution::Found(node);
        }

        let fallback = self.languages.default_language().code.as_str();
        if language != fallback
            && let Some(node) = self.registry.get(fallback).and_then(|c| c.lookup(key))
        {
            warn!(
                language = %language,
                fallback = %fallback,
                key = %key,
                "translation missing, using fallback language"
            );
            return Resolution::Fallback {
                node,
                language: fallback,
            };
        }

        debug!(language = %language, key = %key, "translation missing");
        Resolution::Missing
    }

    /// Resolve `key` for `language` to display text.
    ///
    /// Text values have `{{name}}` placeholders substituted from
    /// `interpolations`. Structured values are returned as compact JSON
    /// without interpolation.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tolk::i18n::{Catalog, CatalogRegistry, LanguageConfig, Translator};
    ///
    /// let en = Catalog::from_value("en", json!({"nav": {"about": "About"}})).unwrap();
    /// let nl = Catalog::from_value("nl", json!({})).unwrap();
    /// let translator = Translator::new(
    ///     CatalogRegistry::from_catalogs([en, nl]),
    ///     LanguageConfig::default(),
    /// );
    ///
    /// assert_eq!(translator.t("nl", "nav.about", None), "About");
    /// assert_eq!(translator.t("nl", "nav.contact", None), "[Missing: nav.contact]");
    /// ```
    pub fn t(&self, language: &str, key: &str, interpolations: Option<&Interpolations>) -> String {
        match self.lookup(language, key).node() {
            Some(CatalogNode::Text(template)) => match interpolations {
                Some(values) => interpolate(template, values),
                None => template.clone(),
            },
            Some(structured) => structured.render(),
            None => missing_sentinel(key),
        }
    }

    /// [`Translator::t`] with interpolations given as name/value pairs.
    pub fn t_fmt(&self, language: &str, key: &str, values: &[(&str, &str)]) -> String {
        let values: Interpolations = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.t(language, key, Some(&values))
    }
}
