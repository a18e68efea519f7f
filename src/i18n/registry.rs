//! Catalog registry: the set of catalogs a translator reads from.
//!
//! A registry is built once, from files or from in-memory catalogs, and is
//! never modified afterwards. Catalogs that fail to load are recorded as
//! failures and behave as empty catalogs during lookup.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::catalog::Catalog;

/// A catalog that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoadFailure {
    pub language: String,
    pub path: PathBuf,
    pub error: String,
}

/// Immutable map from language code to catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    catalogs: HashMap<String, Catalog>,
    failures: Vec<CatalogLoadFailure>,
}

impl CatalogRegistry {
    /// Build a registry from catalogs already in memory.
    ///
    /// A later catalog for the same language replaces an earlier one.
    pub fn from_catalogs(catalogs: impl IntoIterator<Item = Catalog>) -> Self {
        Self {
            catalogs: catalogs
                .into_iter()
                .map(|c| (c.language().to_string(), c))
                .collect(),
            failures: Vec::new(),
        }
    }

    /// Load `<root>/<code>.json` for every language code.
    ///
    /// Files are read in parallel. Failures are logged and recorded; the
    /// affected languages resolve as if their catalog were empty.
    pub fn load_dir<S: AsRef<str> + Sync>(root: &Path, codes: &[S]) -> Self {
        let results: Vec<(String, PathBuf, super::Result<Catalog>)> = codes
            .par_iter()
            .map(|code| {
                let code = code.as_ref();
                let path = catalog_path(root, code);
                let result = Catalog::load(&path, code);
                (code.to_string(), path, result)
            })
            .collect();

        let mut registry = Self::default();
        for (language, path, result) in results {
            match result {
                Ok(catalog) => {
                    debug!(language = %language, path = %path.display(), "loaded catalog");
                    registry.catalogs.insert(language, catalog);
                }
                Err(err) => {
                    warn!(language = %language, error = %err, "catalog unavailable, treating as empty");
                    registry.failures.push(CatalogLoadFailure {
                        language,
                        path,
                        error: err.to_string(),
                    });
                }
            }
        }
        registry
    }

    pub fn get(&self, language: &str) -> Option<&Catalog> {
        self.catalogs.get(language)
    }

    /// Loaded catalogs sorted by language code.
    pub fn catalogs(&self) -> Vec<&Catalog> {
        let mut catalogs: Vec<&Catalog> = self.catalogs.values().collect();
        catalogs.sort_by(|a, b| a.language().cmp(b.language()));
        catalogs
    }

    pub fn failures(&self) -> &[CatalogLoadFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

/// Path of the catalog file for a language: `<root>/<code>.json`.
pub fn catalog_path(root: &Path, code: &str) -> PathBuf {
    root.join(format!("{}.json", code))
}
