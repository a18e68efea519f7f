//! Locale catalogs: one nested key/value document per language.
//!
//! A catalog file is a JSON object whose leaves are translated strings:
//!
//! ```json
//! { "nav": { "about": "About", "contact": "Contact" } }
//! ```
//!
//! The key `nav.about` addresses `"About"`. Lookups walk the dotted path
//! through [`CatalogNode::Branch`] nodes only; arrays and scalars are leaves.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde_json::Value;

use super::error::{I18nError, Result};

/// A node in a catalog tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNode {
    /// A translated string.
    Text(String),
    /// A nested mapping of key segments to nodes, in source order.
    Branch(IndexMap<String, CatalogNode>),
    /// Any other JSON value (arrays, numbers, booleans, null), kept verbatim.
    Raw(Value),
}

impl CatalogNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CatalogNode::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert back to a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            CatalogNode::Text(s) => Value::String(s.clone()),
            CatalogNode::Branch(children) => Value::Object(
                children
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            CatalogNode::Raw(value) => value.clone(),
        }
    }

    /// Render the node as display text.
    ///
    /// Text is returned unchanged; structured nodes become compact JSON.
    pub fn render(&self) -> String {
        match self {
            CatalogNode::Text(s) => s.clone(),
            other => other.to_json().to_string(),
        }
    }

    /// Short name of the node kind, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogNode::Text(_) => "string",
            CatalogNode::Branch(_) => "object",
            CatalogNode::Raw(Value::Array(_)) => "array",
            CatalogNode::Raw(_) => "scalar",
        }
    }
}

impl From<Value> for CatalogNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => CatalogNode::Text(s),
            Value::Object(map) => CatalogNode::Branch(
                map.into_iter()
                    .map(|(k, v)| (k, CatalogNode::from(v)))
                    .collect(),
            ),
            other => CatalogNode::Raw(other),
        }
    }
}

/// A leaf of a catalog, addressed by its full dotted key.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry<'a> {
    pub key: String,
    pub node: &'a CatalogNode,
    /// 1-based line of the key in the source file (1 when unknown).
    pub line: usize,
}

/// All translated strings for one language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: String,
    root: IndexMap<String, CatalogNode>,
    path: Option<PathBuf>,
    key_lines: HashMap<String, usize>,
}

impl Catalog {
    /// A catalog with no entries. Used when a catalog is unavailable.
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    /// Build a catalog from an already parsed JSON value.
    pub fn from_value(language: impl Into<String>, value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(I18nError::CatalogShape {
                path: PathBuf::new(),
            });
        };
        Ok(Self {
            language: language.into(),
            root: map
                .into_iter()
                .map(|(k, v)| (k, CatalogNode::from(v)))
                .collect(),
            path: None,
            key_lines: HashMap::new(),
        })
    }

    /// Parse catalog JSON text, recording the line of every leaf key.
    pub fn from_json_str(language: impl Into<String>, content: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| I18nError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut catalog = Self::from_value(language, value).map_err(|_| I18nError::CatalogShape {
            path: path.to_path_buf(),
        })?;

        let line_index = build_line_index(content);
        let keys: Vec<String> = catalog.entries().into_iter().map(|e| e.key).collect();
        catalog.key_lines = keys
            .into_iter()
            .map(|key| {
                let line = find_key_line(content, &key, &line_index);
                (key, line)
            })
            .collect();
        catalog.path = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path, language: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| I18nError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(language, &content, path)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolve a dotted key to a node.
    ///
    /// Returns `None` when a segment is absent or when the path tries to
    /// descend into a node that is not a [`CatalogNode::Branch`].
    pub fn lookup(&self, key: &str) -> Option<&CatalogNode> {
        let segments: Vec<&str> = key.split('.').collect();
        walk(&self.root, &segments)
    }

    /// All leaves (text and raw values), in source order.
    pub fn entries(&self) -> Vec<CatalogEntry<'_>> {
        let mut entries = Vec::new();
        collect_entries(&self.root, "", &mut entries);
        for entry in &mut entries {
            entry.line = self.key_lines.get(&entry.key).copied().unwrap_or(1);
        }
        entries
    }
}

fn walk<'a>(map: &'a IndexMap<String, CatalogNode>, segments: &[&str]) -> Option<&'a CatalogNode> {
    let (first, rest) = segments.split_first()?;
    let node = map.get(*first)?;
    if rest.is_empty() {
        return Some(node);
    }
    match node {
        CatalogNode::Branch(children) => walk(children, rest),
        _ => None,
    }
}

fn collect_entries<'a>(
    map: &'a IndexMap<String, CatalogNode>,
    prefix: &str,
    out: &mut Vec<CatalogEntry<'a>>,
) {
    for (segment, node) in map {
        let key = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };
        match node {
            CatalogNode::Branch(children) => collect_entries(children, &key, out),
            leaf => out.push(CatalogEntry {
                key,
                node: leaf,
                line: 1,
            }),
        }
    }
}

/// Byte offsets at which each line starts; line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number containing `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Locate the line of a dotted key by finding each segment, as a JSON key
/// (quoted and followed by `:`), after the previous one.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let after_pattern = pos + rel_pos + pattern.len();
            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = pos + rel_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}
