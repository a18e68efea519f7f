//! Shared helpers for the catalog rules.

use crate::{
    i18n::{Catalog, CatalogEntry},
    issues::{MessageContext, MessageLocation},
};

/// Display path of a catalog's file (`<code>.json` for in-memory catalogs).
pub fn catalog_file(catalog: &Catalog) -> String {
    catalog
        .path()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("{}.json", catalog.language()))
}

/// Issue context for a catalog entry.
pub fn entry_context(catalog: &Catalog, entry: &CatalogEntry<'_>) -> MessageContext {
    MessageContext::new(
        MessageLocation::new(catalog_file(catalog), entry.line),
        entry.key.clone(),
        entry.node.render(),
    )
}

/// Sort issues by file path, then line, then key for deterministic output.
pub fn sort_by_location<T>(issues: &mut [T], context: impl Fn(&T) -> &MessageContext) {
    issues.sort_by(|a, b| {
        let (a, b) = (context(a), context(b));
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.key.cmp(&b.key))
    });
}
