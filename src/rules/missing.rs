//! Missing translation detection rule.
//!
//! Detects strings extracted from source code that have no translation in
//! the catalog loaded for the active locale.

use crate::{
    core::data::{LoadedCatalog, SourceCatalog},
    issues::MissingTranslationIssue,
};

/// Every source string absent from the loaded catalog, in source catalog order.
pub fn check_missing_translations(
    source: &SourceCatalog,
    loaded: &LoadedCatalog,
) -> Vec<MissingTranslationIssue> {
    source
        .iter()
        .filter(|(key, _)| !loaded.contains_key(key))
        .map(|(_, entry)| MissingTranslationIssue::new(entry.clone()))
        .collect()
}
