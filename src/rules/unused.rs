//! Unused module translation detection rules.
//!
//! The primary rule reports module translations whose string is no longer
//! extracted from source code. The historical variant compares module
//! translations against the loaded catalog instead; it answers a different
//! question (which module strings the host did not load) and only runs for
//! `status --compare-loaded`.

use crate::{
    core::data::{LoadedCatalog, ModuleCatalog, SourceCatalog},
    issues::UnusedTranslationIssue,
};

/// Module translations whose key does not occur in the source catalog.
pub fn check_unused_translations(
    modules: &ModuleCatalog,
    source: &SourceCatalog,
) -> Vec<UnusedTranslationIssue> {
    modules
        .iter()
        .filter(|(key, _)| !source.contains_key(*key))
        .map(|(_, translation)| UnusedTranslationIssue::new(translation.clone()))
        .collect()
}

/// Module translations whose key is not in the loaded catalog.
pub fn check_unloaded_module_translations(
    modules: &ModuleCatalog,
    loaded: &LoadedCatalog,
) -> Vec<UnusedTranslationIssue> {
    modules
        .iter()
        .filter(|(key, _)| !loaded.contains_key(key))
        .map(|(_, translation)| UnusedTranslationIssue::new(translation.clone()))
        .collect()
}
