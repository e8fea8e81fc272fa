use schemars::JsonSchema;
use serde::Serialize;

use crate::core::data::{LoadedCatalog, ModuleCatalog, SourceCatalog};

/// Catalog sizes, serialized with the field names status consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TranslationStats {
    /// Translations loaded for the active locale.
    #[serde(rename = "nbTranslations")]
    pub loaded_count: usize,
    /// Distinct strings extracted from source code.
    #[serde(rename = "nbTranslationsFound")]
    pub found_count: usize,
    /// Translations declared by first-party modules.
    #[serde(rename = "nbMajTranslations")]
    pub module_count: usize,
}

pub fn compute_stats(
    loaded: &LoadedCatalog,
    source: &SourceCatalog,
    modules: &ModuleCatalog,
) -> TranslationStats {
    TranslationStats {
        loaded_count: loaded.len(),
        found_count: source.len(),
        module_count: modules.len(),
    }
}
