use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{data::entry::TranslatableEntry, key::CatalogKey};

/// Insertion-ordered map keyed by [`CatalogKey`].
///
/// Re-inserting an existing key replaces the value but keeps its original
/// position, so iteration order is first-seen order.
pub type KeyedCatalog<V> = IndexMap<CatalogKey, V>;

/// Message id to translated text, in file order, as read from a catalog file.
///
/// Plural translations keep their forms joined with the plural separator.
pub type Translations = KeyedCatalog<String>;

/// Strings extracted from one domain's source files.
#[derive(Debug, Clone)]
pub struct DomainCatalog {
    pub domain: String,
    entries: KeyedCatalog<TranslatableEntry>,
}

impl DomainCatalog {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            entries: KeyedCatalog::new(),
        }
    }

    /// Add an extracted occurrence, merging it into an existing entry with the same key.
    pub fn add(&mut self, entry: TranslatableEntry) {
        let key = entry.key();
        match self.entries.get_mut(&key) {
            Some(existing) => existing.merge(entry),
            None => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Merge another catalog of the same domain into this one.
    pub fn merge(&mut self, other: DomainCatalog) {
        for (_, entry) in other.entries {
            self.add(entry);
        }
    }

    pub fn entries(&self) -> &KeyedCatalog<TranslatableEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (CatalogKey, TranslatableEntry)> {
        self.entries.into_iter()
    }
}

/// Every string extracted during a scan, across all domains.
///
/// When two domains produce the same key, the later domain's entry replaces
/// the earlier one in place.
pub type SourceCatalog = KeyedCatalog<TranslatableEntry>;

/// Flatten domain catalogs, in order, into one source catalog.
pub fn merge_domains(domains: impl IntoIterator<Item = DomainCatalog>) -> SourceCatalog {
    domains.into_iter().flat_map(DomainCatalog::into_entries).collect()
}

/// Translations currently loaded by the host for the active locale.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    translations: HashMap<CatalogKey, String>,
}

impl LoadedCatalog {
    pub fn new(translations: HashMap<CatalogKey, String>) -> Self {
        Self { translations }
    }

    pub fn from_translations(translations: Translations) -> Self {
        Self {
            translations: translations.into_iter().collect(),
        }
    }

    /// Build from raw message ids already encoded with the host separators.
    pub fn from_raw(map: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            translations: map
                .into_iter()
                .map(|(id, text)| (CatalogKey::from_raw(id), text))
                .collect(),
        }
    }

    pub fn contains_key(&self, key: &CatalogKey) -> bool {
        self.translations.contains_key(key)
    }

    pub fn get(&self, key: &CatalogKey) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// A translation declared inside a first-party module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTranslation {
    pub module_name: String,
    /// Raw message id as declared by the module (host separators included).
    pub message_id: String,
}

impl ModuleTranslation {
    pub fn new(module_name: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            message_id: message_id.into(),
        }
    }
}

/// Translations declared by all first-party modules for the active language.
pub type ModuleCatalog = KeyedCatalog<ModuleTranslation>;
