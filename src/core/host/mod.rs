//! Collaborators supplied by the host application.
//!
//! The audit never discovers modules, packages or loaded translations on its
//! own: it asks these traits. The submodules provide filesystem-backed
//! implementations used by the CLI and MCP server.
//!
//! - `modules`: module registry over a modules directory
//! - `catalog_files`: loaded translations from catalog files
//! - `composer`: first-party packages from Composer metadata

pub mod catalog_files;
pub mod composer;
pub mod modules;

use std::path::{Path, PathBuf};

use anyhow::Result;
use schemars::JsonSchema;
use serde::Serialize;

use crate::core::data::Translations;

pub use catalog_files::CatalogFileHost;
pub use composer::ComposerRepository;
pub use modules::{DirectoryModule, DirectoryModuleRegistry};

/// A first-party module that may ship its own translations.
pub trait TranslationModule: Send + Sync {
    /// Host-visible module name (e.g. `_myartjaub_sosa_`).
    fn name(&self) -> &str;

    /// Folder holding the module's source code and resources.
    fn resource_directory(&self) -> &Path;

    /// Translations the module declares for `language`, keyed by raw message id.
    fn custom_translations(&self, language: &str) -> Result<Translations>;
}

/// Enumerates installed modules.
pub trait ModuleRegistry {
    /// First-party modules, in registry order.
    fn first_party_modules(&self) -> Vec<&dyn TranslationModule>;

    fn find_module(&self, name: &str) -> Option<&dyn TranslationModule>;
}

/// A catalog file left out of the loaded translations because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnreadableCatalog {
    pub path: String,
    pub error: String,
}

/// Translations the host has loaded, and the catalogs it had to skip.
#[derive(Debug, Default)]
pub struct HostTranslations {
    pub translations: Translations,
    pub unreadable: Vec<UnreadableCatalog>,
}

impl From<Translations> for HostTranslations {
    fn from(translations: Translations) -> Self {
        Self {
            translations,
            unreadable: Vec::new(),
        }
    }
}

/// Access to the translations currently loaded by the host.
pub trait TranslationHost {
    /// Never fails as a whole: unreadable catalogs are reported in
    /// [`HostTranslations::unreadable`].
    fn current_translation_map(&self, locale: &str) -> HostTranslations;
}

/// A first-party package as known to the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Install name, `vendor/package`.
    pub name: String,
    /// `extra.installer-name`, when the package installs as a host module.
    pub installer_name: Option<String>,
    /// Autoload roots as declared (not yet canonicalized).
    pub autoload_roots: Vec<PathBuf>,
}

impl PackageInfo {
    /// Domain the package's sources are filed under: `_<installer name>_`
    /// when the package installs as a module, else its install name.
    pub fn domain(&self) -> String {
        match self.installer_name.as_deref() {
            Some(alias) if !alias.is_empty() => format!("_{}_", alias),
            _ => self.name.clone(),
        }
    }
}

/// Enumerates first-party packages.
pub trait PackageRepository {
    /// Fails when package metadata is unavailable (e.g. not a development checkout).
    fn first_party_packages(&self) -> Result<Vec<PackageInfo>>;
}
