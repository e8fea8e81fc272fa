use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{
    data::Translations,
    host::{ModuleRegistry, TranslationModule},
    parsers::read_catalog,
};

/// Legacy per-module catalogs: `<module>/language/<lang>.<ext>`.
const LEGACY_EXTENSIONS: &[&str] = &["csv", "php", "mo"];

/// Current per-module catalogs: `<resources>/lang/<lang>/messages.<ext>`.
const MESSAGE_EXTENSIONS: &[&str] = &["php", "json", "po", "mo"];

/// A module installed as a directory under the modules root.
#[derive(Debug, Clone)]
pub struct DirectoryModule {
    name: String,
    directory: PathBuf,
    resources: PathBuf,
}

impl DirectoryModule {
    pub fn new(directory: impl Into<PathBuf>, resources_dir: &str) -> Self {
        let directory = directory.into();
        let dir_name = directory
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            name: format!("_{}_", dir_name),
            resources: directory.join(resources_dir),
            directory,
        }
    }

    /// Catalog files for `language`, lowest priority first.
    fn catalog_candidates(&self, language: &str) -> Vec<PathBuf> {
        let legacy = LEGACY_EXTENSIONS
            .iter()
            .map(|ext| self.directory.join("language").join(format!("{language}.{ext}")));
        let current = MESSAGE_EXTENSIONS.iter().map(|ext| {
            self.resources
                .join("lang")
                .join(language)
                .join(format!("messages.{ext}"))
        });
        legacy.chain(current).collect()
    }
}

impl TranslationModule for DirectoryModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_directory(&self) -> &Path {
        &self.resources
    }

    /// Later catalog files override earlier ones for the same message id.
    fn custom_translations(&self, language: &str) -> Result<Translations> {
        let mut translations = Translations::new();
        for path in self.catalog_candidates(language) {
            if !path.is_file() {
                continue;
            }
            for (key, text) in read_catalog(&path)? {
                translations.insert(key, text);
            }
        }
        Ok(translations)
    }
}

/// Modules found under a modules root, selected by directory-name prefix.
#[derive(Debug, Default)]
pub struct DirectoryModuleRegistry {
    modules: Vec<DirectoryModule>,
}

impl DirectoryModuleRegistry {
    pub fn new(modules: Vec<DirectoryModule>) -> Self {
        Self { modules }
    }

    /// List module directories under `modules_root` whose name starts with
    /// `prefix`, sorted by name. A missing modules root yields no modules.
    pub fn discover(modules_root: &Path, prefix: &str, resources_dir: &str) -> Result<Self> {
        if !modules_root.is_dir() {
            return Ok(Self::default());
        }

        let mut dirs = Vec::new();
        for entry in fs::read_dir(modules_root)
            .with_context(|| format!("Failed to read modules directory: {:?}", modules_root))?
        {
            let entry = entry?;
            let is_module = entry.file_type()?.is_dir()
                && entry.file_name().to_string_lossy().starts_with(prefix);
            if is_module {
                dirs.push(entry.path());
            }
        }
        dirs.sort();

        Ok(Self::new(
            dirs.into_iter()
                .map(|dir| DirectoryModule::new(dir, resources_dir))
                .collect(),
        ))
    }
}

impl ModuleRegistry for DirectoryModuleRegistry {
    fn first_party_modules(&self) -> Vec<&dyn TranslationModule> {
        self.modules
            .iter()
            .map(|m| m as &dyn TranslationModule)
            .collect()
    }

    fn find_module(&self, name: &str) -> Option<&dyn TranslationModule> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| m as &dyn TranslationModule)
    }
}
