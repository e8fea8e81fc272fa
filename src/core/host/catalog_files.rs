use std::path::PathBuf;

use colored::Colorize;

use crate::{
    config::LOCALE_PLACEHOLDER,
    core::{
        data::Translations,
        host::{HostTranslations, TranslationHost, UnreadableCatalog},
        parsers::read_catalog,
    },
};

/// Loaded translations read from catalog files under the project root.
///
/// Each pattern may contain `{locale}`. Missing files are skipped; later files
/// override earlier ones for the same message id. A file that fails to parse
/// is left out with a warning and listed as unreadable.
#[derive(Debug, Clone)]
pub struct CatalogFileHost {
    root: PathBuf,
    patterns: Vec<String>,
}

impl CatalogFileHost {
    pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            patterns,
        }
    }

    /// Catalog files that exist for `locale`.
    pub fn catalog_files(&self, locale: &str) -> Vec<PathBuf> {
        self.patterns
            .iter()
            .map(|pattern| self.root.join(pattern.replace(LOCALE_PLACEHOLDER, locale)))
            .filter(|path| path.is_file())
            .collect()
    }
}

impl TranslationHost for CatalogFileHost {
    fn current_translation_map(&self, locale: &str) -> HostTranslations {
        let mut translations = Translations::new();
        let mut unreadable = Vec::new();
        for path in self.catalog_files(locale) {
            match read_catalog(&path) {
                Ok(catalog) => translations.extend(catalog),
                Err(e) => {
                    let shown = path.strip_prefix(&self.root).unwrap_or(&path);
                    eprintln!(
                        "{} skipping catalog {} - {:#}",
                        "warning:".bold().yellow(),
                        shown.display(),
                        e
                    );
                    unreadable.push(UnreadableCatalog {
                        path: shown.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
        HostTranslations {
            translations,
            unreadable,
        }
    }
}
