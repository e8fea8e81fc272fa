use std::{cell::OnceCell, path::PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::{LoadedCatalog, ModuleCatalog, ModuleTranslation, SourceCatalog, merge_domains},
        extract::{Extractor, SkippedFile},
        file_scanner::FileScanner,
        host::{
            CatalogFileHost, ComposerRepository, DirectoryModuleRegistry, ModuleRegistry,
            PackageRepository, TranslationHost, UnreadableCatalog,
        },
        source_paths::SourcePaths,
    },
    error::AuditError,
};

/// Result of extracting every domain of the resolved source paths.
pub struct SourceScan {
    pub catalog: SourceCatalog,
    /// Files that could not be read or parsed.
    pub skipped: Vec<SkippedFile>,
    /// Source files found across all domains.
    pub file_count: usize,
}

/// One audit run over a project.
///
/// Holds the configuration, the active locale and the host collaborators.
/// Everything derived from them is computed on first access and memoized, so
/// each catalog is built at most once per context.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--locale`, `--root`)
/// 2. `.transauditrc.json` config file
/// 3. Built-in defaults
pub struct AuditContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root; relative config paths and source references are
    /// resolved against it.
    pub root_dir: PathBuf,

    /// Active locale (e.g. `fr`, `en-GB`).
    pub locale: String,

    /// Whether to print per-path diagnostics.
    pub verbose: bool,

    /// Directories given on the command line, scanned as extra domains.
    extra_paths: Vec<PathBuf>,

    modules: Box<dyn ModuleRegistry>,
    host: Box<dyn TranslationHost>,
    packages: Box<dyn PackageRepository>,

    source_paths: OnceCell<SourcePaths>,
    source_scan: OnceCell<SourceScan>,
    loaded_catalog: OnceCell<(LoadedCatalog, Vec<UnreadableCatalog>)>,
    module_catalog: OnceCell<ModuleCatalog>,
}

impl AuditContext {
    /// Create a context backed by the filesystem collaborators.
    ///
    /// Loads the configuration found from `--root` upward, discovers modules
    /// under `modulesRoot` and reads packages through `composerFile`.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config = load_config(&root_dir)?.config;

        let locale = common_args
            .locale
            .clone()
            .unwrap_or_else(|| config.locale.clone());
        if locale.trim().is_empty() {
            return Err(AuditError::InvalidConfig("locale must not be empty".to_string()).into());
        }

        let modules = DirectoryModuleRegistry::discover(
            &root_dir.join(&config.modules_root),
            &config.module_prefix,
            &config.resources_dir,
        )?;
        let host = CatalogFileHost::new(&root_dir, config.catalogs.clone());
        let packages = ComposerRepository::new(
            root_dir.join(&config.composer_file),
            &config.first_party_vendors,
        )?;

        Ok(Self::with_collaborators(
            config,
            root_dir,
            locale,
            common_args.verbose,
            Box::new(modules),
            Box::new(host),
            Box::new(packages),
        ))
    }

    /// Create a context over caller-supplied collaborators.
    pub fn with_collaborators(
        config: Config,
        root_dir: PathBuf,
        locale: String,
        verbose: bool,
        modules: Box<dyn ModuleRegistry>,
        host: Box<dyn TranslationHost>,
        packages: Box<dyn PackageRepository>,
    ) -> Self {
        Self {
            config,
            root_dir,
            locale,
            verbose,
            extra_paths: Vec::new(),
            modules,
            host,
            packages,
            source_paths: OnceCell::new(),
            source_scan: OnceCell::new(),
            loaded_catalog: OnceCell::new(),
            module_catalog: OnceCell::new(),
        }
    }

    pub fn with_extra_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.extra_paths = paths;
        self
    }

    pub fn modules(&self) -> &dyn ModuleRegistry {
        self.modules.as_ref()
    }

    /// Fails unless the module owning the audit is registered.
    pub fn ensure_tool_module(&self) -> Result<(), AuditError> {
        match self.modules.find_module(&self.config.tool_module) {
            Some(_) => Ok(()),
            None => Err(AuditError::ModuleNotFound(self.config.tool_module.clone())),
        }
    }

    pub fn source_paths(&self) -> &SourcePaths {
        self.source_paths.get_or_init(|| {
            let mut paths =
                SourcePaths::resolve(self.modules.as_ref(), self.packages.as_ref(), self.verbose);
            for dir in &self.extra_paths {
                paths.add_extra(&self.root_dir.join(dir));
            }
            paths
        })
    }

    /// Extract every resolved domain, in source-path order.
    pub fn source_scan(&self) -> &SourceScan {
        self.source_scan.get_or_init(|| {
            let scanner = FileScanner::new(
                &self.config.normalized_extensions(),
                &self.config.ignores,
                self.verbose,
            );
            let extractor = Extractor::new(&scanner, &self.root_dir, self.verbose);

            let mut domains = Vec::new();
            let mut skipped = Vec::new();
            let mut file_count = 0;
            for (domain, dirs) in self.source_paths().domains() {
                let extraction = extractor.extract_domain(domain, dirs);
                file_count += extraction.file_count;
                skipped.extend(extraction.skipped);
                domains.push(extraction.catalog);
            }

            SourceScan {
                catalog: merge_domains(domains),
                skipped,
                file_count,
            }
        })
    }

    pub fn source_catalog(&self) -> &SourceCatalog {
        &self.source_scan().catalog
    }

    /// Translations the host has loaded for the active locale.
    pub fn loaded_catalog(&self) -> &LoadedCatalog {
        &self.host_load().0
    }

    /// Host catalog files left out of [`Self::loaded_catalog`].
    pub fn unreadable_catalogs(&self) -> &[UnreadableCatalog] {
        &self.host_load().1
    }

    fn host_load(&self) -> &(LoadedCatalog, Vec<UnreadableCatalog>) {
        self.loaded_catalog.get_or_init(|| {
            let loaded = self.host.current_translation_map(&self.locale);
            (
                LoadedCatalog::from_translations(loaded.translations),
                loaded.unreadable,
            )
        })
    }

    /// Translations declared by first-party modules for the active locale.
    ///
    /// A module whose catalog cannot be read contributes nothing; a warning
    /// is printed and the other modules are still collected.
    pub fn module_catalog(&self) -> &ModuleCatalog {
        self.module_catalog.get_or_init(|| {
            let mut catalog = ModuleCatalog::new();
            for module in self.modules.first_party_modules() {
                match module.custom_translations(&self.locale) {
                    Ok(translations) => {
                        for (key, _) in translations {
                            let translation =
                                ModuleTranslation::new(module.name(), key.as_str());
                            catalog.insert(key, translation);
                        }
                    }
                    Err(e) => eprintln!(
                        "{} could not read translations of module {} - {:#}",
                        "warning:".bold().yellow(),
                        module.name(),
                        e
                    ),
                }
            }
            catalog
        })
    }
}
