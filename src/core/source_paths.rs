//! Domain to source-directory resolution.
//!
//! Module resource folders come first, in registry order, followed by the
//! autoload roots of first-party packages. A package that installs as a module
//! (`extra.installer-name`) is filed under the same `_<name>_` domain as the
//! module, so both contributions merge into one directory list.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::core::host::{ModuleRegistry, PackageRepository};

/// Note shown when package metadata could not be loaded.
pub const DEGRADED_NOTE: &str =
    "No composer.json file could be loaded, some translations may be missing.";
pub const DEGRADED_HINT: &str = "This is expected when not running from a development instance.";

/// Ordered mapping of domain to directories, deduplicated per domain.
#[derive(Debug, Clone, Default)]
pub struct SourcePaths {
    domains: Vec<(String, Vec<PathBuf>)>,
    /// Why package metadata was unavailable, if it was.
    degraded: Option<String>,
}

impl SourcePaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the directories of every first-party module and package.
    ///
    /// A failing package repository does not abort resolution: module
    /// directories are still returned and the result is flagged degraded.
    pub fn resolve(
        modules: &dyn ModuleRegistry,
        packages: &dyn PackageRepository,
        verbose: bool,
    ) -> Self {
        let mut paths = Self::new();

        for module in modules.first_party_modules() {
            let dir = module.resource_directory();
            let resolved = dir.canonicalize().unwrap_or_else(|_| {
                if verbose {
                    eprintln!(
                        "{} module folder {} does not exist",
                        "note:".bold().cyan(),
                        dir.display()
                    );
                }
                absolute(dir)
            });
            paths.add(module.name(), resolved);
        }

        match packages.first_party_packages() {
            Ok(list) => {
                for package in list {
                    let roots: Vec<PathBuf> = package
                        .autoload_roots
                        .iter()
                        .filter_map(|root| resolve_existing(root, verbose))
                        .collect();
                    if roots.is_empty() {
                        continue;
                    }
                    let domain = package.domain();
                    for root in roots {
                        paths.add(&domain, root);
                    }
                }
            }
            Err(e) => paths.degraded = Some(format!("{:#}", e)),
        }

        paths
    }

    /// Append a directory to a domain, ignoring duplicates.
    pub fn add(&mut self, domain: &str, dir: PathBuf) {
        match self.domains.iter_mut().find(|(name, _)| name == domain) {
            Some((_, dirs)) => {
                if !dirs.contains(&dir) {
                    dirs.push(dir);
                }
            }
            None => self.domains.push((domain.to_string(), vec![dir])),
        }
    }

    /// Add a directory given on the command line as its own domain, named
    /// after the directory.
    pub fn add_extra(&mut self, dir: &Path) {
        let resolved = dir.canonicalize().unwrap_or_else(|_| absolute(dir));
        let domain = resolved
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| resolved.to_string_lossy().to_string());
        self.add(&domain, resolved);
    }

    pub fn domains(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.domains
            .iter()
            .map(|(name, dirs)| (name.as_str(), dirs.as_slice()))
    }

    pub fn get(&self, domain: &str) -> Option<&[PathBuf]> {
        self.domains
            .iter()
            .find(|(name, _)| name == domain)
            .map(|(_, dirs)| dirs.as_slice())
    }

    /// Every directory across all domains, sorted and deduplicated.
    pub fn flattened(&self) -> Vec<PathBuf> {
        let mut all: Vec<PathBuf> = self
            .domains
            .iter()
            .flat_map(|(_, dirs)| dirs.iter().cloned())
            .collect();
        all.sort();
        all.dedup();
        all
    }

    pub fn degraded(&self) -> Option<&str> {
        self.degraded.as_deref()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Absolute form of a path that may not exist, without resolving symlinks.
fn absolute(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn resolve_existing(root: &Path, verbose: bool) -> Option<PathBuf> {
    match root.canonicalize() {
        Ok(path) => Some(path),
        Err(_) => {
            if verbose {
                eprintln!(
                    "{} autoload root {} does not exist, skipped",
                    "note:".bold().cyan(),
                    root.display()
                );
            }
            None
        }
    }
}
