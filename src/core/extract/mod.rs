//! String extraction: source directories in, per-domain catalogs out.
//!
//! Files of one domain are read and parsed in parallel; the per-file
//! results are collected in file order and merged sequentially, so the
//! resulting catalog does not depend on thread scheduling.

pub mod call_site;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::core::{
    data::{DomainCatalog, TranslatableEntry},
    file_scanner::FileScanner,
    parsers::php::PhpSource,
};

pub use call_site::{TranslationCallKind, extract_entries};

/// A source file that could not be read or parsed.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub file_path: String,
    pub error: String,
}

/// Extraction result for one domain.
#[derive(Debug)]
pub struct DomainExtraction {
    pub catalog: DomainCatalog,
    pub skipped: Vec<SkippedFile>,
    /// Source files found for the domain, skipped ones included.
    pub file_count: usize,
    /// Paths that could not be accessed while walking directories.
    pub inaccessible_paths: usize,
}

/// Extracts translatable strings from source directories.
pub struct Extractor<'a> {
    scanner: &'a FileScanner,
    /// References are reported relative to this directory.
    reference_root: PathBuf,
    verbose: bool,
}

impl<'a> Extractor<'a> {
    pub fn new(scanner: &'a FileScanner, reference_root: &Path, verbose: bool) -> Self {
        Self {
            scanner,
            reference_root: reference_root
                .canonicalize()
                .unwrap_or_else(|_| reference_root.to_path_buf()),
            verbose,
        }
    }

    /// Scan every directory of a domain. Files reachable from several
    /// directories are extracted once.
    pub fn extract_domain(&self, domain: &str, dirs: &[PathBuf]) -> DomainExtraction {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        let mut inaccessible_paths = 0;

        for dir in dirs {
            let scan = self.scanner.scan(dir);
            inaccessible_paths += scan.skipped_count;
            files.extend(scan.files.into_iter().filter(|f| seen.insert(f.clone())));
        }

        let file_count = files.len();
        let results: Vec<(PathBuf, Result<Vec<TranslatableEntry>>)> = files
            .into_par_iter()
            .map(|path| {
                let result = self.extract_file(domain, &path);
                (path, result)
            })
            .collect();

        let mut catalog = DomainCatalog::new(domain);
        let mut skipped = Vec::new();
        for (path, result) in results {
            match result {
                Ok(entries) => entries.into_iter().for_each(|e| catalog.add(e)),
                Err(e) => {
                    if self.verbose {
                        eprintln!(
                            "{} {} - {:#}",
                            "warning:".bold().yellow(),
                            path.display(),
                            e
                        );
                    }
                    skipped.push(SkippedFile {
                        file_path: path.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        DomainExtraction {
            catalog,
            skipped,
            file_count,
            inaccessible_paths,
        }
    }

    fn extract_file(&self, domain: &str, path: &Path) -> Result<Vec<TranslatableEntry>> {
        let bytes = fs::read(path).context("Failed to read file")?;
        let source = String::from_utf8(bytes).context("File is not valid UTF-8")?;
        let php = PhpSource::parse(source)?;
        Ok(extract_entries(&php, domain, &self.reference_path(path)))
    }

    /// Path relative to the reference root, or the path as given when outside it.
    fn reference_path(&self, path: &Path) -> String {
        let absolute = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        absolute
            .strip_prefix(&self.reference_root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
