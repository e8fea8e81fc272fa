use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path prefixes.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning one directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Finds source files by extension under a directory, honouring ignore patterns.
pub struct FileScanner {
    extensions: Vec<String>,
    glob_patterns: Vec<Pattern>,
    literal_ignores: Vec<String>,
    verbose: bool,
}

impl FileScanner {
    pub fn new(extensions: &[String], ignore_patterns: &[String], verbose: bool) -> Self {
        let mut glob_patterns = Vec::new();
        let mut literal_ignores = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => glob_patterns.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literal_ignores.push(p.trim_start_matches("./").to_string());
            }
        }

        Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            glob_patterns,
            literal_ignores,
            verbose,
        }
    }

    /// Recursively list source files under `dir`.
    ///
    /// A directory that does not exist yields no files and is not counted as
    /// skipped. Literal ignores are matched as prefixes relative to `dir`, and
    /// glob ignores against the path relative to `dir`.
    pub fn scan(&self, dir: &Path) -> ScanResult {
        let mut result = ScanResult::default();

        if !dir.is_dir() {
            if self.verbose {
                eprintln!(
                    "{} Source path does not exist: {}",
                    "note:".bold().cyan(),
                    dir.display()
                );
            }
            return result;
        }

        let literal_ignore_paths: Vec<PathBuf> =
            self.literal_ignores.iter().map(|p| dir.join(p)).collect();

        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if self.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            let relative = path.strip_prefix(dir).unwrap_or(path);
            let relative_str = relative.to_string_lossy().replace('\\', "/");
            if self.glob_patterns.iter().any(|p| p.matches(&relative_str)) {
                continue;
            }

            if entry.file_type().is_file() && self.is_source_file(path) {
                result.files.push(path.to_path_buf());
            }
        }

        result.files.sort();
        result
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
    }
}
