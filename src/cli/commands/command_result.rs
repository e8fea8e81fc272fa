use std::path::PathBuf;

use super::super::args::OutputFormat;
use crate::{issues::Issue, status::TranslationStatus};

#[derive(Debug)]
pub enum CommandSummary {
    Status(StatusSummary),
    Paths(PathsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StatusSummary {
    pub status: TranslationStatus,
    pub format: OutputFormat,
}

/// A host catalog file for the active locale.
#[derive(Debug)]
pub struct CatalogFile {
    pub path: PathBuf,
    pub exists: bool,
}

#[derive(Debug)]
pub struct PathsSummary {
    pub locale: String,
    pub domains: Vec<(String, Vec<PathBuf>)>,
    pub catalogs: Vec<CatalogFile>,
    pub degraded: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running transaudit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Findings of the status command, in catalog order.
    /// Empty for other commands.
    pub issues: Vec<Issue>,
    /// Number of source files that could not be read or parsed.
    pub skipped_file_count: usize,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
}
