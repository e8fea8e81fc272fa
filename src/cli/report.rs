//! Report formatting and printing utilities.
//!
//! Findings go to stdout in cargo-style text, TSV or JSON. Diagnostics about
//! the run itself (degraded package metadata, skipped files) go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, PathsSummary, StatusSummary},
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{
        data::SourceReference,
        key::{CatalogKey, escape_message},
        source_paths::{DEGRADED_HINT, DEGRADED_NOTE},
    },
    issues::{Issue, Report, ReportLocation, Severity},
    rules::TranslationStats,
    status::TranslationStatus,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of further references to display per issue.
const MAX_USAGES_DISPLAY: usize = 3;

const TSV_HEADER: &str = "kind\tdomain\tcontext\toriginal\tplural\treferences";

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Status(summary) => print_status(result, summary, verbose),
        CommandSummary::Paths(summary) => print_paths(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_status(result: &CommandResult, summary: &StatusSummary, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match summary.format {
        OutputFormat::Text => {
            print_header_to(&summary.status, stdout);
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.source_files_checked, stdout);
            }
            print_stats_to(&summary.status, stdout);
        }
        OutputFormat::Tsv => {
            report_tsv_to(&result.issues, stdout);
            print_tsv_stats_to(&summary.status.translations_stats, stdout);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&summary.status) {
            Ok(json) => {
                let _ = writeln!(stdout, "{}", json);
            }
            Err(e) => eprintln!("{} {}", "error:".bold().red(), e),
        },
    }

    let stderr = &mut io::stderr().lock();
    print_degraded_to(summary.status.degraded.as_deref(), verbose, stderr);
    print_skipped_warning_to(result.skipped_file_count, verbose, stderr);
}

/// Title line: `Translations status: français (fr)`.
pub fn print_header_to<W: Write>(status: &TranslationStatus, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {} ({})\n",
        status.title.bold(),
        status.language,
        status.language_tag
    );
}

/// Print issues in cargo-style format.
///
/// Issues are shown sorted by location; the summary line counts errors and
/// warnings.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted: Vec<&Issue> = issues.iter().collect();
    sorted.sort_by(|a, b| compare_issues(a, b));

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

/// One row per finding, tab separated, fields escaped to stay on one line.
pub fn report_tsv_to<W: Write>(issues: &[Issue], writer: &mut W) {
    let _ = writeln!(writer, "{}", TSV_HEADER);
    for issue in issues {
        let row = match issue {
            Issue::MissingTranslation(missing) => {
                let entry = &missing.translation;
                [
                    "missing".to_string(),
                    missing.headers.domain.clone(),
                    entry.context.as_deref().map(escape_message).unwrap_or_default(),
                    escape_message(&entry.original),
                    entry.plural.as_deref().map(escape_message).unwrap_or_default(),
                    entry
                        .references
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(","),
                ]
            }
            Issue::UnusedTranslation(unused) => {
                let key = CatalogKey::from_raw(unused.translation.message_id.as_str());
                let (original, plural, context) = key.parts();
                [
                    "unused".to_string(),
                    unused.translation.module_name.clone(),
                    context.map(escape_message).unwrap_or_default(),
                    escape_message(original),
                    plural.map(escape_message).unwrap_or_default(),
                    String::new(),
                ]
            }
        };
        let _ = writeln!(writer, "{}", row.join("\t"));
    }
}

/// Trailing TSV row with the counters, `name=value` in the first columns.
pub fn print_tsv_stats_to<W: Write>(stats: &TranslationStats, writer: &mut W) {
    let _ = writeln!(
        writer,
        "stats\tnbTranslations={}\tnbTranslationsFound={}\tnbMajTranslations={}\t\t",
        stats.loaded_count, stats.found_count, stats.module_count
    );
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

pub fn print_stats_to<W: Write>(status: &TranslationStatus, writer: &mut W) {
    let stats = &status.translations_stats;
    let _ = writeln!(
        writer,
        "{} {} loaded, {} found in source code, {} in modules",
        "Translations:".bold(),
        stats.loaded_count,
        stats.found_count,
        stats.module_count
    );
}

/// Warn that package sources were not scanned.
pub fn print_degraded_to<W: Write>(degraded: Option<&str>, verbose: bool, writer: &mut W) {
    let Some(reason) = degraded else {
        return;
    };
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), DEGRADED_NOTE);
    let _ = writeln!(writer, "  {} {}", "= note:".bold(), DEGRADED_HINT);
    if verbose {
        let _ = writeln!(writer, "  {} {}", "= cause:".bold(), reason);
    }
}

/// Print a warning about files that could not be read or parsed.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_paths(summary: &PathsSummary, verbose: bool) {
    print_paths_to(summary, &mut io::stdout().lock());
    print_degraded_to(
        summary.degraded.as_deref(),
        verbose,
        &mut io::stderr().lock(),
    );
}

pub fn print_paths_to<W: Write>(summary: &PathsSummary, writer: &mut W) {
    for (domain, dirs) in &summary.domains {
        let _ = writeln!(writer, "{}", domain.bold());
        for dir in dirs {
            let marker = if dir.is_dir() {
                " ".normal()
            } else {
                "!".yellow()
            };
            let _ = writeln!(writer, "  {} {}", marker, dir.display());
        }
    }

    let _ = writeln!(
        writer,
        "\n{} ({})",
        "Catalogs".bold(),
        summary.locale
    );
    for catalog in &summary.catalogs {
        let marker = if catalog.exists {
            SUCCESS_MARK.green()
        } else {
            FAILURE_MARK.red()
        };
        let _ = writeln!(writer, "  {} {}", marker, catalog.path.display());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let location = match issue.location() {
        ReportLocation::Source(reference) => reference.to_string(),
        ReportLocation::Module { name } => format!("module {}", name),
        ReportLocation::Domain { name } => format!("domain {}", name),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    for detail in issue.details() {
        let _ = writeln!(writer, "   {} {}", "=".blue(), detail);
    }

    print_usages(issue.usages(), writer);

    let _ = writeln!(writer); // Empty line between issues
}

fn print_usages<W: Write>(usages: &[SourceReference], writer: &mut W) {
    let total = usages.len();
    let display_count = total.min(MAX_USAGES_DISPLAY);

    for (i, usage) in usages.iter().take(display_count).enumerate() {
        let is_last = i == display_count - 1;
        let remaining = total.saturating_sub(display_count);
        let suffix = if is_last && remaining > 0 {
            format!(" (and {} more)", remaining)
        } else {
            String::new()
        };

        let _ = writeln!(
            writer,
            "   {} {} {}{}",
            "=".blue(),
            "used:".bold(),
            usage,
            suffix
        );
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

/// Sort key: source references by path then line, module findings after.
fn location_key(issue: &Issue) -> (u8, String, usize) {
    match issue.location() {
        ReportLocation::Source(reference) => (0, reference.file_path.clone(), reference.line),
        ReportLocation::Domain { name } => (1, name.to_string(), 0),
        ReportLocation::Module { name } => (2, name.to_string(), 0),
    }
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    location_key(a).cmp(&location_key(b))
}
