//! Translation status of a project for one locale.

use anyhow::Result;
use serde::Serialize;

use crate::{
    core::{AuditContext, host::UnreadableCatalog, language::endonym},
    issues::{MissingTranslationIssue, UnusedTranslationIssue},
    rules::{
        TranslationStats, check_missing_translations, check_unloaded_module_translations,
        check_unused_translations, compute_stats,
    },
};

/// What a module translation is checked against before it is reported as unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnusedCheck {
    /// Strings extracted from source code.
    #[default]
    Source,
    /// Translations the host has loaded.
    Loaded,
}

/// Everything a status view displays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStatus {
    pub title: String,
    /// Locale name in its own language.
    pub language: String,
    pub language_tag: String,
    pub source_code_paths: Vec<String>,
    pub translations_stats: TranslationStats,
    pub missing_translations: Vec<MissingTranslationIssue>,
    pub non_used_translations: Vec<UnusedTranslationIssue>,
    /// Set when package metadata was unavailable and only module folders were scanned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
    pub skipped_files: usize,
    /// Source files found, skipped ones included.
    pub files_scanned: usize,
    /// Host catalog files left out of the loaded translations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable_catalogs: Vec<UnreadableCatalog>,
}

/// Run the audit.
///
/// Fails with [`crate::error::AuditError::ModuleNotFound`] before anything is
/// scanned when the tool module is not registered.
pub fn generate_status(ctx: &AuditContext, unused: UnusedCheck) -> Result<TranslationStatus> {
    ctx.ensure_tool_module()?;

    let source_paths = ctx.source_paths();
    let scan = ctx.source_scan();
    let loaded = ctx.loaded_catalog();
    let modules = ctx.module_catalog();

    let non_used_translations = match unused {
        UnusedCheck::Source => check_unused_translations(modules, &scan.catalog),
        UnusedCheck::Loaded => check_unloaded_module_translations(modules, loaded),
    };

    Ok(TranslationStatus {
        title: ctx.config.title.clone(),
        language: endonym(&ctx.locale),
        language_tag: ctx.locale.clone(),
        source_code_paths: source_paths
            .flattened()
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        translations_stats: compute_stats(loaded, &scan.catalog, modules),
        missing_translations: check_missing_translations(&scan.catalog, loaded),
        non_used_translations,
        degraded: source_paths.degraded().map(String::from),
        skipped_files: scan.skipped.len(),
        files_scanned: scan.file_count,
        unreadable_catalogs: ctx.unreadable_catalogs().to_vec(),
    })
}
