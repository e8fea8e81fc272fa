use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::{data::TranslatableEntry, host::UnreadableCatalog, key::CatalogKey},
    issues::{MissingTranslationIssue, UnusedTranslationIssue},
    rules::TranslationStats,
};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the webtrees project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditParams {
    /// Absolute path to the webtrees project root
    pub project_root_path: String,
    /// Locale to audit (default: the configured locale)
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedAuditParams {
    /// Absolute path to the webtrees project root
    pub project_root_path: String,
    /// Locale to audit (default: the configured locale)
    pub locale: Option<String>,
    /// Maximum number of items to return (default: 50, max: 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default: 0)
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub locale: String,
    pub title: String,
    pub modules_root: String,
    pub module_prefix: String,
    pub resources_dir: String,
    pub tool_module: String,
    pub composer_file: String,
    pub first_party_vendors: Vec<String>,
    pub catalogs: Vec<String>,
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            locale: c.locale,
            title: c.title,
            modules_root: c.modules_root,
            module_prefix: c.module_prefix,
            resources_dir: c.resources_dir,
            tool_module: c.tool_module,
            composer_file: c.composer_file,
            first_party_vendors: c.first_party_vendors,
            catalogs: c.catalogs,
            extensions: c.extensions,
            ignores: c.ignores,
        }
    }
}

// ============================================================
// Source Paths Types (source_paths)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainPaths {
    pub domain: String,
    pub directories: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourcePathsResult {
    pub domains: Vec<DomainPaths>,
    /// Why package sources are missing, when they are
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
}

// ============================================================
// Overview Types (translation_overview)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResult {
    pub title: String,
    pub language: String,
    pub language_tag: String,
    pub stats: TranslationStats,
    pub missing_count: usize,
    pub unused_count: usize,
    pub files_scanned: usize,
    pub skipped_files: usize,
    pub source_code_paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
    /// Host catalogs that could not be read and were left out
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable_catalogs: Vec<UnreadableCatalog>,
}

// ============================================================
// Missing Translations Types (missing_translations)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub domain: String,
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// `path:line` locations, relative to the project root
    pub references: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl From<MissingTranslationIssue> for MissingItem {
    fn from(issue: MissingTranslationIssue) -> Self {
        let TranslatableEntry {
            original,
            plural,
            context,
            references,
            comments,
            ..
        } = issue.translation;
        Self {
            domain: issue.headers.domain,
            original,
            plural,
            context,
            references: references.iter().map(ToString::to_string).collect(),
            comments,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingTranslationsResult {
    pub total_count: usize,
    pub items: Vec<MissingItem>,
    pub pagination: Pagination,
}

// ============================================================
// Unused Translations Types (unused_translations)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnusedItem {
    pub module_name: String,
    /// Raw message id, context and plural separators included
    pub message_id: String,
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl From<UnusedTranslationIssue> for UnusedItem {
    fn from(issue: UnusedTranslationIssue) -> Self {
        let key = CatalogKey::from_raw(issue.translation.message_id.as_str());
        let (original, plural, context) = key.parts();
        Self {
            original: original.to_string(),
            plural: plural.map(String::from),
            context: context.map(String::from),
            module_name: issue.translation.module_name,
            message_id: issue.translation.message_id,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnusedTranslationsResult {
    pub total_count: usize,
    pub items: Vec<UnusedItem>,
    pub pagination: Pagination,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
