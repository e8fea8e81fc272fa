//! Helper functions for MCP server operations.

use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    core::AuditContext,
    status::{TranslationStatus, UnusedCheck, generate_status},
};

use super::types::Pagination;

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

/// Build an audit context for a project root, never verbose.
pub fn audit_context(
    project_root_path: &str,
    locale: Option<String>,
) -> Result<AuditContext, McpError> {
    let common = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        locale,
        verbose: false,
    };
    AuditContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Run the full audit for a project root.
pub fn audit_status(
    project_root_path: &str,
    locale: Option<String>,
) -> Result<TranslationStatus, McpError> {
    let ctx = audit_context(project_root_path, locale)?;
    generate_status(&ctx, UnusedCheck::Source)
        .map_err(|e| McpError::internal_error(format!("Audit failed: {:#}", e), None))
}

/// Slice `items` according to the requested window.
pub fn paginate<T>(
    items: Vec<T>,
    offset: Option<u32>,
    limit: Option<u32>,
) -> (Vec<T>, Pagination) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    let total_count = items.len();

    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total_count;

    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}

/// Serialize a result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
