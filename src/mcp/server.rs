use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::load_config;

use super::helpers::{audit_context, audit_status, json_result, paginate};
use super::types::{
    AuditParams, ConfigDto, ConfigValues, DomainPaths, GetConfigParams, MissingItem,
    MissingTranslationsResult, OverviewResult, PaginatedAuditParams, SourcePathsResult,
    UnusedItem, UnusedTranslationsResult,
};

#[derive(Clone)]
pub struct TransauditMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TransauditMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TransauditMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project configuration
    #[tool(description = "Get the transaudit configuration of a webtrees project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List the domains and directories that are scanned
    #[tool(
        description = "List the domains (modules and first-party packages) and the source directories scanned for each."
    )]
    pub async fn source_paths(
        &self,
        params: Parameters<AuditParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = audit_context(&params.0.project_root_path, params.0.locale)?;
        ctx.ensure_tool_module()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let paths = ctx.source_paths();
        json_result(&SourcePathsResult {
            domains: paths
                .domains()
                .map(|(domain, dirs)| DomainPaths {
                    domain: domain.to_string(),
                    directories: dirs
                        .iter()
                        .map(|d| d.to_string_lossy().to_string())
                        .collect(),
                })
                .collect(),
            degraded: paths.degraded().map(String::from),
        })
    }

    /// Get translation statistics without detailed items
    #[tool(
        description = "Get translation statistics for a locale: loaded, found and module translation counts, plus the number of missing and unused translations. Use this first."
    )]
    pub async fn translation_overview(
        &self,
        params: Parameters<AuditParams>,
    ) -> Result<CallToolResult, McpError> {
        let status = audit_status(&params.0.project_root_path, params.0.locale)?;

        json_result(&OverviewResult {
            missing_count: status.missing_translations.len(),
            unused_count: status.non_used_translations.len(),
            title: status.title,
            language: status.language,
            language_tag: status.language_tag,
            stats: status.translations_stats,
            files_scanned: status.files_scanned,
            skipped_files: status.skipped_files,
            source_code_paths: status.source_code_paths,
            degraded: status.degraded,
            unreadable_catalogs: status.unreadable_catalogs,
        })
    }

    /// Get strings used in code with no loaded translation
    #[tool(
        description = "Get strings used in source code that have no translation for the locale. Returns paginated list in scan order."
    )]
    pub async fn missing_translations(
        &self,
        params: Parameters<PaginatedAuditParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let status = audit_status(&params.project_root_path, params.locale)?;

        let total_count = status.missing_translations.len();
        let (page, pagination) =
            paginate(status.missing_translations, params.offset, params.limit);

        json_result(&MissingTranslationsResult {
            total_count,
            items: page.into_iter().map(MissingItem::from).collect(),
            pagination,
        })
    }

    /// Get module translations no longer used in code
    #[tool(
        description = "Get translations shipped by modules whose string is no longer used in source code. Returns paginated list."
    )]
    pub async fn unused_translations(
        &self,
        params: Parameters<PaginatedAuditParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let status = audit_status(&params.project_root_path, params.locale)?;

        let total_count = status.non_used_translations.len();
        let (page, pagination) =
            paginate(status.non_used_translations, params.offset, params.limit);

        json_result(&UnusedTranslationsResult {
            total_count,
            items: page.into_iter().map(UnusedItem::from).collect(),
            pagination,
        })
    }
}

#[tool_handler]
impl ServerHandler for TransauditMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "transaudit MCP helps AI agents keep webtrees module translations complete.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. source_paths - Get the scanned domains and directories\n\
                 3. translation_overview - Get translation statistics for a locale\n\
                 4. missing_translations - Get strings without a translation (paginated)\n\
                 5. unused_translations - Get module translations no longer used (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use translation_overview to understand the overall state\n\
                 2. Add translations for missing_translations to the module catalogs\n\
                 3. Remove unused_translations from the module catalogs"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TransauditMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
