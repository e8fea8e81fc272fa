use anyhow::Result;

use super::super::args::PathsCommand;
use super::{CatalogFile, CommandResult, CommandSummary, PathsSummary, helper::finish};
use crate::core::AuditContext;

pub fn paths(cmd: PathsCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(&cmd.common)?.with_extra_paths(cmd.paths);
    ctx.ensure_tool_module()?;

    let source_paths = ctx.source_paths();
    let domains = source_paths
        .domains()
        .map(|(domain, dirs)| (domain.to_string(), dirs.to_vec()))
        .collect();
    let catalogs = ctx
        .config
        .catalog_paths(&ctx.locale)
        .into_iter()
        .map(|relative| {
            let path = ctx.root_dir.join(relative);
            CatalogFile {
                exists: path.is_file(),
                path,
            }
        })
        .collect();

    Ok(finish(
        CommandSummary::Paths(PathsSummary {
            locale: ctx.locale.clone(),
            domains,
            catalogs,
            degraded: source_paths.degraded().map(String::from),
        }),
        Vec::new(),
        0,
        0,
        true,
    ))
}
