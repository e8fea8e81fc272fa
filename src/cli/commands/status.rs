use anyhow::Result;

use super::super::args::StatusCommand;
use super::{CommandResult, CommandSummary, StatusSummary, helper::finish};
use crate::{
    core::AuditContext,
    issues::Issue,
    status::{UnusedCheck, generate_status},
};

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(&cmd.common)?.with_extra_paths(cmd.paths);
    let unused = if cmd.compare_loaded {
        UnusedCheck::Loaded
    } else {
        UnusedCheck::Source
    };
    let status = generate_status(&ctx, unused)?;

    let issues: Vec<Issue> = status
        .missing_translations
        .iter()
        .cloned()
        .map(Issue::MissingTranslation)
        .chain(
            status
                .non_used_translations
                .iter()
                .cloned()
                .map(Issue::UnusedTranslation),
        )
        .collect();

    let skipped = status.skipped_files;
    let files = status.files_scanned;
    Ok(finish(
        CommandSummary::Status(StatusSummary {
            status,
            format: cmd.format,
        }),
        issues,
        skipped,
        files,
        true,
    ))
}
