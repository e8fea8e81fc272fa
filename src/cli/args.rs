//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `status`: Audit translation coverage for a locale
//! - `paths`: Show the source directories the audit scans
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Paths(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by the audit commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locale to audit (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One tab-separated row per finding
    Tsv,
    /// Full status as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report module translations the host has not loaded, instead of
    /// those no longer found in source code
    #[arg(long)]
    pub compare_loaded: bool,

    /// Additional source directories, each scanned as its own domain
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PathsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Additional source directories, each scanned as its own domain
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report missing and unused translations for a locale
    Status(StatusCommand),
    /// Show the domains and source directories that would be scanned
    Paths(PathsCommand),
    /// Initialize a new .transauditrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
