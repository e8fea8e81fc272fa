//! Issue types for audit results.
//!
//! Each issue is self-contained: reporters (CLI text/TSV/JSON, MCP) need
//! nothing besides the issue to display it. The serialized form of both issue
//! types is the one consumers of the status output expect.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{
    data::{ModuleTranslation, SourceReference, TranslatableEntry},
    key::escape_message,
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    UnusedTranslation,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::UnusedTranslation => write!(f, "unused-translation"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Headers of a missing translation (`{"domain": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainHeaders {
    pub domain: String,
}

/// A string used in source code with no loaded translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslationIssue {
    pub headers: DomainHeaders,
    pub translation: TranslatableEntry,
}

impl MissingTranslationIssue {
    pub fn new(entry: TranslatableEntry) -> Self {
        Self {
            headers: DomainHeaders {
                domain: entry.domain.clone(),
            },
            translation: entry,
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// A module translation whose string no longer appears in source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnusedTranslationIssue {
    pub translation: ModuleTranslation,
}

impl UnusedTranslationIssue {
    pub fn new(translation: ModuleTranslation) -> Self {
        Self { translation }
    }

    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedTranslation
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A finding of the audit.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    UnusedTranslation(UnusedTranslationIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::severity(),
            Issue::UnusedTranslation(_) => UnusedTranslationIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::rule(),
            Issue::UnusedTranslation(_) => UnusedTranslationIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Where an issue points to.
pub enum ReportLocation<'a> {
    /// First source reference of the string.
    Source(&'a SourceReference),
    /// Module declaring the translation.
    Module { name: &'a str },
    /// Extracted string without a recorded reference.
    Domain { name: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards it on [`Issue`].
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display, control characters escaped.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" lines.
    fn details(&self) -> Vec<String> {
        Vec::new()
    }

    /// Further source references, after the one shown as location.
    fn usages(&self) -> &[SourceReference] {
        &[]
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        match self.translation.references.first() {
            Some(reference) => ReportLocation::Source(reference),
            None => ReportLocation::Domain {
                name: &self.headers.domain,
            },
        }
    }

    fn message(&self) -> String {
        escape_message(&self.translation.original)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Vec<String> {
        let entry = &self.translation;
        let mut details = vec![format!("domain: {}", self.headers.domain)];
        if let Some(context) = &entry.context {
            details.push(format!("context: {}", escape_message(context)));
        }
        if let Some(plural) = &entry.plural {
            details.push(format!("plural: {}", escape_message(plural)));
        }
        details.extend(entry.comments.iter().map(|c| format!("comment: {}", c)));
        details
    }

    fn usages(&self) -> &[SourceReference] {
        self.translation.references.get(1..).unwrap_or(&[])
    }
}

impl Report for UnusedTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Module {
            name: &self.translation.module_name,
        }
    }

    fn message(&self) -> String {
        escape_message(&self.translation.message_id)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
