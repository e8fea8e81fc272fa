//! Translation call-site recognition over a PHP syntax tree.
//!
//! Function calls (`translate(...)`), static calls (`I18N::translate(...)`)
//! and method calls (`$i18n->translate(...)`, `?->`) are call sites.
//! Declarations and `new` expressions are other node kinds and never match.

use tree_sitter::Node;

use crate::core::{
    data::{SourceReference, TranslatableEntry},
    parsers::php::{PhpSource, code_children, end_line, is_comment, line},
};

/// Call node kinds and the field holding the called name.
const CALL_KINDS: &[(&str, &str)] = &[
    ("function_call_expression", "function"),
    ("scoped_call_expression", "name"),
    ("member_call_expression", "name"),
    ("nullsafe_member_call_expression", "name"),
];

/// Prefix marking a comment as addressed to translators.
pub const TRANSLATOR_COMMENT_PREFIX: &str = "I18N:";

/// The translation functions recognized in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationCallKind {
    /// `translate(message, ...)`
    Simple,
    /// `plural(singular, plural, count, ...)`
    Plural,
    /// `translateContext(context, message, ...)`
    Context,
}

impl TranslationCallKind {
    /// PHP function names are case-insensitive.
    pub fn from_function_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("translate") {
            Some(Self::Simple)
        } else if name.eq_ignore_ascii_case("plural") {
            Some(Self::Plural)
        } else if name.eq_ignore_ascii_case("translateContext") {
            Some(Self::Context)
        } else {
            None
        }
    }

    /// Number of leading arguments that must be string literals.
    fn literal_arity(self) -> usize {
        match self {
            Self::Simple => 1,
            Self::Plural | Self::Context => 2,
        }
    }

    /// Split literal arguments into `(original, plural, context)`.
    fn message_parts(self, args: &[&str]) -> (String, Option<String>, Option<String>) {
        match self {
            Self::Simple => (args[0].to_string(), None, None),
            Self::Plural => (args[0].to_string(), Some(args[1].to_string()), None),
            Self::Context => (args[1].to_string(), None, Some(args[0].to_string())),
        }
    }
}

/// Extract every recognized translation call from a parsed file.
///
/// Entries come back in source order, one per call site; merging entries with
/// the same key is left to the domain catalog.
pub fn extract_entries(php: &PhpSource, domain: &str, file_path: &str) -> Vec<TranslatableEntry> {
    let mut entries = Vec::new();
    // Most recent translator comment: (end line, normalized text).
    let mut translator_comment: Option<(usize, String)> = None;

    for node in php.preorder() {
        if is_comment(node) {
            let normalized = normalize_comment(php.text(node));
            if normalized.starts_with(TRANSLATOR_COMMENT_PREFIX) {
                translator_comment = Some((end_line(node), normalized));
            }
            continue;
        }

        let Some(name) = called_name(node) else {
            continue;
        };
        if let Some(kind) = TranslationCallKind::from_function_name(unqualified(php.text(name)))
            && let Some(args) = literal_arguments(php, node, kind.literal_arity())
            && let Some(mut entry) = build_entry(kind, &args, domain)
        {
            let call_line = line(name);
            entry.add_reference(SourceReference::new(file_path, call_line));
            if let Some((comment_end, text)) = &translator_comment
                && *comment_end <= call_line
                && comment_end + 1 >= call_line
            {
                entry.comments = vec![text.clone()];
            }
            entries.push(entry);
        }
    }

    entries
}

/// Name node of a call expression.
fn called_name(node: Node<'_>) -> Option<Node<'_>> {
    let (_, field) = CALL_KINDS.iter().find(|(kind, _)| *kind == node.kind())?;
    node.child_by_field_name(*field)
}

/// `\I18N\translate` and `translate` name the same function.
fn unqualified(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}

/// Values of the first `arity` arguments, when each is a single string literal.
///
/// Named arguments and spreads never qualify.
fn literal_arguments(php: &PhpSource, call: Node<'_>, arity: usize) -> Option<Vec<String>> {
    let arguments = call.child_by_field_name("arguments")?;
    let args: Vec<Node<'_>> = code_children(arguments)
        .into_iter()
        .filter(|arg| arg.kind() == "argument")
        .collect();
    args.get(..arity)?
        .iter()
        .map(|arg| argument_literal(php, *arg))
        .collect()
}

fn argument_literal(php: &PhpSource, arg: Node<'_>) -> Option<String> {
    let mut cursor = arg.walk();
    if arg.children(&mut cursor).any(|child| child.kind() == ":") {
        return None;
    }
    match code_children(arg).as_slice() {
        [value] => php.string_literal(*value),
        _ => None,
    }
}

fn build_entry(
    kind: TranslationCallKind,
    args: &[String],
    domain: &str,
) -> Option<TranslatableEntry> {
    let literals: Vec<&str> = args.iter().map(String::as_str).collect();
    let (original, plural, context) = kind.message_parts(&literals);
    TranslatableEntry::new(domain, original, plural, context)
}

/// Strip comment markers and collapse the comment onto one line.
pub fn normalize_comment(text: &str) -> String {
    let body = if let Some(block) = text.strip_prefix("/*") {
        block.strip_suffix("*/").unwrap_or(block)
    } else if let Some(line) = text.strip_prefix("//") {
        line
    } else {
        text.strip_prefix('#').unwrap_or(text)
    };
    body.lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
