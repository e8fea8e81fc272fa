//! Catalog key normalization.
//!
//! Every catalog in an audit (strings extracted from source, the host's loaded
//! translations, module-declared translations) is joined on a [`CatalogKey`].
//! The key follows the host's gettext convention: a plural form is appended
//! after a NUL byte and a context is prepended before an EOT byte, so message
//! ids coming from `.po`/`.mo` style catalogs can be used as keys unchanged.

use std::fmt;

use serde::Serialize;

/// Separator between the singular and plural form of a message id.
pub const PLURAL_SEPARATOR: char = '\u{0}';

/// Separator between the context and the message id.
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Canonical identity of a translatable string.
///
/// Two entries are the same translatable string iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CatalogKey(String);

impl CatalogKey {
    /// Compute the key for an `(original, plural, context)` triple.
    ///
    /// `None` and `Some("")` are treated identically for both `plural` and `context`.
    pub fn new(original: &str, plural: Option<&str>, context: Option<&str>) -> Self {
        let plural = plural.filter(|p| !p.is_empty());
        let context = context.filter(|c| !c.is_empty());

        let mut key = String::with_capacity(
            original.len()
                + plural.map_or(0, |p| p.len() + 1)
                + context.map_or(0, |c| c.len() + 1),
        );
        if let Some(context) = context {
            key.push_str(context);
            key.push(CONTEXT_SEPARATOR);
        }
        key.push_str(original);
        if let Some(plural) = plural {
            key.push(PLURAL_SEPARATOR);
            key.push_str(plural);
        }
        Self(key)
    }

    /// Wrap a message id that is already encoded with the host separators.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the key back into `(original, plural, context)`.
    pub fn parts(&self) -> (&str, Option<&str>, Option<&str>) {
        let (context, rest) = match self.0.split_once(CONTEXT_SEPARATOR) {
            Some((context, rest)) => (Some(context), rest),
            None => (None, self.0.as_str()),
        };
        let (original, plural) = match rest.split_once(PLURAL_SEPARATOR) {
            Some((original, plural)) => (original, Some(plural)),
            None => (rest, None),
        };
        (original, plural, context)
    }

    /// Printable form with control separators and whitespace escaped.
    ///
    /// Used wherever a key has to fit on one line (TSV output, terminal reports).
    pub fn escaped(&self) -> String {
        escape_message(&self.0)
    }
}

impl fmt::Display for CatalogKey {
    /// Human readable form: `context|original|plural`, omitting absent parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (original, plural, context) = self.parts();
        if let Some(context) = context {
            write!(f, "{}|", context)?;
        }
        write!(f, "{}", original)?;
        if let Some(plural) = plural {
            write!(f, "|{}", plural)?;
        }
        Ok(())
    }
}

/// Escape a message so it can be written on a single line.
pub fn escape_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            PLURAL_SEPARATOR => out.push_str("\\x00"),
            CONTEXT_SEPARATOR => out.push_str("\\x04"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}
