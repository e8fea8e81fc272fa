use std::fmt;

use serde::Serialize;

use crate::core::key::CatalogKey;

/// A source location where a translatable string occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReference {
    /// Path relative to the reference root (absolute when outside of it).
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl SourceReference {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_path, self.line)
    }
}

/// One string marked for translation in source code.
///
/// Created by the extractor when a recognized call site is found. Occurrences
/// of the same key inside a domain are merged: references accumulate, metadata
/// is replaced by the most recently scanned occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableEntry {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Domain (module or package) the entry was extracted from.
    pub domain: String,
    pub references: Vec<SourceReference>,
    /// Translator comments (`I18N: ...`) attached to the call site.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl TranslatableEntry {
    /// Create an entry, returning `None` when `original` is empty.
    ///
    /// Empty plural or context strings are normalized to `None`.
    pub fn new(
        domain: impl Into<String>,
        original: impl Into<String>,
        plural: Option<String>,
        context: Option<String>,
    ) -> Option<Self> {
        let original = original.into();
        if original.is_empty() {
            return None;
        }
        Some(Self {
            original,
            plural: plural.filter(|p| !p.is_empty()),
            context: context.filter(|c| !c.is_empty()),
            domain: domain.into(),
            references: Vec::new(),
            comments: Vec::new(),
        })
    }

    pub fn key(&self) -> CatalogKey {
        CatalogKey::new(
            &self.original,
            self.plural.as_deref(),
            self.context.as_deref(),
        )
    }

    /// Add a reference unless the same location is already recorded.
    pub fn add_reference(&mut self, reference: SourceReference) {
        if !self.references.contains(&reference) {
            self.references.push(reference);
        }
    }

    /// Merge a later occurrence of the same string into this entry.
    ///
    /// References accumulate; non-empty incoming comments replace existing ones.
    pub fn merge(&mut self, incoming: TranslatableEntry) {
        for reference in incoming.references {
            self.add_reference(reference);
        }
        if !incoming.comments.is_empty() {
            self.comments = incoming.comments;
        }
    }

    /// References joined for single-line output (`a.php:3, b.php:10`).
    pub fn references_display(&self) -> String {
        self.references
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
