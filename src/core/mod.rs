//! Core audit engine.
//!
//! ## Module Structure
//!
//! - `key`: catalog key normalization
//! - `data`: entries and catalogs
//! - `parsers`: PHP parsing and catalog file readers
//! - `file_scanner`: source file enumeration
//! - `extract`: translatable string extraction
//! - `host`: host collaborator traits and their filesystem implementations
//! - `source_paths`: domain to directory resolution
//! - `context`: memoized audit state for one run
//! - `language`: locale display names

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod host;
pub mod key;
pub mod language;
pub mod parsers;
pub mod source_paths;

pub use context::{AuditContext, SourceScan};
pub use data::{
    DomainCatalog, LoadedCatalog, ModuleCatalog, ModuleTranslation, SourceCatalog,
    SourceReference, TranslatableEntry, Translations,
};
pub use key::CatalogKey;
pub use source_paths::SourcePaths;
