//! Core data types shared by extraction, catalogs and rules.
//!
//! ## Module Structure
//!
//! - `entry`: TranslatableEntry and SourceReference
//! - `catalog`: Keyed catalogs (source, loaded, module)

pub mod catalog;
pub mod entry;

pub use catalog::{
    DomainCatalog, KeyedCatalog, LoadedCatalog, ModuleCatalog, ModuleTranslation, SourceCatalog,
    Translations, merge_domains,
};
pub use entry::{SourceReference, TranslatableEntry};
