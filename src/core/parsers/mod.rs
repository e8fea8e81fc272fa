//! File parsers for source code and translation catalogs.
//!
//! - `php`: tree-sitter PHP parsing used for source extraction
//! - `php_array`: `return [...]` translation files
//! - `po` / `mo`: gettext catalogs
//! - `catalog`: format detection plus JSON and CSV catalogs

pub mod catalog;
pub mod mo;
pub mod php;
pub mod php_array;
pub mod po;

pub use catalog::{CatalogFormat, read_catalog};
