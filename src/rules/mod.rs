//! Reconciliation rules.
//!
//! Pure functions over catalogs: each takes only the catalogs it compares and
//! returns issues in the order of the catalog it walks.
//!
//! ## Module Structure
//!
//! - `missing`: source strings without a loaded translation
//! - `unused`: module translations no longer used in source code
//! - `stats`: catalog sizes

pub mod missing;
pub mod stats;
pub mod unused;

pub use missing::check_missing_translations;
pub use stats::{TranslationStats, compute_stats};
pub use unused::{check_unloaded_module_translations, check_unused_translations};
