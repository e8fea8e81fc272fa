//! transaudit - translation coverage auditor for webtrees modules
//!
//! transaudit is a CLI tool and library that scans the PHP sources of
//! first-party webtrees modules and packages for strings marked for
//! translation, then compares them with the catalog loaded for a locale and
//! with the translations the modules ship themselves.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine, catalogs and host collaborators
//! - `error`: Typed audit errors
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Reconciliation rules (missing, unused, statistics)
//! - `status`: Status of a project for one locale

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod status;
