//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the audit to AI assistants as read-only tools.
//!
//! ## Module Structure
//!
//! - `helpers`: Context construction, pagination and result encoding
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod helpers;
mod server;
pub mod types;

pub use server::{TransauditMcpServer, run_server};
