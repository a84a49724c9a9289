//! AnySite MCP (Model Context Protocol) Server
//!
//! Exposes every AnySite operation as an MCP tool, over newline-delimited
//! stdio or over HTTP (`POST /mcp`).

pub mod adapter;
pub mod app_state;
pub mod error;
pub mod jsonrpc;
pub mod mcp;
pub mod server;

// Re-export key types
pub use adapter::{tool_catalog, ToolAdapter};
pub use app_state::AppState;
pub use error::{McpError, McpResult};
pub use server::McpServer;

pub use server::{router, serve_http, serve_lines, serve_stdio};
