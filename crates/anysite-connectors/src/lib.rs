//! Upstream connectors for the AnySite MCP server

pub mod error;
pub mod http;

pub use error::{ConnectorError, ConnectorResult};
pub use http::{HttpExecutor, HttpExecutorConfig, UrlBuilder};
