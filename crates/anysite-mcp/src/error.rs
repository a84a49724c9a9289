//! Error handling for the MCP server

use crate::jsonrpc::{JsonRpcError, METHOD_NOT_FOUND};
use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Protocol-level failures. Tool failures are not errors here: they are
/// returned as results with `isError` set.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid params: {0}")]
    InvalidArguments(String),

    /// Carries the full client-facing text, e.g. `Unknown tool: foo`.
    #[error("{0}")]
    ToolNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        match self {
            McpError::Parse(msg) => {
                JsonRpcError::parse_error().with_data(serde_json::json!({ "message": msg }))
            }
            McpError::InvalidRequest(msg) => {
                JsonRpcError::invalid_request().with_data(serde_json::json!({ "message": msg }))
            }
            McpError::MethodNotFound(method) => {
                JsonRpcError::method_not_found().with_data(serde_json::json!({ "method": method }))
            }
            McpError::InvalidArguments(msg) => {
                JsonRpcError::invalid_params().with_data(serde_json::json!({ "message": msg }))
            }
            McpError::ToolNotFound(msg) => JsonRpcError::new(METHOD_NOT_FOUND, msg.clone()),
            _ => JsonRpcError::internal_error().with_data(serde_json::json!({
                "message": self.to_string()
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, PARSE_ERROR};

    #[test]
    fn unknown_tool_keeps_its_text() {
        let err = McpError::ToolNotFound("Unknown tool: does_not_exist".into()).to_jsonrpc_error();
        assert_eq!(err.code, METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: does_not_exist");
        assert!(err.data.is_none());
    }

    #[test]
    fn codes() {
        assert_eq!(McpError::Parse("x".into()).to_jsonrpc_error().code, PARSE_ERROR);
        assert_eq!(
            McpError::InvalidArguments("x".into()).to_jsonrpc_error().code,
            INVALID_PARAMS
        );
        assert_eq!(
            McpError::Internal("x".into()).to_jsonrpc_error().code,
            INTERNAL_ERROR
        );
    }
}
