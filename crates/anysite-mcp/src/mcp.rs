//! MCP (Model Context Protocol) types and constants

pub use anysite_mcp_types::{
    CallToolRequestParams as ToolsCallRequest, CallToolResult as ToolsCallResponse,
    ClientCapabilities, ContentBlock, Implementation,
    InitializeRequestParams as InitializeRequest, InitializeResult as InitializeResponse,
    ListToolsRequestParams as ToolsListRequest, ListToolsResult as ToolsListResponse,
    ServerCapabilities, ServerCapabilitiesTools as ToolsCapability, TextContent, Tool,
    ToolAnnotations, ToolInputSchema,
};

// MCP Protocol Versions
pub const PROTOCOL_VERSION_2024_11_05: &str = "2024-11-05";
pub const PROTOCOL_VERSION_2025_03_26: &str = "2025-03-26";
pub const PROTOCOL_VERSION_2025_06_18: &str = "2025-06-18";
pub const LATEST_PROTOCOL_VERSION: &str = PROTOCOL_VERSION_2025_06_18;

pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &[
    PROTOCOL_VERSION_2024_11_05,
    PROTOCOL_VERSION_2025_03_26,
    PROTOCOL_VERSION_2025_06_18,
];

// MCP Method Names
pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_PING: &str = "ping";
pub const METHOD_TOOLS_LIST: &str = "tools/list";
pub const METHOD_TOOLS_CALL: &str = "tools/call";

// HTTP transport headers
pub const HEADER_PROTOCOL_VERSION: &str = "mcp-protocol-version";
pub const HEADER_SESSION_ID: &str = "mcp-session-id";

pub const SERVER_NAME: &str = "anysite-mcp";
pub const SERVER_TITLE: &str = "AnySite MCP";
pub const SERVER_INSTRUCTIONS: &str = "AnySite MCP Server - LinkedIn, Instagram, Reddit, Twitter/X, Google search and web parsing tools";

/// Echo the client's version when supported, otherwise offer the latest.
pub fn negotiate_protocol_version(requested: &str) -> &'static str {
    SUPPORTED_PROTOCOL_VERSIONS
        .iter()
        .copied()
        .find(|v| *v == requested)
        .unwrap_or(LATEST_PROTOCOL_VERSION)
}
