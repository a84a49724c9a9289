//! MCP server: JSON-RPC dispatch plus the stdio and HTTP transports

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    adapter::{tool_catalog, ToolAdapter},
    jsonrpc::{
        error_response, success_response, JsonRpcRequest, JsonRpcResponse, INVALID_REQUEST,
        JSONRPC_VERSION, PARSE_ERROR,
    },
    mcp::{
        negotiate_protocol_version, Implementation, InitializeRequest, InitializeResponse,
        ServerCapabilities, ToolsCallRequest, ToolsCapability, ToolsListRequest,
        ToolsListResponse, METHOD_INITIALIZE, METHOD_PING, METHOD_TOOLS_CALL, METHOD_TOOLS_LIST,
        SERVER_INSTRUCTIONS, SERVER_NAME, SERVER_TITLE,
    },
    AppState, McpError, McpResult,
};

/// MCP Server
pub struct McpServer {
    adapter: ToolAdapter,
}

impl McpServer {
    pub fn new(app_state: AppState) -> Self {
        Self {
            adapter: ToolAdapter::new(app_state),
        }
    }

    /// Process a single JSON-RPC message.
    ///
    /// Returns `None` for notifications. Every other message, including
    /// malformed ones, gets a response.
    pub async fn process_message(&self, body: &[u8]) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to parse JSON-RPC message: {}", e);
                return Some(error_response(
                    None,
                    McpError::Parse(e.to_string()).to_jsonrpc_error(),
                ));
            }
        };

        // MCP doesn't support batch
        if value.is_array() {
            warn!("Batch requests are not supported");
            return Some(error_response(
                None,
                McpError::InvalidRequest("Batch requests are not supported".to_string())
                    .to_jsonrpc_error(),
            ));
        }

        // An explicit null id is not a notification; its sender expects a reply.
        if value.get("id").is_some_and(Value::is_null) {
            return Some(error_response(
                None,
                McpError::InvalidRequest("Request id must be a string or number".to_string())
                    .to_jsonrpc_error(),
            ));
        }

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(error_response(
                    None,
                    McpError::InvalidRequest(e.to_string()).to_jsonrpc_error(),
                ))
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(error_response(
                request.id,
                McpError::InvalidRequest("Invalid JSON-RPC version".to_string())
                    .to_jsonrpc_error(),
            ));
        }

        if request.is_notification() {
            debug!("Received notification {}, ignoring", request.method);
            return None;
        }

        debug!("Processing method: {}", request.method);

        let outcome = match request.method.as_str() {
            METHOD_INITIALIZE => self.handle_initialize(&request),
            METHOD_PING => Ok(json!({})),
            METHOD_TOOLS_LIST => self.handle_tools_list(&request),
            METHOD_TOOLS_CALL => self.handle_tools_call(&request).await,
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        Some(match outcome {
            Ok(result) => success_response(request.id, result),
            Err(e) => {
                warn!("{} failed: {}", request.method, e);
                error_response(request.id, e.to_jsonrpc_error())
            }
        })
    }

    fn handle_initialize(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.clone().ok_or_else(|| {
            McpError::InvalidArguments("Missing params for initialize".to_string())
        })?;
        let init: InitializeRequest = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidArguments(e.to_string()))?;

        info!(
            client = %init.client_info.name,
            requested = %init.protocol_version,
            "initialize"
        );

        let response = InitializeResponse {
            protocol_version: negotiate_protocol_version(&init.protocol_version).to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some(SERVER_TITLE.to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        };

        Ok(serde_json::to_value(response)?)
    }

    fn handle_tools_list(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        // The catalog is static and fits in one page, so the cursor is ignored.
        let _params: ToolsListRequest = match &request.params {
            Some(params) => serde_json::from_value(params.clone())
                .map_err(|e| McpError::InvalidArguments(e.to_string()))?,
            None => ToolsListRequest::default(),
        };

        let response = ToolsListResponse {
            tools: tool_catalog(),
            next_cursor: None,
        };
        Ok(serde_json::to_value(response)?)
    }

    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.clone().ok_or_else(|| {
            McpError::InvalidArguments("Missing params for tools/call".to_string())
        })?;
        let call: ToolsCallRequest = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidArguments(e.to_string()))?;

        debug!("Calling tool: {}", call.name);

        let result = self
            .adapter
            .call_tool(&call.name, call.arguments.as_ref())
            .await?;
        Ok(serde_json::to_value(result)?)
    }
}

/// Serve MCP over stdio
pub async fn serve_stdio(app_state: AppState) -> McpResult<()> {
    info!("Starting AnySite MCP server (stdio mode)");
    let server = Arc::new(McpServer::new(app_state));
    serve_lines(server, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve newline-delimited JSON-RPC from `reader` to `writer`.
///
/// Each message runs on its own task so a slow upstream call never holds up
/// other requests; a single writer task serializes the responses. Returns
/// once `reader` hits EOF and every in-flight request has been answered.
pub async fn serve_lines<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> McpResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let writer_task = tokio::spawn(async move {
        let mut writer = writer;
        while let Some(line) = rx.recv().await {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok::<(), std::io::Error>(())
    });

    // Frames are read as raw bytes: an undecodable line gets a parse error
    // response instead of ending the session.
    let mut reader = BufReader::new(reader);
    let mut frame = Vec::new();
    loop {
        frame.clear();
        if reader.read_until(b'\n', &mut frame).await? == 0 {
            break;
        }
        let message = trim_frame(&frame);
        if message.is_empty() {
            continue;
        }
        debug!("Processing line: {}", String::from_utf8_lossy(message));

        let server = Arc::clone(&server);
        let tx = tx.clone();
        let message = message.to_vec();
        tokio::spawn(async move {
            let Some(response) = server.process_message(&message).await else {
                return;
            };
            match serde_json::to_string(&response) {
                Ok(json) => {
                    if tx.send(json).is_err() {
                        error!("stdout writer closed, dropping response");
                    }
                }
                Err(e) => error!("Failed to serialize response: {}", e),
            }
        });
    }

    // The writer drains until the last request task drops its sender.
    drop(tx);
    writer_task
        .await
        .map_err(|e| McpError::Internal(format!("stdout writer task failed: {}", e)))??;

    info!("MCP server stopped");
    Ok(())
}

fn trim_frame(frame: &[u8]) -> &[u8] {
    let start = frame
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(frame.len());
    let end = frame
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &frame[start..end]
}

/// Build the HTTP MCP router (`POST /mcp`)
pub fn router(app_state: AppState) -> axum::Router {
    use axum::routing::post;

    let server = Arc::new(McpServer::new(app_state));
    axum::Router::new()
        .route("/mcp", post(http::handle_mcp_request))
        .with_state(server)
}

/// Serve MCP over HTTP
pub async fn serve_http(app_state: AppState, addr: &str) -> McpResult<()> {
    info!("Starting AnySite MCP server (HTTP mode) on {}", addr);

    let app = router(app_state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| McpError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("HTTP MCP server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| McpError::Internal(format!("HTTP server error: {}", e)))?;

    Ok(())
}

mod http {
    use super::*;
    use crate::mcp::{
        HEADER_PROTOCOL_VERSION, HEADER_SESSION_ID, LATEST_PROTOCOL_VERSION,
        SUPPORTED_PROTOCOL_VERSIONS,
    };
    use axum::{
        body::Bytes,
        extract::State,
        http::{HeaderMap, HeaderValue, StatusCode},
        response::{IntoResponse, Json, Response},
    };
    use uuid::Uuid;

    pub(super) async fn handle_mcp_request(
        State(server): State<Arc<McpServer>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        // Validate MCP protocol version
        if let Some(protocol_version) = headers.get(HEADER_PROTOCOL_VERSION) {
            let version_str = protocol_version.to_str().unwrap_or("");
            if !SUPPORTED_PROTOCOL_VERSIONS.contains(&version_str) {
                warn!("Unsupported MCP protocol version: {}", version_str);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Unsupported MCP protocol version",
                        "supported_versions": SUPPORTED_PROTOCOL_VERSIONS
                    })),
                )
                    .into_response();
            }
        }

        let mut response_headers = HeaderMap::new();
        response_headers.insert(
            HEADER_PROTOCOL_VERSION,
            HeaderValue::from_static(LATEST_PROTOCOL_VERSION),
        );
        let session = headers
            .get(HEADER_SESSION_ID)
            .cloned()
            .or_else(|| HeaderValue::from_str(&Uuid::new_v4().to_string()).ok());
        if let Some(session) = session {
            response_headers.insert(HEADER_SESSION_ID, session);
        }

        match server.process_message(&body).await {
            Some(response) => {
                let status = match response.error.as_ref().map(|e| e.code) {
                    Some(PARSE_ERROR) | Some(INVALID_REQUEST) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::OK,
                };
                (status, response_headers, Json(response)).into_response()
            }
            // Notification - no response body
            None => (StatusCode::ACCEPTED, response_headers).into_response(),
        }
    }
}
