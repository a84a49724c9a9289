use std::sync::Arc;

use anysite_connectors::{HttpExecutor, HttpExecutorConfig};
use anysite_core::Credentials;
use anysite_mcp::{router, serve_lines, AppState, McpServer};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tower::ServiceExt;

fn state_for(upstream: &MockServer, account_id: Option<&str>) -> AppState {
    let executor =
        HttpExecutor::new(HttpExecutorConfig::new(upstream.base_url(), "test-token")).unwrap();
    AppState::new(
        executor,
        Credentials::new("test-token", account_id.map(str::to_string)),
    )
}

async fn rpc(server: &McpServer, message: Value) -> Value {
    let response = server
        .process_message(message.to_string().as_bytes())
        .await
        .expect("request should produce a response");
    serde_json::to_value(response).unwrap()
}

async fn call_tool(server: &McpServer, name: &str, arguments: Value) -> Value {
    let response = rpc(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        }),
    )
    .await;
    assert!(response.get("error").is_none(), "{response}");
    response["result"].clone()
}

#[tokio::test]
async fn initialize_negotiates_protocol_version() {
    let upstream = MockServer::start_async().await;
    let server = McpServer::new(state_for(&upstream, None));

    let response = rpc(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": "init",
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "0.0.1"}
            }
        }),
    )
    .await;
    assert_eq!(response["id"], "init");
    assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(response["result"]["serverInfo"]["name"], "anysite-mcp");
    assert!(response["result"]["capabilities"]["tools"].is_object());

    let response = rpc(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "initialize",
            "params": {
                "protocolVersion": "1999-01-01",
                "clientInfo": {"name": "old-client", "version": "0.0.1"}
            }
        }),
    )
    .await;
    assert_eq!(response["result"]["protocolVersion"], "2025-06-18");
}

#[tokio::test]
async fn tools_list_exposes_every_operation() {
    let upstream = MockServer::start_async().await;
    let server = McpServer::new(state_for(&upstream, None));

    let response = rpc(
        &server,
        json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
    )
    .await;
    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 47);

    let google = tools
        .iter()
        .find(|t| t["name"] == "google_search")
        .unwrap();
    assert_eq!(google["inputSchema"]["type"], "object");
    assert_eq!(google["inputSchema"]["required"], json!(["query"]));
    assert_eq!(
        google["inputSchema"]["properties"]["count"]["default"],
        json!(10)
    );
}

#[tokio::test]
async fn profile_lookup_returns_pretty_json() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/linkedin/user")
                .header("access-token", "test-token")
                .json_body(json!({
                    "timeout": 300,
                    "user": "satyanadella",
                    "with_experience": true,
                    "with_education": true,
                    "with_skills": true
                }));
            then.status(200).json_body(json!({"name": "Satya Nadella"}));
        })
        .await;
    let server = McpServer::new(state_for(&upstream, None));

    let result = call_tool(&server, "get_linkedin_profile", json!({"user": "satyanadella"})).await;

    mock.assert_async().await;
    assert_eq!(
        result,
        json!({"content": [{"type": "text", "text": "{\n  \"name\": \"Satya Nadella\"\n}"}]})
    );
}

#[tokio::test]
async fn upstream_failure_becomes_error_result() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/linkedin/user");
            then.status(404).json_body(json!({"message": "not found"}));
        })
        .await;
    let server = McpServer::new(state_for(&upstream, None));

    let result = call_tool(&server, "get_linkedin_profile", json!({"user": "nobody"})).await;

    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("404"), "{text}");
    assert!(text.contains("not found"), "{text}");
    assert!(text.starts_with("LinkedIn API error:"), "{text}");
}

#[tokio::test]
async fn invalid_arguments_never_reach_upstream() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!([]));
        })
        .await;
    let server = McpServer::new(state_for(&upstream, None));

    let rejected = call_tool(
        &server,
        "get_linkedin_google_company",
        json!({"keywords": ["anysite"], "count_per_keyword": 11}),
    )
    .await;
    assert_eq!(rejected["isError"], true);
    let text = rejected["content"][0]["text"].as_str().unwrap();
    assert!(
        text.starts_with("Invalid arguments for 'get_linkedin_google_company'"),
        "{text}"
    );
    assert!(text.contains("count_per_keyword"), "{text}");

    let missing = call_tool(&server, "get_linkedin_profile", json!({})).await;
    assert_eq!(missing["isError"], true);

    assert_eq!(mock.hits_async().await, 0);

    let accepted = call_tool(
        &server,
        "get_linkedin_google_company",
        json!({"keywords": ["anysite"], "count_per_keyword": 10}),
    )
    .await;
    assert!(accepted.get("isError").is_none(), "{accepted}");
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn google_count_is_clamped_not_rejected() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/google/search")
                .json_body_partial(r#"{"query": "python fastapi", "count": 20}"#);
            then.status(200).json_body(json!([]));
        })
        .await;
    let server = McpServer::new(state_for(&upstream, None));

    let result = call_tool(
        &server,
        "google_search",
        json!({"query": "python fastapi", "count": 50}),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(result["content"][0]["text"], "[]");
}

#[tokio::test]
async fn comment_urn_is_sent_as_typed_reference() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/linkedin/management/post/comment")
                .header("x-account-id", "acc-42")
                .json_body(json!({
                    "text": "Nice!",
                    "urn": {"type": "activity", "value": "123"},
                    "timeout": 300,
                    "account_id": "acc-42"
                }));
            then.status(200).json_body(json!({"id": "comment-1"}));
        })
        .await;
    let server = McpServer::new(state_for(&upstream, Some("acc-42")));

    let result = call_tool(
        &server,
        "send_linkedin_post_comment",
        json!({"text": "Nice!", "urn": "activity:123"}),
    )
    .await;

    mock.assert_async().await;
    assert!(result.get("isError").is_none(), "{result}");
}

#[tokio::test]
async fn unknown_tool_is_a_protocol_error() {
    let upstream = MockServer::start_async().await;
    let server = McpServer::new(state_for(&upstream, None));

    let response = rpc(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": {"name": "does_not_exist", "arguments": {}}
        }),
    )
    .await;

    assert!(response.get("result").is_none());
    assert_eq!(response["id"], 9);
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Unknown tool: does_not_exist");
}

#[tokio::test]
async fn framing_errors() {
    let upstream = MockServer::start_async().await;
    let server = McpServer::new(state_for(&upstream, None));

    let parse = serde_json::to_value(server.process_message(b"{not json").await.unwrap()).unwrap();
    assert_eq!(parse["error"]["code"], -32700);
    assert_eq!(parse["id"], Value::Null);

    let batch = rpc(
        &server,
        json!([{"jsonrpc": "2.0", "id": 1, "method": "ping"}]),
    )
    .await;
    assert_eq!(batch["error"]["code"], -32600);

    let unknown = rpc(
        &server,
        json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"}),
    )
    .await;
    assert_eq!(unknown["error"]["code"], -32601);

    let ping = rpc(&server, json!({"jsonrpc": "2.0", "id": 4, "method": "ping"})).await;
    assert_eq!(ping["result"], json!({}));

    let notification = server
        .process_message(br#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;
    assert!(notification.is_none());

    let null_id = rpc(
        &server,
        json!({"jsonrpc": "2.0", "id": null, "method": "ping"}),
    )
    .await;
    assert_eq!(null_id["error"]["code"], -32600);
    assert_eq!(null_id["id"], Value::Null);
}

#[tokio::test]
async fn stdio_answers_each_line() {
    let upstream = MockServer::start_async().await;
    let server = Arc::new(McpServer::new(state_for(&upstream, None)));

    let (mut client_in, server_in) = tokio::io::duplex(4096);
    let (server_out, client_out) = tokio::io::duplex(4096);

    let serving = tokio::spawn(serve_lines(server, server_in, server_out));

    client_in
        .write_all(
            b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n\n\
              {\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n\
              {\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/list\"}\n",
        )
        .await
        .unwrap();
    drop(client_in);

    // read until the writer closes; responses larger than the pipe buffer
    // only drain while we read
    let mut lines = BufReader::new(client_out).lines();
    let mut ids = Vec::new();
    while let Some(line) = lines.next_line().await.unwrap() {
        let response: Value = serde_json::from_str(&line).unwrap();
        ids.push(response["id"].as_i64().unwrap());
    }
    serving.await.unwrap().unwrap();

    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn stdio_survives_undecodable_line() {
    let upstream = MockServer::start_async().await;
    let server = Arc::new(McpServer::new(state_for(&upstream, None)));

    let (mut client_in, server_in) = tokio::io::duplex(4096);
    let (server_out, client_out) = tokio::io::duplex(4096);

    let serving = tokio::spawn(serve_lines(server, server_in, server_out));

    client_in
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
        .await
        .unwrap();
    client_in.write_all(b"\xff\xfe garbage\n").await.unwrap();
    client_in
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n")
        .await
        .unwrap();
    drop(client_in);

    let mut lines = BufReader::new(client_out).lines();
    let mut ids = Vec::new();
    let mut parse_errors = 0;
    while let Some(line) = lines.next_line().await.unwrap() {
        let response: Value = serde_json::from_str(&line).unwrap();
        if response["error"]["code"] == -32700 {
            assert_eq!(response["id"], Value::Null);
            parse_errors += 1;
        } else {
            ids.push(response["id"].as_i64().unwrap());
        }
    }
    serving.await.unwrap().unwrap();

    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(parse_errors, 1);
}

#[tokio::test]
async fn http_transport_round_trip() {
    let upstream = MockServer::start_async().await;
    let app = router(state_for(&upstream, None));

    let response = app
        .clone()
        .oneshot(
            Request::post("/mcp")
                .header("content-type", "application/json")
                .header("mcp-protocol-version", "2025-06-18")
                .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("mcp-session-id"));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["result"], json!({}));

    let rejected = app
        .clone()
        .oneshot(
            Request::post("/mcp")
                .header("mcp-protocol-version", "1999-01-01")
                .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let notification = app
        .oneshot(
            Request::post("/mcp")
                .body(Body::from(
                    r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(notification.status(), StatusCode::ACCEPTED);
}
