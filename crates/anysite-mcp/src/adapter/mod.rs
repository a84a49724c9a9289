//! Bridges MCP tool calls onto the AnySite operation pipeline

use anysite_core::{execute, operations, OperationSpec};
use serde_json::Value;
use tracing::{debug, warn};

use crate::mcp::{Tool, ToolAnnotations, ToolInputSchema, ToolsCallResponse};
use crate::{AppState, McpError, McpResult};

/// One MCP tool per operation, in catalog order.
pub fn tool_catalog() -> Vec<Tool> {
    operations().iter().map(tool_for).collect()
}

fn tool_for(spec: &OperationSpec) -> Tool {
    let schema = spec.input_schema();
    let required: Vec<String> = spec
        .params
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name.to_string())
        .collect();

    Tool {
        name: spec.name.to_string(),
        title: None,
        description: Some(spec.description.to_string()),
        input_schema: ToolInputSchema {
            r#type: "object".into(),
            properties: schema.get("properties").cloned(),
            required: (!required.is_empty()).then_some(required),
        },
        annotations: Some(ToolAnnotations {
            title: None,
            read_only_hint: Some(!spec.management),
            destructive_hint: Some(false),
            idempotent_hint: Some(!spec.management),
            open_world_hint: Some(true),
        }),
    }
}

/// Runs tool calls and formats their outcome as a tool result
#[derive(Clone)]
pub struct ToolAdapter {
    state: AppState,
}

impl ToolAdapter {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Invoke tool `name`.
    ///
    /// Success yields the pretty-printed upstream body. Validation and
    /// upstream failures yield an `isError` result; only an unknown tool is
    /// an `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<&Value>,
    ) -> McpResult<ToolsCallResponse> {
        let outcome = execute(
            self.state.upstream.as_ref(),
            &self.state.credentials,
            name,
            arguments,
        )
        .await;

        match outcome {
            Ok(body) => {
                debug!(tool = name, "tool call succeeded");
                Ok(ToolsCallResponse::success(serde_json::to_string_pretty(&body)?))
            }
            Err(e) if e.is_protocol_error() => Err(McpError::ToolNotFound(e.to_string())),
            Err(e) => {
                warn!(tool = name, error = %e, "tool call failed");
                Ok(ToolsCallResponse::error(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anysite_core::{Credentials, DispatchError, Upstream, UpstreamRequest};
    use async_trait::async_trait;
    use serde_json::json;

    struct Canned(Result<Value, DispatchError>);

    #[async_trait]
    impl Upstream for Canned {
        async fn send(&self, _request: UpstreamRequest) -> Result<Value, DispatchError> {
            self.0.clone()
        }
    }

    fn adapter(reply: Result<Value, DispatchError>) -> ToolAdapter {
        ToolAdapter::new(AppState::new(Canned(reply), Credentials::new("t", None)))
    }

    #[test]
    fn catalog_mirrors_operations() {
        let tools = tool_catalog();
        assert_eq!(tools.len(), operations().len());

        let profile = tools
            .iter()
            .find(|t| t.name == "get_linkedin_profile")
            .unwrap();
        assert_eq!(profile.input_schema.required, Some(vec!["user".to_string()]));
        assert_eq!(
            profile.annotations.as_ref().unwrap().read_only_hint,
            Some(true)
        );

        let post = tools
            .iter()
            .find(|t| t.name == "send_linkedin_post")
            .unwrap();
        assert_eq!(post.annotations.as_ref().unwrap().read_only_hint, Some(false));
    }

    #[tokio::test]
    async fn success_is_pretty_json() {
        let result = adapter(Ok(json!({"name": "Satya Nadella"})))
            .call_tool("get_linkedin_profile", Some(&json!({"user": "satyanadella"})))
            .await
            .unwrap();
        assert!(!result.is_error());
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].text(), "{\n  \"name\": \"Satya Nadella\"\n}");
    }

    #[tokio::test]
    async fn validation_and_upstream_failures_are_distinguishable() {
        let invalid = adapter(Ok(json!({})))
            .call_tool("get_linkedin_profile", Some(&json!({})))
            .await
            .unwrap();
        assert!(invalid.is_error());
        assert!(invalid.content[0]
            .text()
            .starts_with("Invalid arguments for 'get_linkedin_profile'"));

        let failed = adapter(Err(DispatchError::Transport("connection refused".into())))
            .call_tool("get_linkedin_profile", Some(&json!({"user": "x"})))
            .await
            .unwrap();
        assert!(failed.is_error());
        assert!(failed.content[0].text().starts_with("LinkedIn API error:"));
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let err = adapter(Ok(json!({})))
            .call_tool("does_not_exist", None)
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::ToolNotFound(ref m) if m == "Unknown tool: does_not_exist"));
    }
}
