//! HTTP dispatcher for the AnySite REST API

use std::error::Error as _;
use std::time::{Duration, Instant};

use anysite_core::{DispatchError, HttpMethod, Upstream, UpstreamRequest};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ConnectorResult;
use crate::http::url_builder::UrlBuilder;

pub const ACCESS_TOKEN_HEADER: &str = "access-token";
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`HttpExecutor`]
#[derive(Clone)]
pub struct HttpExecutorConfig {
    pub base_url: String,
    pub access_token: String,
    pub connect_timeout: Duration,
    /// Total per-request timeout. Scraping calls can legitimately run for
    /// many minutes, so there is none by default.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl HttpExecutorConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
            user_agent: format!("anysite-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Sends normalized requests with the access-token header and maps the
/// response status and body onto a JSON value or a [`DispatchError`].
pub struct HttpExecutor {
    client: Client,
    base_url: String,
    access_token: String,
}

impl HttpExecutor {
    pub fn new(config: HttpExecutorConfig) -> ConnectorResult<Self> {
        UrlBuilder::validate_base_url(&config.base_url)?;

        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url,
            access_token: config.access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: &UpstreamRequest) -> Result<Value, DispatchError> {
        let url = UrlBuilder::join(&self.base_url, request.path)
            .map_err(|e| DispatchError::InvalidRequest(e.to_string()))?;
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let fields = payload_fields(&request.body);
        debug!("{} {} fields=[{}]", request.method.as_str(), url, fields);

        let mut builder = self
            .client
            .request(method, &url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&request.body);
        if let Some(account_id) = &request.account_id {
            builder = builder.header(ACCOUNT_ID_HEADER, account_id);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DispatchError::Transport(describe(&e)))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| DispatchError::Transport(describe(&e)))?;

        interpret_response(status.as_u16(), status.canonical_reason(), body_text)
    }
}

#[async_trait]
impl Upstream for HttpExecutor {
    async fn send(&self, request: UpstreamRequest) -> Result<Value, DispatchError> {
        let start_time = Instant::now();
        let result = self.execute(&request).await;
        let elapsed_ms = start_time.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => info!(
                operation = request.operation,
                elapsed_ms, "upstream request completed"
            ),
            Err(e) => warn!(
                operation = request.operation,
                elapsed_ms,
                error = %e,
                "upstream request failed"
            ),
        }
        result
    }
}

/// Map a status and raw body onto the dispatcher result.
///
/// 2xx bodies must be JSON. Other statuses report the body's `message`
/// field, else the body itself, else the reason phrase.
fn interpret_response(
    status: u16,
    reason: Option<&str>,
    body_text: String,
) -> Result<Value, DispatchError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(&body_text)
            .map_err(|_| DispatchError::ResponseParse { raw: body_text });
    }

    let message = match serde_json::from_str::<Value>(&body_text) {
        Ok(Value::Object(map)) => match map.get("message") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            _ => Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) if !body_text.trim().is_empty() => body_text.trim().to_string(),
        Err(_) => reason.unwrap_or("unknown error").to_string(),
    };

    Err(DispatchError::UpstreamApi { status, message })
}

/// Payload keys only. Values carry message text and account ids.
fn payload_fields(body: &Map<String, Value>) -> String {
    body.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn describe(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_is_parsed() {
        let value = interpret_response(200, Some("OK"), r#"{"name":"Satya Nadella"}"#.into())
            .unwrap();
        assert_eq!(value, json!({"name": "Satya Nadella"}));
    }

    #[test]
    fn success_with_invalid_json_keeps_raw_text() {
        let err = interpret_response(200, Some("OK"), "<html>oops</html>".into()).unwrap_err();
        assert_eq!(
            err,
            DispatchError::ResponseParse {
                raw: "<html>oops</html>".into()
            }
        );
    }

    #[test]
    fn error_prefers_message_field() {
        let err = interpret_response(
            404,
            Some("Not Found"),
            r#"{"message":"not found","code":12}"#.into(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DispatchError::UpstreamApi {
                status: 404,
                message: "not found".into()
            }
        );
    }

    #[test]
    fn error_without_message_uses_body_then_reason() {
        let err = interpret_response(422, None, r#"{"detail":"bad"}"#.into()).unwrap_err();
        assert_eq!(
            err,
            DispatchError::UpstreamApi {
                status: 422,
                message: r#"{"detail":"bad"}"#.into()
            }
        );

        let err = interpret_response(502, Some("Bad Gateway"), "upstream down".into())
            .unwrap_err();
        assert!(err.to_string().contains("upstream down"));

        let err = interpret_response(503, Some("Service Unavailable"), String::new())
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::UpstreamApi {
                status: 503,
                message: "Service Unavailable".into()
            }
        );
    }

    #[test]
    fn payload_log_lists_keys_without_values() {
        let body = json!({"text": "private message", "user": "fsd_profile:ACoAA1", "account_id": "acc-1"});
        let fields = payload_fields(body.as_object().unwrap());
        assert_eq!(fields, "text, user, account_id");
        assert!(!fields.contains("private message"));
        assert!(!fields.contains("acc-1"));
    }

    #[test]
    fn invalid_base_url_rejected() {
        assert!(HttpExecutor::new(HttpExecutorConfig::new("nope", "t")).is_err());
    }
}
