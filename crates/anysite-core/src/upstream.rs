//! Seam between the invocation pipeline and the HTTP transport

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::DispatchError;
use crate::schema::HttpMethod;

/// Fully normalized request, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub operation: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub body: Map<String, Value>,
    /// Set for management operations when an account id is configured.
    pub account_id: Option<String>,
}

/// Sends one normalized request to the upstream API.
///
/// Implementations return the parsed JSON body of a 2xx response and never
/// retry.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<Value, DispatchError>;
}
