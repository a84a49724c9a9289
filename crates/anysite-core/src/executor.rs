//! The generic validate, normalize, dispatch pipeline

use serde_json::{Map, Value};
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{InvocationError, ValidationError};
use crate::normalize::normalize;
use crate::operations::find_operation;
use crate::schema::OperationSpec;
use crate::upstream::{Upstream, UpstreamRequest};
use crate::validate::{json_type_name, validate};

/// Validate and normalize `arguments` for `spec`.
///
/// Missing arguments are treated as an empty object.
pub fn prepare(
    spec: &'static OperationSpec,
    arguments: Option<&Value>,
    credentials: &Credentials,
) -> Result<UpstreamRequest, ValidationError> {
    let empty = Map::new();
    let args = match arguments {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(ValidationError::ArgumentsNotObject {
                actual: json_type_name(other).to_string(),
            })
        }
    };

    validate(spec, args)?;
    let body = normalize(spec, args, credentials)?;

    Ok(UpstreamRequest {
        operation: spec.name,
        path: spec.path,
        method: spec.method,
        body,
        account_id: if spec.management {
            credentials.account_id().map(str::to_string)
        } else {
            None
        },
    })
}

/// Run operation `name` end to end and return the upstream JSON body.
///
/// No request is sent unless validation and normalization both succeed.
pub async fn execute(
    upstream: &dyn Upstream,
    credentials: &Credentials,
    name: &str,
    arguments: Option<&Value>,
) -> Result<Value, InvocationError> {
    let spec =
        find_operation(name).ok_or_else(|| InvocationError::UnknownOperation(name.to_string()))?;

    let request =
        prepare(spec, arguments, credentials).map_err(|source| InvocationError::Validation {
            operation: spec.name.to_string(),
            source,
        })?;

    debug!(operation = spec.name, path = spec.path, "dispatching");

    upstream
        .send(request)
        .await
        .map_err(|source| InvocationError::Dispatch {
            label: spec.error_label,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingUpstream {
        calls: AtomicUsize,
        last: Mutex<Option<UpstreamRequest>>,
    }

    #[async_trait]
    impl Upstream for RecordingUpstream {
        async fn send(&self, request: UpstreamRequest) -> Result<Value, DispatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request);
            Ok(json!({"ok": true}))
        }
    }

    struct FailingUpstream;

    #[async_trait]
    impl Upstream for FailingUpstream {
        async fn send(&self, _request: UpstreamRequest) -> Result<Value, DispatchError> {
            Err(DispatchError::UpstreamApi {
                status: 404,
                message: "not found".into(),
            })
        }
    }

    #[tokio::test]
    async fn invalid_arguments_never_dispatch() {
        let upstream = RecordingUpstream::default();
        let creds = Credentials::new("t", None);

        let err = execute(&upstream, &creds, "get_linkedin_profile", Some(&json!({})))
            .await
            .unwrap_err();

        assert!(matches!(err, InvocationError::Validation { .. }));
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_operation_is_distinct() {
        let upstream = RecordingUpstream::default();
        let creds = Credentials::new("t", None);

        let err = execute(&upstream, &creds, "does_not_exist", None)
            .await
            .unwrap_err();

        assert_eq!(err, InvocationError::UnknownOperation("does_not_exist".into()));
        assert!(err.is_protocol_error());
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_object_arguments_rejected() {
        let upstream = RecordingUpstream::default();
        let creds = Credentials::new("t", None);

        let err = execute(&upstream, &creds, "get_twitter_user", Some(&json!("jack")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[tokio::test]
    async fn management_request_carries_account_id() {
        let upstream = RecordingUpstream::default();
        let creds = Credentials::new("t", Some("acc-7".into()));

        execute(
            &upstream,
            &creds,
            "send_linkedin_connection",
            Some(&json!({"user": "ACoAAB"})),
        )
        .await
        .unwrap();

        let request = upstream.last.lock().unwrap().clone().unwrap();
        assert_eq!(request.path, "/api/linkedin/management/user/connection");
        assert_eq!(request.account_id.as_deref(), Some("acc-7"));
        assert_eq!(request.body["user"], json!("fsd_profile:ACoAAB"));
        assert_eq!(request.body["account_id"], json!("acc-7"));
    }

    #[tokio::test]
    async fn dispatch_errors_are_labelled() {
        let creds = Credentials::new("t", None);
        let err = execute(
            &FailingUpstream,
            &creds,
            "get_linkedin_company",
            Some(&json!({"company": "anysite"})),
        )
        .await
        .unwrap_err();

        let text = err.to_string();
        assert!(text.starts_with("LinkedIn company API error"));
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }
}
