//! Error taxonomy for tool invocations

use thiserror::Error;

/// Result type for argument validation and normalization
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a set of arguments was rejected before any network call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("arguments must be a JSON object, got {actual}")]
    ArgumentsNotObject { actual: String },

    #[error("missing required field '{0}'")]
    MissingRequiredField(String),

    #[error("field '{0}' must not be empty")]
    BlankField(String),

    #[error("invalid type for field '{field}': expected {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("invalid value '{value}' for field '{field}', expected one of: {}", .valid_values.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },

    #[error("value {value} for field '{field}' is out of range ({constraint})")]
    ValueOutOfRange {
        field: String,
        value: String,
        constraint: String,
    },

    #[error("field '{0}' must be a non-empty array")]
    EmptyArray(String),

    #[error("field '{field}' must contain {}", quoted(.expected))]
    MissingNamespace { field: String, expected: Vec<String> },

    #[error("invalid URN format for '{field}': '{value}'. Must start with 'fsd_profile:'")]
    InvalidUrn { field: String, value: String },

    #[error("at least one of the following fields must be provided: {}", .fields.join(", "))]
    NoSearchFilter { fields: Vec<String> },
}

/// Failure while talking to the upstream REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("upstream returned HTTP {status}: {message}")]
    UpstreamApi { status: u16, message: String },

    #[error("failed to parse upstream response as JSON: {}", excerpt(.raw))]
    ResponseParse { raw: String },

    #[error("request to upstream failed: {0}")]
    Transport(String),

    #[error("invalid upstream request: {0}")]
    InvalidRequest(String),
}

/// Error surfaced by the invocation pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvocationError {
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments for '{operation}': {source}")]
    Validation {
        operation: String,
        #[source]
        source: ValidationError,
    },

    #[error("{label} API error: {source}")]
    Dispatch {
        label: &'static str,
        #[source]
        source: DispatchError,
    },
}

impl InvocationError {
    /// Unknown operations are reported at the protocol level, everything else
    /// becomes an error-shaped tool result.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, InvocationError::UnknownOperation(_))
    }
}

fn quoted(prefixes: &[String]) -> String {
    prefixes
        .iter()
        .map(|p| format!("'{p}'"))
        .collect::<Vec<_>>()
        .join(" or ")
}

const EXCERPT_LEN: usize = 200;

fn excerpt(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    match trimmed.char_indices().nth(EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_error_lists_valid_values() {
        let err = ValidationError::InvalidEnumValue {
            field: "sort".into(),
            value: "oldest".into(),
            valid_values: vec!["relevance".into(), "recent".into()],
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'oldest' for field 'sort', expected one of: relevance, recent"
        );
    }

    #[test]
    fn namespace_error_quotes_each_prefix() {
        let err = ValidationError::MissingNamespace {
            field: "urn".into(),
            expected: vec!["activity:".into(), "comment:".into()],
        };
        assert_eq!(
            err.to_string(),
            "field 'urn' must contain 'activity:' or 'comment:'"
        );
    }

    #[test]
    fn parse_error_truncates_long_bodies() {
        let err = DispatchError::ResponseParse { raw: "x".repeat(500) };
        let text = err.to_string();
        assert!(text.ends_with("..."));
        assert!(text.len() < 300);

        let empty = DispatchError::ResponseParse { raw: "  ".into() };
        assert!(empty.to_string().contains("<empty body>"));
    }

    #[test]
    fn invocation_errors_carry_context() {
        let err = InvocationError::Dispatch {
            label: "LinkedIn",
            source: DispatchError::UpstreamApi {
                status: 404,
                message: "not found".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "LinkedIn API error: upstream returned HTTP 404: not found"
        );
        assert!(!err.is_protocol_error());
        assert!(InvocationError::UnknownOperation("nope".into()).is_protocol_error());
    }
}
