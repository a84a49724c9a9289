//! Namespaced identifiers: LinkedIn profile URNs and `"<namespace>:<id>"`
//! references used by search filters and post comments.

use serde_json::{json, Value};

pub const PROFILE_PREFIX: &str = "fsd_profile:";

/// Prefix a bare profile id with `fsd_profile:`.
///
/// Values that already contain a colon are returned unchanged, which makes the
/// function idempotent.
pub fn normalize_user_urn(value: &str) -> String {
    if value.contains(':') {
        value.to_string()
    } else {
        format!("{PROFILE_PREFIX}{value}")
    }
}

pub fn is_user_urn(value: &str) -> bool {
    value.starts_with(PROFILE_PREFIX)
}

/// A `"<namespace>:<id>"` string split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub namespace: String,
    pub value: String,
}

impl Reference {
    pub fn parse(raw: &str, namespace: &str) -> Option<Self> {
        raw.strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(|id| Self {
                namespace: namespace.to_string(),
                value: id.to_string(),
            })
    }

    /// First namespace of `namespaces` that `raw` is qualified with.
    pub fn parse_any(raw: &str, namespaces: &[&str]) -> Option<Self> {
        namespaces.iter().find_map(|ns| Self::parse(raw, ns))
    }

    pub fn to_value(&self) -> Value {
        json!({ "type": self.namespace, "value": self.value })
    }
}

/// A search filter after namespace detection
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Free text, forwarded as-is.
    Bare(String),
    /// Qualified id, forwarded as a one-element list of `{type, value}`.
    Reference(Reference),
    /// Caller-supplied list, forwarded as-is.
    List(Vec<Value>),
}

impl FilterValue {
    /// `None` for values that are neither strings nor arrays.
    pub fn classify(value: &Value, namespace: &str) -> Option<Self> {
        match value {
            Value::String(s) => Some(match Reference::parse(s, namespace) {
                Some(reference) => FilterValue::Reference(reference),
                None => FilterValue::Bare(s.clone()),
            }),
            Value::Array(items) => Some(FilterValue::List(items.clone())),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            FilterValue::Bare(s) => Value::String(s),
            FilterValue::Reference(reference) => Value::Array(vec![reference.to_value()]),
            FilterValue::List(items) => Value::Array(items),
        }
    }
}
