//! Turn validated arguments into the exact upstream request body

use serde_json::{json, Map, Value};

use crate::credentials::Credentials;
use crate::error::{ValidationError, ValidationResult};
use crate::reference::{is_user_urn, normalize_user_urn, FilterValue, Reference};
use crate::schema::{Inclusion, OperationSpec, ParamSpec, Reshape};
use crate::validate::is_truthy;

pub const ACCOUNT_ID_FIELD: &str = "account_id";

/// Build the payload for `spec` from arguments that already passed
/// [`crate::validate::validate`].
///
/// Defaults fill absent optional fields, truthy-only fields are dropped when
/// falsy, namespaced values are reshaped and management operations receive
/// the configured account id. Only declared fields reach the payload.
pub fn normalize(
    spec: &OperationSpec,
    args: &Map<String, Value>,
    credentials: &Credentials,
) -> ValidationResult<Map<String, Value>> {
    let mut payload = Map::new();

    for (key, literal) in spec.fixed {
        payload.insert(key.to_string(), literal.to_value());
    }

    for param in spec.params {
        let supplied = args.get(param.name).filter(|v| !v.is_null());
        let value = match (supplied, param.default) {
            (Some(value), _) if !param.required && !included(param, value) => continue,
            (Some(value), _) => value.clone(),
            (None, Some(default)) => default.to_value(),
            (None, None) => continue,
        };
        payload.insert(param.payload_key().to_string(), reshape(param, value)?);
    }

    if spec.management {
        if let Some(account_id) = credentials.account_id() {
            payload.insert(ACCOUNT_ID_FIELD.to_string(), json!(account_id));
        }
    }

    Ok(payload)
}

fn included(param: &ParamSpec, value: &Value) -> bool {
    match param.inclusion {
        Inclusion::Present => true,
        Inclusion::Truthy => is_truthy(value),
    }
}

fn reshape(param: &ParamSpec, value: Value) -> ValidationResult<Value> {
    match param.reshape {
        Reshape::None => Ok(value),
        Reshape::UserUrn { strict } => {
            let Some(raw) = value.as_str() else {
                return Ok(value);
            };
            let urn = normalize_user_urn(raw);
            if strict && !is_user_urn(&urn) {
                return Err(ValidationError::InvalidUrn {
                    field: param.name.to_string(),
                    value: urn,
                });
            }
            Ok(Value::String(urn))
        }
        Reshape::ReferenceList(namespace) => Ok(match FilterValue::classify(&value, namespace) {
            Some(filter) => filter.into_value(),
            None => value,
        }),
        Reshape::Reference(namespaces) => {
            match value.as_str().and_then(|s| Reference::parse_any(s, namespaces)) {
                Some(reference) => Ok(reference.to_value()),
                None => Ok(value),
            }
        }
        Reshape::Clamp { min, max } => Ok(clamp(value, min, max)),
    }
}

fn clamp(value: Value, min: i64, max: i64) -> Value {
    if let Some(n) = value.as_i64() {
        return Value::from(n.clamp(min, max));
    }
    match value.as_f64() {
        Some(f) if f <= min as f64 => Value::from(min),
        Some(f) if f >= max as f64 => Value::from(max),
        _ => value,
    }
}
