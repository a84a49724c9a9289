//! Schema validation of raw invocation arguments

use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};
use crate::schema::{OperationSpec, ParamKind, ParamSpec};

/// Check `args` against every declared parameter of `spec`.
///
/// Undeclared fields are ignored. The first violation wins.
pub fn validate(spec: &OperationSpec, args: &Map<String, Value>) -> ValidationResult<()> {
    for param in spec.params {
        validate_param(param, args.get(param.name))?;
    }

    if !spec.any_of.is_empty()
        && !spec
            .any_of
            .iter()
            .any(|field| args.get(*field).is_some_and(is_truthy))
    {
        return Err(ValidationError::NoSearchFilter {
            fields: spec.any_of.iter().map(|f| f.to_string()).collect(),
        });
    }

    Ok(())
}

fn validate_param(param: &ParamSpec, value: Option<&Value>) -> ValidationResult<()> {
    let value = match value {
        None | Some(Value::Null) if param.required => {
            return Err(ValidationError::MissingRequiredField(param.name.to_string()))
        }
        None => return Ok(()),
        Some(Value::Null) if param.nullable => return Ok(()),
        Some(value) => value,
    };

    match param.kind {
        ParamKind::String => {
            let s = expect_str(param, value)?;
            if param.required && s.trim().is_empty() {
                return Err(ValidationError::BlankField(param.name.to_string()));
            }
            check_contains(param, s)
        }
        ParamKind::Number(range) => {
            let n = value.as_f64().ok_or_else(|| type_error(param, value))?;
            if range.contains(n) {
                Ok(())
            } else {
                Err(ValidationError::ValueOutOfRange {
                    field: param.name.to_string(),
                    value: value.to_string(),
                    constraint: range.describe(),
                })
            }
        }
        ParamKind::Boolean => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(type_error(param, value))
            }
        }
        ParamKind::Enum(allowed) => {
            let s = expect_str(param, value)?;
            check_enum(param.name, s, allowed)
        }
        ParamKind::StringArray { items, non_empty } => {
            let array = value.as_array().ok_or_else(|| type_error(param, value))?;
            if non_empty && array.is_empty() {
                return Err(ValidationError::EmptyArray(param.name.to_string()));
            }
            check_string_items(param, array, items)
        }
        ParamKind::StringOrArray => match value {
            Value::String(_) => Ok(()),
            Value::Array(array) => check_string_items(param, array, None),
            other => Err(type_error(param, other)),
        },
    }
}

fn expect_str<'a>(param: &ParamSpec, value: &'a Value) -> ValidationResult<&'a str> {
    value.as_str().ok_or_else(|| type_error(param, value))
}

fn check_contains(param: &ParamSpec, s: &str) -> ValidationResult<()> {
    if param.must_contain.is_empty() || param.must_contain.iter().any(|n| s.contains(n)) {
        return Ok(());
    }
    Err(ValidationError::MissingNamespace {
        field: param.name.to_string(),
        expected: param.must_contain.iter().map(|n| n.to_string()).collect(),
    })
}

fn check_enum(field: &str, value: &str, allowed: &[&str]) -> ValidationResult<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::InvalidEnumValue {
        field: field.to_string(),
        value: value.to_string(),
        valid_values: allowed.iter().map(|v| v.to_string()).collect(),
    })
}

fn check_string_items(
    param: &ParamSpec,
    items: &[Value],
    allowed: Option<&[&str]>,
) -> ValidationResult<()> {
    for (idx, item) in items.iter().enumerate() {
        let field = format!("{}[{}]", param.name, idx);
        let s = item.as_str().ok_or_else(|| ValidationError::InvalidFieldType {
            field: field.clone(),
            expected: "string".to_string(),
            actual: json_type_name(item).to_string(),
        })?;
        if let Some(allowed) = allowed {
            check_enum(&field, s, allowed)?;
        }
    }
    Ok(())
}

fn type_error(param: &ParamSpec, value: &Value) -> ValidationError {
    ValidationError::InvalidFieldType {
        field: param.name.to_string(),
        expected: param.kind.type_name().to_string(),
        actual: json_type_name(value).to_string(),
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JavaScript-style truthiness, used by "at least one of" rules and
/// truthy-only inclusion.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
