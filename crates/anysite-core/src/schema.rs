//! Declarative description of an operation and its parameters
//!
//! The operation table in [`crate::operations`] is built entirely from the
//! `const fn` builders in this module, so adding a tool is a data change.

use serde_json::{json, Map, Value};

/// HTTP method used against the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Compile-time JSON scalar used for defaults and fixed payload fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(&'static str),
}

impl Literal {
    pub fn to_value(self) -> Value {
        match self {
            Literal::Int(n) => Value::from(n),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Str(s) => Value::String(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

/// Legal interval for a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

impl NumberRange {
    pub const ANY: NumberRange = NumberRange { min: None, max: None };

    pub const POSITIVE: NumberRange = NumberRange {
        min: Some(Bound::Exclusive(0.0)),
        max: None,
    };

    /// Inclusive on both ends.
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(Bound::Inclusive(min)),
            max: Some(Bound::Inclusive(max)),
        }
    }

    /// Greater than zero and at most `max`.
    pub const fn positive_up_to(max: f64) -> Self {
        Self {
            min: Some(Bound::Exclusive(0.0)),
            max: Some(Bound::Inclusive(max)),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above = match self.min {
            Some(Bound::Inclusive(min)) => value >= min,
            Some(Bound::Exclusive(min)) => value > min,
            None => true,
        };
        let below = match self.max {
            Some(Bound::Inclusive(max)) => value <= max,
            Some(Bound::Exclusive(max)) => value < max,
            None => true,
        };
        above && below
    }

    pub fn describe(&self) -> String {
        let lower = self.min.map(|b| match b {
            Bound::Inclusive(v) => format!("at least {}", v),
            Bound::Exclusive(v) => format!("greater than {}", v),
        });
        let upper = self.max.map(|b| match b {
            Bound::Inclusive(v) => format!("at most {}", v),
            Bound::Exclusive(v) => format!("less than {}", v),
        });
        match (lower, upper) {
            (Some(l), Some(u)) => format!("must be {} and {}", l, u),
            (Some(l), None) => format!("must be {}", l),
            (None, Some(u)) => format!("must be {}", u),
            (None, None) => "any number".to_string(),
        }
    }

    fn write_schema(&self, schema: &mut Map<String, Value>) {
        match self.min {
            Some(Bound::Inclusive(v)) => {
                schema.insert("minimum".into(), json!(v));
            }
            Some(Bound::Exclusive(v)) => {
                schema.insert("exclusiveMinimum".into(), json!(v));
            }
            None => {}
        }
        match self.max {
            Some(Bound::Inclusive(v)) => {
                schema.insert("maximum".into(), json!(v));
            }
            Some(Bound::Exclusive(v)) => {
                schema.insert("exclusiveMaximum".into(), json!(v));
            }
            None => {}
        }
    }
}

/// Type of a single parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    String,
    Number(NumberRange),
    Boolean,
    /// String restricted to a fixed set of values.
    Enum(&'static [&'static str]),
    /// Array of strings, optionally restricted to a fixed set of item values.
    StringArray {
        items: Option<&'static [&'static str]>,
        non_empty: bool,
    },
    /// A single string or an array of strings.
    StringOrArray,
}

impl ParamKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamKind::String | ParamKind::Enum(_) => "string",
            ParamKind::Number(_) => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::StringArray { .. } => "array of strings",
            ParamKind::StringOrArray => "string or array of strings",
        }
    }
}

/// When an optional parameter without a default is forwarded upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Whenever supplied and not null.
    Present,
    /// Only when truthy: empty strings, `0` and `false` are dropped.
    Truthy,
}

/// Value rewrite applied after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reshape {
    None,
    /// Bare profile ids gain the `fsd_profile:` prefix. When `strict`, the
    /// result must carry that prefix.
    UserUrn { strict: bool },
    /// `"<ns>:<id>"` becomes `[{"type": ns, "value": id}]`.
    ReferenceList(&'static str),
    /// `"<ns>:<id>"` becomes `{"type": ns, "value": id}` for any listed namespace.
    Reference(&'static [&'static str]),
    /// Silently clamp into `[min, max]`.
    Clamp { min: i64, max: i64 },
}

/// Declared parameter of an operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    /// Payload key when it differs from `name`.
    pub wire_name: Option<&'static str>,
    pub kind: ParamKind,
    pub required: bool,
    /// `null` counts as absent instead of a type error.
    pub nullable: bool,
    pub default: Option<Literal>,
    pub inclusion: Inclusion,
    /// String values must contain at least one of these substrings.
    pub must_contain: &'static [&'static str],
    pub reshape: Reshape,
    pub description: &'static str,
}

impl ParamSpec {
    const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            wire_name: None,
            kind,
            required: false,
            nullable: false,
            default: None,
            inclusion: Inclusion::Present,
            must_contain: &[],
            reshape: Reshape::None,
            description: "",
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, ParamKind::String)
    }

    pub const fn number(name: &'static str) -> Self {
        Self::new(name, ParamKind::Number(NumberRange::ANY))
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, ParamKind::Boolean)
    }

    pub const fn one_of(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, ParamKind::Enum(values))
    }

    pub const fn string_array(name: &'static str) -> Self {
        Self::new(
            name,
            ParamKind::StringArray {
                items: None,
                non_empty: false,
            },
        )
    }

    pub const fn string_array_of(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(
            name,
            ParamKind::StringArray {
                items: Some(values),
                non_empty: false,
            },
        )
    }

    pub const fn string_or_array(name: &'static str) -> Self {
        Self::new(name, ParamKind::StringOrArray)
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    pub const fn truthy(self) -> Self {
        Self {
            inclusion: Inclusion::Truthy,
            ..self
        }
    }

    pub const fn default_int(self, value: i64) -> Self {
        Self {
            default: Some(Literal::Int(value)),
            ..self
        }
    }

    pub const fn default_bool(self, value: bool) -> Self {
        Self {
            default: Some(Literal::Bool(value)),
            ..self
        }
    }

    pub const fn default_str(self, value: &'static str) -> Self {
        Self {
            default: Some(Literal::Str(value)),
            ..self
        }
    }

    pub const fn range(self, range: NumberRange) -> Self {
        Self {
            kind: ParamKind::Number(range),
            ..self
        }
    }

    pub const fn non_empty(self) -> Self {
        let kind = match self.kind {
            ParamKind::StringArray { items, .. } => ParamKind::StringArray {
                items,
                non_empty: true,
            },
            other => other,
        };
        Self { kind, ..self }
    }

    pub const fn wire(self, wire_name: &'static str) -> Self {
        Self {
            wire_name: Some(wire_name),
            ..self
        }
    }

    pub const fn containing(self, needles: &'static [&'static str]) -> Self {
        Self {
            must_contain: needles,
            ..self
        }
    }

    pub const fn reshape(self, reshape: Reshape) -> Self {
        Self { reshape, ..self }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub fn payload_key(&self) -> &'static str {
        self.wire_name.unwrap_or(self.name)
    }

    /// JSON Schema fragment advertised in `tools/list`.
    pub fn json_schema(&self) -> Value {
        let mut schema = Map::new();
        match self.kind {
            ParamKind::String => {
                schema.insert("type".into(), json!("string"));
            }
            ParamKind::Number(range) => {
                schema.insert("type".into(), json!("number"));
                range.write_schema(&mut schema);
            }
            ParamKind::Boolean => {
                schema.insert("type".into(), json!("boolean"));
            }
            ParamKind::Enum(values) => {
                schema.insert("type".into(), json!("string"));
                schema.insert("enum".into(), json!(values));
            }
            ParamKind::StringArray { items, non_empty } => {
                schema.insert("type".into(), json!("array"));
                let mut item_schema = Map::new();
                item_schema.insert("type".into(), json!("string"));
                if let Some(values) = items {
                    item_schema.insert("enum".into(), json!(values));
                }
                schema.insert("items".into(), Value::Object(item_schema));
                if non_empty {
                    schema.insert("minItems".into(), json!(1));
                }
            }
            ParamKind::StringOrArray => {
                schema.insert("type".into(), json!(["string", "array"]));
                schema.insert("items".into(), json!({"type": "string"}));
            }
        }

        if self.nullable {
            let widened = match schema.remove("type") {
                Some(Value::String(t)) => json!([t, "null"]),
                Some(Value::Array(mut types)) => {
                    types.push(json!("null"));
                    Value::Array(types)
                }
                _ => json!("null"),
            };
            schema.insert("type".into(), widened);
        }
        if !self.description.is_empty() {
            schema.insert("description".into(), json!(self.description));
        }
        if let Some(default) = self.default {
            schema.insert("default".into(), default.to_value());
        }
        Value::Object(schema)
    }
}

/// One tool exposed to the host, mapped onto one upstream endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub params: &'static [ParamSpec],
    /// Payload fields with a constant value, not caller-settable.
    pub fixed: &'static [(&'static str, Literal)],
    /// At least one of these parameters must be truthy.
    pub any_of: &'static [&'static str],
    /// Management operations act on the caller's own account and carry the
    /// configured account id.
    pub management: bool,
    /// Prefix of error texts, e.g. "LinkedIn user posts".
    pub error_label: &'static str,
}

impl OperationSpec {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.json_schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }
        Value::Object(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        let timeout = NumberRange::between(20.0, 1500.0);
        assert!(timeout.contains(20.0));
        assert!(timeout.contains(1500.0));
        assert!(!timeout.contains(19.0));
        assert!(!timeout.contains(1501.0));

        assert!(!NumberRange::POSITIVE.contains(0.0));
        assert!(NumberRange::POSITIVE.contains(0.5));

        let sn = NumberRange::positive_up_to(2500.0);
        assert!(sn.contains(2500.0));
        assert!(!sn.contains(2501.0));
        assert_eq!(sn.describe(), "must be greater than 0 and at most 2500");
    }

    #[test]
    fn param_schema_includes_constraints() {
        let p = ParamSpec::number("count_per_keyword")
            .range(NumberRange::between(1.0, 10.0))
            .default_int(1)
            .describe("Results per keyword");
        assert_eq!(
            p.json_schema(),
            json!({
                "type": "number",
                "minimum": 1.0,
                "maximum": 10.0,
                "description": "Results per keyword",
                "default": 1
            })
        );
    }

    #[test]
    fn nullable_widens_type() {
        let p = ParamSpec::one_of("content_type", &["videos", "photos"]).nullable();
        assert_eq!(p.json_schema()["type"], json!(["string", "null"]));

        let p = ParamSpec::string_or_array("author_industries").nullable();
        assert_eq!(p.json_schema()["type"], json!(["string", "array", "null"]));
    }

    #[test]
    fn builders_compose() {
        const P: ParamSpec = ParamSpec::string_array("keywords").required().non_empty();
        assert!(P.required);
        assert_eq!(
            P.kind,
            ParamKind::StringArray {
                items: None,
                non_empty: true
            }
        );
        assert_eq!(ParamSpec::string("id").wire("user").payload_key(), "user");
    }
}
