//! Declarative validation of create payloads.
//!
//! Each request type lists its fields once (`Schema::FIELDS`). Validation
//! walks the raw JSON against that list and reports every problem as a
//! `(field, reason)` pair instead of stopping at the first one. Only a
//! payload that passes is deserialized into the request type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Field path, e.g. `title` or `technologies[2]`
    #[schema(example = "title")]
    pub field: String,
    /// What was wrong with it
    #[schema(example = "required")]
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// JSON shape a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string.
    Text,
    /// An integer that fits in 32 bits.
    Integer,
    /// An array of strings.
    TextList,
}

/// Declaration of one payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Required fields must be present and non-null.
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A payload type with a declared field list.
pub trait Schema: DeserializeOwned {
    const FIELDS: &'static [FieldSpec];

    /// Check `value` against `FIELDS`, then deserialize it.
    fn validate(mut value: Value) -> Result<Self, Vec<FieldError>> {
        let object = match value.as_object_mut() {
            Some(object) => object,
            None => return Err(vec![FieldError::new("body", "expected object")]),
        };

        let errors = check_fields(Self::FIELDS, object);
        if !errors.is_empty() {
            return Err(errors);
        }

        serde_json::from_value(value).map_err(|e| vec![FieldError::new("body", e.to_string())])
    }
}

/// Collect every field-level error for `object`. Unknown keys are ignored.
///
/// Integer fields written as integral floats (`2.0`, `1e3`) are rewritten in
/// place as plain integers.
pub fn check_fields(fields: &[FieldSpec], object: &mut Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for spec in fields {
        match object.get_mut(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    errors.push(FieldError::new(spec.name, "required"));
                }
            }
            Some(value) => check_kind(spec, value, &mut errors),
        }
    }

    errors
}

fn check_kind(spec: &FieldSpec, value: &mut Value, errors: &mut Vec<FieldError>) {
    match spec.kind {
        FieldKind::Text => {
            if !value.is_string() {
                errors.push(FieldError::new(
                    spec.name,
                    format!("expected string, received {}", type_name(value)),
                ));
            }
        }
        FieldKind::Integer => match integral(value) {
            Some(n) => match i32::try_from(n) {
                Ok(n) => *value = Value::from(n),
                Err(_) => errors.push(FieldError::new(spec.name, "integer out of range")),
            },
            None => errors.push(FieldError::new(
                spec.name,
                format!("expected integer, received {}", type_name(value)),
            )),
        },
        FieldKind::TextList => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        errors.push(FieldError::new(
                            format!("{}[{}]", spec.name, i),
                            format!("expected string, received {}", type_name(item)),
                        ));
                    }
                }
            }
            None => errors.push(FieldError::new(
                spec.name,
                format!("expected array, received {}", type_name(value)),
            )),
        },
    }
}

/// Whole-number value of a JSON number, however it was written.
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
