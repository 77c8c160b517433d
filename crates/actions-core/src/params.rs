//! Declared parameter schemas and eager validation of caller input.
//!
//! Every action declares its parameters up front as a list of [`ParamSpec`].
//! Before a handler runs, the dispatcher passes the raw caller mapping through
//! [`validate`], which coerces each value to its declared type, fills in
//! defaults, and drops keys the action does not know about. Handlers only ever
//! see a [`TypedParams`] whose values already match their declared kinds.

use crate::error::{ActionError, Result};
use crate::types::{ParamValue, Params};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
        }
    }
}

// ---------------------------------------------------------------------------
// ParamSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub default: Option<ParamValue>,
}

impl ParamSpec {
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::String, description)
    }

    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Integer, description)
    }

    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Boolean, description)
    }

    fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Coerce a caller-supplied value to this parameter's declared kind.
    ///
    /// Strings are accepted for integer and boolean parameters when they parse
    /// cleanly, since command-line callers can only ever pass text.
    pub fn coerce(&self, value: &ParamValue) -> Result<ParamValue> {
        match (self.kind, value) {
            (ParamKind::String, ParamValue::Str(s)) => Ok(ParamValue::Str(s.clone())),
            (ParamKind::Integer, ParamValue::Int(n)) => Ok(ParamValue::Int(*n)),
            (ParamKind::Integer, ParamValue::Str(s)) => s
                .trim()
                .parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|_| self.invalid(value)),
            (ParamKind::Boolean, ParamValue::Bool(b)) => Ok(ParamValue::Bool(*b)),
            (ParamKind::Boolean, ParamValue::Str(s)) => match s.trim() {
                "true" => Ok(ParamValue::Bool(true)),
                "false" => Ok(ParamValue::Bool(false)),
                _ => Err(self.invalid(value)),
            },
            _ => Err(self.invalid(value)),
        }
    }

    fn invalid(&self, value: &ParamValue) -> ActionError {
        let found = match value {
            ParamValue::Str(s) => format!("string {s:?}"),
            ParamValue::Other(serde_json::Value::Null) => "null".to_string(),
            other => format!("{} {other}", other.type_name()),
        };
        ActionError::InvalidParameter {
            key: self.name.to_string(),
            expected: self.kind.as_str().to_string(),
            found,
        }
    }
}

// ---------------------------------------------------------------------------
// TypedParams
// ---------------------------------------------------------------------------

/// Parameters after validation: every value matches its declared kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedParams {
    values: BTreeMap<String, ParamValue>,
}

impl TypedParams {
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(ParamValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(ParamValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validate raw caller parameters against a declared schema.
pub fn validate(specs: &[ParamSpec], raw: &Params) -> Result<TypedParams> {
    let mut values = BTreeMap::new();

    for (key, value) in raw {
        match specs.iter().find(|s| s.name == key.as_str()) {
            Some(spec) => {
                values.insert(key.clone(), spec.coerce(value)?);
            }
            None => tracing::warn!(key = %key, "ignoring undeclared parameter"),
        }
    }

    for spec in specs {
        if let Some(default) = &spec.default {
            values
                .entry(spec.name.to_string())
                .or_insert_with(|| default.clone());
        }
    }

    Ok(TypedParams { values })
}

/// Render a declared schema as a JSON-schema object.
pub fn schema(specs: &[ParamSpec]) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for spec in specs {
        let mut prop = serde_json::json!({
            "type": spec.kind.as_str(),
            "description": spec.description,
        });
        if let Some(default) = &spec.default {
            prop["default"] = serde_json::json!(default);
        }
        properties.insert(spec.name.to_string(), prop);
    }
    serde_json::json!({
        "type": "object",
        "properties": properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("arg1", "text"),
            ParamSpec::integer("arg2", "count"),
            ParamSpec::boolean("should-fail", "fail on purpose").with_default(false),
        ]
    }

    fn raw(pairs: &[(&str, ParamValue)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn typed_values_pass_through() {
        let typed = validate(
            &specs(),
            &raw(&[("arg1", "x".into()), ("arg2", 5.into()), ("should-fail", true.into())]),
        )
        .unwrap();
        assert_eq!(typed.str("arg1"), Some("x"));
        assert_eq!(typed.int("arg2"), Some(5));
        assert_eq!(typed.bool("should-fail"), Some(true));
    }

    #[test]
    fn numeric_string_coerces_to_integer() {
        let typed = validate(&specs(), &raw(&[("arg2", " 42 ".into())])).unwrap();
        assert_eq!(typed.int("arg2"), Some(42));
    }

    #[test]
    fn boolean_strings_coerce() {
        let typed = validate(&specs(), &raw(&[("should-fail", "true".into())])).unwrap();
        assert_eq!(typed.bool("should-fail"), Some(true));
    }

    #[test]
    fn non_numeric_string_is_invalid_parameter() {
        let err = validate(&specs(), &raw(&[("arg2", "not-a-number".into())])).unwrap_err();
        match err {
            ActionError::InvalidParameter { key, expected, found } => {
                assert_eq!(key, "arg2");
                assert_eq!(expected, "integer");
                assert!(found.contains("not-a-number"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integer_for_string_param_is_rejected() {
        let err = validate(&specs(), &raw(&[("arg1", 3.into())])).unwrap_err();
        assert!(matches!(err, ActionError::InvalidParameter { .. }));
        assert!(err.to_string().contains("expected string, got integer 3"));
    }

    #[test]
    fn float_for_integer_param_is_invalid_parameter() {
        let value = ParamValue::Other(serde_json::json!(5.5));
        let err = validate(&specs(), &raw(&[("arg2", value)])).unwrap_err();
        assert!(matches!(err, ActionError::InvalidParameter { .. }));
        assert!(err.to_string().contains("expected integer, got number 5.5"));
    }

    #[test]
    fn null_is_invalid_for_every_kind() {
        for key in ["arg1", "arg2", "should-fail"] {
            let value = ParamValue::Other(serde_json::Value::Null);
            let err = validate(&specs(), &raw(&[(key, value)])).unwrap_err();
            assert!(err.to_string().ends_with("got null"), "{key}: {err}");
        }
    }

    #[test]
    fn defaults_fill_missing_values() {
        let typed = validate(&specs(), &Params::new()).unwrap();
        assert_eq!(typed.bool("should-fail"), Some(false));
        assert_eq!(typed.str("arg1"), None);
        assert_eq!(typed.len(), 1);
    }

    #[test]
    fn undeclared_keys_are_dropped() {
        let typed = validate(&[], &raw(&[("stray", "value".into())])).unwrap();
        assert!(typed.is_empty());
    }

    #[test]
    fn schema_lists_properties_and_defaults() {
        let schema = schema(&specs());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["arg2"]["type"], "integer");
        assert_eq!(schema["properties"]["should-fail"]["default"], false);
        assert!(schema["properties"]["arg1"].get("default").is_none());
    }
}
