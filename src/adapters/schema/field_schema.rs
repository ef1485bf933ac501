//! Field-rule schema. Checks presence and JSON kind of named fields.

use crate::domain::{DomainError, RawMessage};
use crate::ports::SchemaPort;
use crate::shared::config::AppConfig;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Expected JSON kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
    Any,
}

impl FieldKind {
    /// Parse a lowercase kind name as used in `ML_SIGNAL_REQUIRED_FIELDS`.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        match name {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "integer" => Ok(Self::Integer),
            "boolean" | "bool" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "null" => Ok(Self::Null),
            "any" => Ok(Self::Any),
            other => Err(DomainError::Config(format!("unknown field kind: {}", other))),
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Null => value.is_null(),
            Self::Any => true,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
struct FieldRule {
    name: String,
    kind: FieldKind,
    required: bool,
}

/// Schema built from field rules.
///
/// A message is valid when:
/// - it is non-empty (unless `allow_empty` is set)
/// - every required field is present and matches its kind
/// - every optional field that is present matches its kind
///
/// Fields without a rule are always accepted.
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    rules: Vec<FieldRule>,
    allow_empty: bool,
}

impl FieldSchema {
    /// Empty rule set. Rejects only empty messages.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.rules.push(FieldRule {
            name: name.into(),
            kind,
            required: true,
        });
        self
    }

    pub fn optional(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.rules.push(FieldRule {
            name: name.into(),
            kind,
            required: false,
        });
        self
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Build from `required_fields` and `allow_empty`. Entries without a kind accept any value.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, DomainError> {
        let mut schema = Self::new().allow_empty(cfg.allow_empty_or_default());
        for (name, kind) in cfg.required_field_rules() {
            let kind = match kind {
                Some(k) => FieldKind::parse(&k)?,
                None => FieldKind::Any,
            };
            schema = schema.require(name, kind);
        }
        Ok(schema)
    }

    /// First violation found, or None when the message conforms.
    pub fn violation(&self, message: &RawMessage) -> Option<String> {
        if message.is_empty() && !self.allow_empty {
            return Some("message has no fields".to_string());
        }
        for rule in &self.rules {
            match message.get(&rule.name) {
                None if rule.required => {
                    return Some(format!("missing required field `{}`", rule.name));
                }
                None => {}
                Some(value) if !rule.kind.matches(value) => {
                    return Some(format!("field `{}` is not {}", rule.name, rule.kind));
                }
                Some(_) => {}
            }
        }
        None
    }
}

impl SchemaPort for FieldSchema {
    fn is_valid(&self, message: &RawMessage) -> bool {
        match self.violation(message) {
            Some(reason) => {
                debug!(%reason, "schema violation");
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawMessage {
        RawMessage::try_from(value).unwrap()
    }

    #[test]
    fn test_default_schema_rejects_only_empty() {
        let schema = FieldSchema::new();
        assert!(!schema.is_valid(&raw(json!({}))));
        assert!(schema.is_valid(&raw(json!({"foo": 1}))));
        assert!(FieldSchema::new().allow_empty(true).is_valid(&raw(json!({}))));
    }

    #[test]
    fn test_required_field_kind() {
        let schema = FieldSchema::new()
            .require("symbol", FieldKind::String)
            .require("price", FieldKind::Number);

        assert!(schema.is_valid(&raw(json!({"symbol": "AAPL", "price": 189.5}))));
        assert!(!schema.is_valid(&raw(json!({"symbol": "AAPL"}))));
        assert!(!schema.is_valid(&raw(json!({"symbol": 1, "price": 189.5}))));
        assert_eq!(
            schema.violation(&raw(json!({"symbol": "AAPL"}))).as_deref(),
            Some("missing required field `price`")
        );
    }

    #[test]
    fn test_optional_field_checked_only_when_present() {
        let schema = FieldSchema::new().optional("volume", FieldKind::Integer);
        assert!(schema.is_valid(&raw(json!({"symbol": "AAPL"}))));
        assert!(schema.is_valid(&raw(json!({"volume": 100}))));
        assert!(!schema.is_valid(&raw(json!({"volume": 1.5}))));
    }

    #[test]
    fn test_from_config() {
        let cfg = AppConfig {
            required_fields: Some("symbol:string,ts".to_string()),
            ..Default::default()
        };
        let schema = FieldSchema::from_config(&cfg).unwrap();
        assert!(schema.is_valid(&raw(json!({"symbol": "AAPL", "ts": null}))));
        assert!(!schema.is_valid(&raw(json!({"symbol": "AAPL"}))));
    }

    #[test]
    fn test_from_config_unknown_kind() {
        let cfg = AppConfig {
            required_fields: Some("symbol:ticker".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            FieldSchema::from_config(&cfg),
            Err(DomainError::Config(_))
        ));
    }
}
