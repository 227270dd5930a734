//! Structural pre-validation ahead of typed `serde` deserialization.
//!
//! Each agent output type supplies a JSON Schema; Safe LLM Call validates
//! the repaired JSON against it before attempting to deserialize into the
//! typed struct, so a malformed field produces a retryable validation
//! failure instead of a serde error with a less actionable message.

use jsonschema::JSONSchema;
use serde_json::Value;

/// Something Safe LLM Call can validate a repaired JSON value against.
pub trait AgentSchema {
    /// The JSON Schema document for this output type.
    fn json_schema() -> Value;
}

/// Validate `value` against `schema`, returning the first validation error
/// message on failure.
pub fn validate(schema: &Value, value: &Value) -> Result<(), String> {
    let compiled = JSONSchema::compile(schema).map_err(|e| format!("invalid schema: {e}"))?;
    match compiled.validate(value) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let messages: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(messages.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_accepts_conforming_value() {
        let schema = json!({
            "type": "object",
            "required": ["status"],
            "properties": { "status": { "type": "string" } }
        });
        assert!(validate(&schema, &json!({"status": "ok"})).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let schema = json!({
            "type": "object",
            "required": ["status"],
            "properties": { "status": { "type": "string" } }
        });
        assert!(validate(&schema, &json!({})).is_err());
    }
}
