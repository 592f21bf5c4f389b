//! Explicit validation functions with structured per-field errors
//!
//! Two validation paths share the same error type: the fixed rules applied to
//! form create/update payloads, and the rule set derived from a form's schema
//! at submit time.

use crate::persistence::models::FormInput;
use serde_json::Value;
use std::collections::BTreeMap;

/// Maximum accepted title length in characters
const TITLE_MAX_LEN: usize = 255;

/// A structured set of per-field validation messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field-name to messages mapping, for serializing into an error body
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Turn accumulated errors into a result
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Validate a form create/update payload and extract its fields.
///
/// Rules: title is required, must be a string, and at most 255 characters;
/// description is optional but must be a string when present; schema is
/// required and must be an array.
pub fn validate_form_payload(body: &Value) -> Result<FormInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = match body.get("title") {
        None | Some(Value::Null) => {
            errors.add("title", "The title field is required.");
            None
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                errors.add("title", "The title field is required.");
                None
            } else if s.chars().count() > TITLE_MAX_LEN {
                errors.add(
                    "title",
                    "The title may not be greater than 255 characters.",
                );
                None
            } else {
                Some(s.to_string())
            }
        }
        Some(_) => {
            errors.add("title", "The title must be a string.");
            None
        }
    };

    let description = match body.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add("description", "The description must be a string.");
            None
        }
    };

    let schema = match body.get("schema") {
        None | Some(Value::Null) => {
            errors.add("schema", "The schema field is required.");
            None
        }
        Some(Value::Array(fields)) => Some(fields.clone()),
        Some(_) => {
            errors.add("schema", "The schema must be an array.");
            None
        }
    };

    match (title, schema, errors.is_empty()) {
        (Some(title), Some(schema), true) => Ok(FormInput {
            title,
            description,
            schema,
        }),
        _ => Err(errors),
    }
}

/// Resolve a field descriptor's name: the primary `"model"` key with a
/// fallback to `"field"`.
///
/// The fallback fires only when the primary key is absent or null; a primary
/// value of any other kind ends the lookup. The resolved value yields a name
/// only when it is a string that is non-empty and not `"0"` — otherwise the
/// descriptor has no usable name and is skipped.
pub fn field_name(descriptor: &Value) -> Option<&str> {
    let value = match descriptor.get("model") {
        Some(v) if !v.is_null() => v,
        _ => descriptor.get("field")?,
    };

    let name = value.as_str()?;
    if name.is_empty() || name == "0" {
        None
    } else {
        Some(name)
    }
}

/// Whether a descriptor's `"required"` marker is truthy.
///
/// Absence, `false`, `null`, `0`, `""` and empty arrays/objects all mean
/// not required; any other value marks the field as required.
fn is_required(descriptor: &Value) -> bool {
    match descriptor.get("required") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Derive the required-field rule set from a form's schema.
///
/// Descriptors without a truthy required marker are ignored. A required
/// descriptor whose name cannot be resolved is skipped silently; this
/// leniency is deliberate, carried over from the original behavior.
pub fn derive_required_fields(schema: &[Value]) -> Vec<String> {
    let mut required = Vec::new();

    for descriptor in schema {
        if !is_required(descriptor) {
            continue;
        }
        match field_name(descriptor) {
            Some(name) => required.push(name.to_string()),
            None => {
                tracing::debug!("Skipping required field descriptor with no resolvable name");
            }
        }
    }

    required
}

/// Apply a required-field rule set to a submission payload.
///
/// A required field fails when it is absent, null, or an empty or
/// whitespace-only string. An empty rule set accepts any payload.
pub fn validate_submission(
    required: &[String],
    payload: &Value,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field in required {
        let present = match payload.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };

        if !present {
            errors.add(field.clone(), format!("The {} field is required.", field));
        }
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_payload_valid() {
        let body = json!({
            "title": "Contact",
            "description": "A contact form",
            "schema": [{"field": "email", "required": true}]
        });
        let input = validate_form_payload(&body).unwrap();
        assert_eq!(input.title, "Contact");
        assert_eq!(input.description.as_deref(), Some("A contact form"));
        assert_eq!(input.schema.len(), 1);
    }

    #[test]
    fn test_form_payload_missing_title() {
        let body = json!({"schema": []});
        let errors = validate_form_payload(&body).unwrap_err();
        assert_eq!(
            errors.errors()["title"],
            vec!["The title field is required."]
        );
    }

    #[test]
    fn test_form_payload_title_wrong_type() {
        let body = json!({"title": 42, "schema": []});
        let errors = validate_form_payload(&body).unwrap_err();
        assert_eq!(errors.errors()["title"], vec!["The title must be a string."]);
    }

    #[test]
    fn test_form_payload_title_too_long() {
        let body = json!({"title": "x".repeat(256), "schema": []});
        let errors = validate_form_payload(&body).unwrap_err();
        assert!(errors.errors()["title"][0].contains("255"));
    }

    #[test]
    fn test_form_payload_schema_not_array() {
        let body = json!({"title": "T", "schema": {"field": "email"}});
        let errors = validate_form_payload(&body).unwrap_err();
        assert_eq!(
            errors.errors()["schema"],
            vec!["The schema must be an array."]
        );
    }

    #[test]
    fn test_form_payload_collects_all_errors() {
        let body = json!({"description": 7});
        let errors = validate_form_payload(&body).unwrap_err();
        assert_eq!(errors.errors().len(), 3);
    }

    #[test]
    fn test_field_name_primary_and_fallback() {
        assert_eq!(field_name(&json!({"model": "email"})), Some("email"));
        assert_eq!(field_name(&json!({"field": "email"})), Some("email"));
        assert_eq!(
            field_name(&json!({"model": "a", "field": "b"})),
            Some("a")
        );
        assert_eq!(
            field_name(&json!({"model": null, "field": "b"})),
            Some("b")
        );
        assert_eq!(field_name(&json!({"label": "Email"})), None);
        assert_eq!(field_name(&json!({"model": 42})), None);
    }

    #[test]
    fn test_field_name_empty_primary_does_not_fall_back() {
        // A present-but-empty primary ends the lookup and yields no name
        assert_eq!(field_name(&json!({"model": "", "field": "b"})), None);
        assert_eq!(field_name(&json!({"model": ""})), None);
        assert_eq!(field_name(&json!({"model": "0", "field": "b"})), None);
        assert_eq!(field_name(&json!({"field": ""})), None);
    }

    #[test]
    fn test_derive_skips_descriptor_with_empty_primary_name() {
        let schema = vec![
            json!({"model": "", "field": "email", "required": true}),
            json!({"field": "name", "required": true}),
        ];
        assert_eq!(derive_required_fields(&schema), vec!["name"]);
    }

    #[test]
    fn test_derive_required_fields() {
        let schema = vec![
            json!({"field": "email", "required": true}),
            json!({"field": "notes"}),
            json!({"field": "age", "required": false}),
            json!({"model": "name", "required": 1}),
        ];
        assert_eq!(derive_required_fields(&schema), vec!["email", "name"]);
    }

    #[test]
    fn test_derive_skips_unnamed_required_descriptor() {
        let schema = vec![json!({"label": "Email", "required": true})];
        assert!(derive_required_fields(&schema).is_empty());
    }

    #[test]
    fn test_derive_empty_schema() {
        assert!(derive_required_fields(&[]).is_empty());
    }

    #[test]
    fn test_required_marker_falsy_values() {
        for marker in [json!(false), json!(0), json!(""), json!(null), json!([])] {
            let schema = vec![json!({"field": "email", "required": marker})];
            assert!(derive_required_fields(&schema).is_empty(), "marker should be falsy");
        }
    }

    #[test]
    fn test_submission_passes_with_required_present() {
        let required = vec!["email".to_string()];
        assert!(validate_submission(&required, &json!({"email": "a@b.com"})).is_ok());
    }

    #[test]
    fn test_submission_fails_when_missing_or_empty() {
        let required = vec!["email".to_string()];
        for payload in [json!({}), json!({"email": null}), json!({"email": "  "})] {
            let errors = validate_submission(&required, &payload).unwrap_err();
            assert_eq!(
                errors.errors()["email"],
                vec!["The email field is required."]
            );
        }
    }

    #[test]
    fn test_submission_non_string_values_count_as_present() {
        let required = vec!["age".to_string(), "subscribed".to_string()];
        let payload = json!({"age": 0, "subscribed": false});
        assert!(validate_submission(&required, &payload).is_ok());
    }

    #[test]
    fn test_submission_empty_rule_set_accepts_anything() {
        assert!(validate_submission(&[], &json!({"anything": "goes"})).is_ok());
        assert!(validate_submission(&[], &json!({})).is_ok());
    }
}
