/// Field validation applied before anything reaches the store.
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("{0} is required")]
    MissingField(String),
    #[error("{0} cannot be empty")]
    EmptyField(String),
    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("invalid fields: {0}")]
    Malformed(String),
    #[error("unknown field {0}")]
    UnknownField(String),
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Check that every required field is present, non-null, and not a blank string.
/// Fields are checked in declaration order; the first failure wins.
pub fn validate_required_fields(
    fields: &Map<String, Value>,
    required: &[&str],
) -> Result<(), ValidationError> {
    for &name in required {
        match fields.get(name) {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField(name.to_string()))
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(ValidationError::EmptyField(name.to_string()))
            }
            _ => {}
        }
    }
    Ok(())
}

/// Reject keys that are not in `known`, so typos fail loudly instead of being dropped.
pub fn reject_unknown_fields(
    fields: &Map<String, Value>,
    known: &[&str],
) -> Result<(), ValidationError> {
    match fields.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::UnknownField(key.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn accepts_complete_fields() {
        let fields = object(json!({ "title": "Bridges", "shortDesc": "Steel and concrete" }));
        assert!(validate_required_fields(&fields, &["title", "shortDesc"]).is_ok());
    }

    #[test]
    fn reports_first_missing_field() {
        let fields = object(json!({ "subtitle": "x" }));
        assert_eq!(
            validate_required_fields(&fields, &["title", "subtitle", "image"]),
            Err(ValidationError::MissingField("title".into()))
        );
    }

    #[test]
    fn null_counts_as_missing() {
        let fields = object(json!({ "title": null }));
        assert_eq!(
            validate_required_fields(&fields, &["title"]),
            Err(ValidationError::MissingField("title".into()))
        );
    }

    #[test]
    fn blank_string_is_empty() {
        let fields = object(json!({ "title": "   " }));
        assert_eq!(
            validate_required_fields(&fields, &["title"]),
            Err(ValidationError::EmptyField("title".into()))
        );
    }

    #[test]
    fn non_string_values_pass_presence_check() {
        let fields = object(json!({ "rating": 4 }));
        assert!(validate_required_fields(&fields, &["rating"]).is_ok());
    }

    #[test]
    fn unknown_keys_are_reported() {
        let fields = object(json!({ "title": "x", "shortdesc": "typo" }));
        assert_eq!(
            reject_unknown_fields(&fields, &["title", "shortDesc"]),
            Err(ValidationError::UnknownField("shortdesc".into()))
        );
        assert!(reject_unknown_fields(&object(json!({ "title": "x" })), &["title"]).is_ok());
    }
}
