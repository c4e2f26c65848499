//
//  freshdesk-cli
//  api/common/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON envelope handling
//!
//! Freshdesk wraps every resource under a single key, both in request bodies
//! and in responses:
//!
//! ```json
//! {"user": {"name": "Jane", "email": "jane@example.com"}}
//! ```
//!
//! The key is not always echoed back verbatim. Nested solution resources are
//! sent as `solution_category` but may come back as `category`, so unwrapping
//! retries once with the part of the key after its first underscore.

use serde_json::{Map, Value};
use tracing::warn;

use super::{ApiError, Fields, Record};

/// The shortened key the vendor may answer with, if `envelope_key` has one.
///
/// # Example
///
/// ```rust
/// use freshdesk_cli::api::common::fallback_key;
///
/// assert_eq!(fallback_key("solution_category"), Some("category"));
/// assert_eq!(fallback_key("helpdesk_ticket"), Some("ticket"));
/// assert_eq!(fallback_key("user"), None);
/// ```
pub fn fallback_key(envelope_key: &str) -> Option<&str> {
    envelope_key
        .split_once('_')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
}

/// Wraps a field set under its envelope key for a request body.
pub fn wrap(envelope_key: &str, fields: &Fields) -> Value {
    let mut body = Map::new();
    body.insert(envelope_key.to_string(), Value::Object(fields.clone()));
    Value::Object(body)
}

/// Unwrapped success body: one record or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwrapped {
    /// The body was a single enveloped object
    One(Record),
    /// The body was an array of enveloped objects
    Many(Vec<Record>),
}

impl Unwrapped {
    /// Flattens into a list; a single record becomes a one-element list.
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }

    /// Returns the single record, or an error if the body was a list.
    pub fn into_record(self) -> Result<Record, ApiError> {
        match self {
            Self::One(record) => Ok(record),
            Self::Many(records) => Err(ApiError::UnexpectedBody(format!(
                "expected a single object, got a list of {}",
                records.len()
            ))),
        }
    }
}

/// Looks up `envelope_key` in one object, retrying once with [`fallback_key`].
///
/// # Example
///
/// ```rust
/// use freshdesk_cli::api::common::unwrap_record;
/// use serde_json::json;
///
/// let body = json!({"category": {"id": 3, "name": "FAQ"}});
/// let record = unwrap_record(body.as_object().unwrap(), "solution_category").unwrap();
/// assert_eq!(record["id"], 3);
/// ```
pub fn unwrap_record(object: &Map<String, Value>, envelope_key: &str) -> Result<Record, ApiError> {
    if let Some(inner) = object.get(envelope_key) {
        return as_record(inner, envelope_key);
    }

    let fallback = fallback_key(envelope_key);
    if let Some(short) = fallback {
        if let Some(inner) = object.get(short) {
            warn!("Envelope key '{}' absent, using '{}'", envelope_key, short);
            return as_record(inner, short);
        }
    }

    Err(ApiError::MissingEnvelope {
        key: envelope_key.to_string(),
        fallback: fallback.map(str::to_string),
    })
}

/// Unwraps a whole success body, which is either one object or an array.
pub fn unwrap_body(body: &Value, envelope_key: &str) -> Result<Unwrapped, ApiError> {
    match body {
        Value::Object(object) => Ok(Unwrapped::One(unwrap_record(object, envelope_key)?)),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(object) => unwrap_record(object, envelope_key),
                other => Err(ApiError::UnexpectedBody(format!(
                    "list element is not an object: {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Unwrapped::Many),
        other => Err(ApiError::UnexpectedBody(other.to_string())),
    }
}

fn as_record(value: &Value, key: &str) -> Result<Record, ApiError> {
    value.as_object().cloned().ok_or_else(|| {
        ApiError::UnexpectedBody(format!("value under '{}' is not an object", key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_unwrap_primary_key() {
        let record = unwrap_record(&object(json!({"user": {"id": 1}})), "user").unwrap();
        assert_eq!(Value::Object(record), json!({"id": 1}));
    }

    #[test]
    fn test_unwrap_fallback_key() {
        let body = object(json!({"category": {"id": 7, "name": "General"}}));
        let record = unwrap_record(&body, "solution_category").unwrap();
        assert_eq!(Value::Object(record), json!({"id": 7, "name": "General"}));
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let body = object(json!({"solution_folder": {"id": 1}, "folder": {"id": 2}}));
        let record = unwrap_record(&body, "solution_folder").unwrap();
        assert_eq!(record["id"], 1);
    }

    #[test]
    fn test_fallback_is_single_level() {
        // "solution_article_draft" falls back to "article_draft", never to "draft"
        let body = object(json!({"draft": {"id": 1}}));
        let err = unwrap_record(&body, "solution_article_draft").unwrap_err();
        match err {
            ApiError::MissingEnvelope { key, fallback } => {
                assert_eq!(key, "solution_article_draft");
                assert_eq!(fallback.as_deref(), Some("article_draft"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_without_fallback() {
        let err = unwrap_record(&object(json!({"customer": {}})), "user").unwrap_err();
        assert!(matches!(err, ApiError::MissingEnvelope { fallback: None, .. }));
    }

    #[test]
    fn test_unwrap_list_mixes_keys() {
        let body = json!([
            {"solution_category": {"id": 1}},
            {"category": {"id": 2}}
        ]);
        let records = unwrap_body(&body, "solution_category")
            .unwrap()
            .into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], 2);
    }

    #[test]
    fn test_unwrap_rejects_scalars() {
        assert!(matches!(
            unwrap_body(&json!("ok"), "user"),
            Err(ApiError::UnexpectedBody(_))
        ));
        assert!(matches!(
            unwrap_body(&json!([1, 2]), "user"),
            Err(ApiError::UnexpectedBody(_))
        ));
        assert!(matches!(
            unwrap_record(&object(json!({"user": "x"})), "user"),
            Err(ApiError::UnexpectedBody(_))
        ));
    }

    #[test]
    fn test_wrap_preserves_field_order() {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!("Jane"));
        fields.insert("email".to_string(), json!("jane@example.com"));
        let body = wrap("user", &fields);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"user":{"name":"Jane","email":"jane@example.com"}}"#
        );
    }

    #[test]
    fn test_into_record_rejects_list() {
        assert!(Unwrapped::Many(vec![]).into_record().is_err());
    }
}
