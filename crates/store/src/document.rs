//! A stored document and its store-maintained metadata.
//!
//! Documents are JSON objects. The store stamps `_id`, `createdAt`,
//! `updatedAt` and the internal schema-version marker `__v` on write; when a
//! text search is active, a relevance score rides alongside the document and
//! surfaces on the wire as the synthetic `relevanceScore` field.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

/// The internal schema-version marker excluded from default projections.
pub const VERSION_MARKER: &str = "__v";

/// A persisted document plus optional relevance score.
#[derive(Debug, Clone)]
pub struct Document {
    value: Value,
    score: Option<f64>,
}

impl Document {
    /// Wraps an already-stamped JSON object.
    pub fn new(value: Value) -> Self {
        Self { value, score: None }
    }

    /// Stamps store metadata onto a validated payload and wraps it.
    ///
    /// A caller-supplied `_id` is kept, otherwise a fresh UUID is assigned.
    pub fn stamp(mut payload: Map<String, Value>, now: DateTime<Utc>) -> Self {
        if !payload.get("_id").is_some_and(Value::is_string) {
            payload.insert("_id".to_string(), json!(Uuid::new_v4().to_string()));
        }
        let stamp = json!(now.to_rfc3339());
        payload.insert("createdAt".to_string(), stamp.clone());
        payload.insert("updatedAt".to_string(), stamp);
        payload.insert(VERSION_MARKER.to_string(), json!(0));
        Self {
            value: Value::Object(payload),
            score: None,
        }
    }

    /// Returns the document's logical ID.
    pub fn id(&self) -> &str {
        self.value
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns a field of the document, or `Null` if absent.
    pub fn field(&self, name: &str) -> &Value {
        self.value.get(name).unwrap_or(&Value::Null)
    }

    /// Returns the raw JSON content.
    pub fn content(&self) -> &Value {
        &self.value
    }

    /// Returns a mutable view of the underlying object map.
    pub fn content_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.value.as_object_mut()
    }

    /// Attaches a relevance score (text search active).
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Returns the relevance score, if a text search produced one.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Converts the document into its wire representation.
    ///
    /// The relevance score, when present, is injected as `relevanceScore` so
    /// callers can sort on it and clients can see it.
    pub fn into_wire(self) -> Value {
        match (self.score, self.value) {
            (Some(score), Value::Object(mut map)) => {
                map.insert("relevanceScore".to_string(), json!(score));
                Value::Object(map)
            }
            (_, value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_assigns_id_and_timestamps() {
        let payload = json!({"name": "Red Shirt"});
        let doc = Document::stamp(payload.as_object().unwrap().clone(), Utc::now());

        assert!(!doc.id().is_empty());
        assert!(doc.field("createdAt").is_string());
        assert_eq!(doc.field(VERSION_MARKER), &json!(0));
    }

    #[test]
    fn test_stamp_keeps_supplied_id() {
        let payload = json!({"_id": "prod-1", "name": "Red Shirt"});
        let doc = Document::stamp(payload.as_object().unwrap().clone(), Utc::now());
        assert_eq!(doc.id(), "prod-1");
    }

    #[test]
    fn test_into_wire_injects_relevance_score() {
        let doc = Document::new(json!({"_id": "p1"})).with_score(7.5);
        let wire = doc.into_wire();
        assert_eq!(wire["relevanceScore"], json!(7.5));
    }

    #[test]
    fn test_into_wire_without_score() {
        let wire = Document::new(json!({"_id": "p1"})).into_wire();
        assert!(wire.get("relevanceScore").is_none());
    }
}
