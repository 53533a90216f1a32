//! In-memory document store backend.
//!
//! Collections live in a single [`RwLock`]-guarded map keyed by resource
//! name; queries execute entirely in memory. The backend supports the full
//! adapter contract: equality and range predicates, weighted text-match
//! relevance, stable multi-key sort, projection, skip/limit and relation
//! expansion. Suitable for development, tests and small deployments.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::descriptor::{EntityDescriptor, FieldType};
use crate::document::{Document, VERSION_MARKER};
use crate::error::{FieldError, StoreResult, ValidationFailure};
use crate::pipeline::RELEVANCE_FIELD;
use crate::query::{Projection, Query};
use crate::store::DocumentStore;

/// Metadata fields a client payload may never overwrite.
const PROTECTED_FIELDS: &[&str] = &["_id", "createdAt", "updatedAt", VERSION_MARKER];

type Collections = HashMap<&'static str, Vec<Document>>;

/// An in-memory [`DocumentStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held for a resource.
    pub fn len(&self, desc: &EntityDescriptor) -> usize {
        self.collections
            .read()
            .get(desc.name)
            .map_or(0, Vec::len)
    }

    /// Whether the resource's collection is empty.
    pub fn is_empty(&self, desc: &EntityDescriptor) -> bool {
        self.len(desc) == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, desc: &EntityDescriptor, payload: Value) -> StoreResult<Document> {
        let mut map = into_object(payload)?;
        strip_protected(&mut map, true);
        apply_defaults(desc, &mut map);
        apply_slug(desc, &mut map);
        validate(desc, &map)?;

        let doc = Document::stamp(map, Utc::now());

        let mut collections = self.collections.write();
        let docs = collections.entry(desc.name).or_default();
        if docs.iter().any(|existing| existing.id() == doc.id()) {
            return Err(ValidationFailure::new(vec![FieldError::new(
                "_id",
                "duplicate key",
            )])
            .into());
        }

        debug!(resource = desc.name, id = %doc.id(), "document created");
        docs.push(doc.clone());
        Ok(doc)
    }

    async fn find_by_id(
        &self,
        desc: &EntityDescriptor,
        id: &str,
        expand: bool,
    ) -> StoreResult<Option<Document>> {
        let collections = self.collections.read();
        let found = collections
            .get(desc.name)
            .and_then(|docs| docs.iter().find(|d| d.id() == id))
            .cloned();
        Ok(found.map(|doc| maybe_expand(desc, doc, expand, &collections)))
    }

    async fn find(
        &self,
        desc: &EntityDescriptor,
        query: &Query,
        expand: bool,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read();
        let mut matched: Vec<Document> = collections
            .get(desc.name)
            .map(|docs| {
                docs.iter()
                    .filter_map(|doc| match_document(desc, query, doc))
                    .collect()
            })
            .unwrap_or_default();

        sort_documents(&mut matched, query);

        let skip = query.skip as usize;
        let matched: Vec<Document> = match query.take {
            Some(take) => matched.into_iter().skip(skip).take(take as usize).collect(),
            None => matched.into_iter().skip(skip).collect(),
        };

        Ok(matched
            .into_iter()
            .map(|doc| maybe_expand(desc, doc, expand, &collections))
            .map(|doc| apply_projection(doc, &query.projection))
            .collect())
    }

    async fn count(&self, desc: &EntityDescriptor, query: &Query) -> StoreResult<u64> {
        let collections = self.collections.read();
        let count = collections
            .get(desc.name)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| match_document(desc, query, doc).is_some())
                    .count()
            })
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn update_by_id(
        &self,
        desc: &EntityDescriptor,
        id: &str,
        patch: Value,
    ) -> StoreResult<Option<Document>> {
        let mut patch = into_object(patch)?;
        strip_protected(&mut patch, false);

        let mut collections = self.collections.write();
        let Some(doc) = collections
            .get_mut(desc.name)
            .and_then(|docs| docs.iter_mut().find(|d| d.id() == id))
        else {
            return Ok(None);
        };

        // Merge onto a copy first so validation failures leave the stored
        // document untouched.
        let mut merged = doc
            .content()
            .as_object()
            .cloned()
            .unwrap_or_default();
        let slug_refresh = desc
            .slug_source
            .is_some_and(|source| patch.contains_key(source));
        for (key, value) in patch {
            merged.insert(key, value);
        }
        if slug_refresh {
            apply_slug_forced(desc, &mut merged);
        }
        validate(desc, &merged)?;
        merged.insert("updatedAt".to_string(), json!(Utc::now().to_rfc3339()));

        *doc = Document::new(Value::Object(merged));
        debug!(resource = desc.name, id, "document updated");
        Ok(Some(doc.clone()))
    }

    async fn delete_by_id(
        &self,
        desc: &EntityDescriptor,
        id: &str,
    ) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write();
        let Some(docs) = collections.get_mut(desc.name) else {
            return Ok(None);
        };
        match docs.iter().position(|d| d.id() == id) {
            Some(index) => {
                let removed = docs.remove(index);
                debug!(resource = desc.name, id, "document deleted");
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }
}

/// Requires the payload to be a JSON object.
fn into_object(payload: Value) -> Result<Map<String, Value>, ValidationFailure> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationFailure::new(vec![FieldError::new(
            "payload",
            "must be a JSON object",
        )])),
    }
}

/// Drops store-managed metadata from a client payload. A supplied `_id` is
/// kept on create (seeding) but never on update.
fn strip_protected(map: &mut Map<String, Value>, keep_id: bool) {
    for field in PROTECTED_FIELDS {
        if keep_id && *field == "_id" {
            continue;
        }
        map.remove(*field);
    }
}

fn apply_defaults(desc: &EntityDescriptor, map: &mut Map<String, Value>) {
    for (field, default) in desc.defaults {
        if !map.contains_key(*field) {
            map.insert((*field).to_string(), default.to_value());
        }
    }
}

/// Derives `slug` from the configured source field when absent.
fn apply_slug(desc: &EntityDescriptor, map: &mut Map<String, Value>) {
    if map.contains_key("slug") {
        return;
    }
    apply_slug_forced(desc, map);
}

fn apply_slug_forced(desc: &EntityDescriptor, map: &mut Map<String, Value>) {
    let Some(source) = desc.slug_source else {
        return;
    };
    if let Some(text) = map.get(source).and_then(Value::as_str) {
        map.insert("slug".to_string(), json!(slugify(text)));
    }
}

/// Lowercases, replaces spaces with hyphens and strips everything that is
/// not a word character or hyphen.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Store-level validation: required fields, enum membership, declared
/// numeric/boolean types.
fn validate(desc: &EntityDescriptor, map: &Map<String, Value>) -> Result<(), ValidationFailure> {
    let mut errors = Vec::new();

    for field in desc.required {
        if map.get(*field).is_none_or(Value::is_null) {
            errors.push(FieldError::new(*field, "is required"));
        }
    }

    for constraint in desc.enums {
        if let Some(value) = map.get(constraint.field) {
            let ok = value
                .as_str()
                .is_some_and(|s| constraint.allowed.contains(&s));
            if !ok && !value.is_null() {
                errors.push(FieldError::new(
                    constraint.field,
                    format!("must be one of {}", constraint.allowed.join(", ")),
                ));
            }
        }
    }

    for spec in desc.fields {
        let Some(value) = map.get(spec.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let ok = match spec.kind {
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::String | FieldType::Date => true,
        };
        if !ok {
            errors.push(FieldError::new(
                spec.name,
                match spec.kind {
                    FieldType::Number => "must be a number",
                    _ => "must be a boolean",
                },
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(errors))
    }
}

/// Evaluates the match-determining parts of the query against a document.
///
/// Returns the matched document (scored when a text search is active), or
/// `None` when it is not part of the result set.
fn match_document(desc: &EntityDescriptor, query: &Query, doc: &Document) -> Option<Document> {
    let score = match &query.text {
        Some(term) => {
            let score = relevance(desc, doc, term);
            if score <= 0.0 {
                return None;
            }
            Some(score)
        }
        None => None,
    };

    if !query.filters.iter().all(|f| f.matches(doc.field(&f.field))) {
        return None;
    }

    let doc = doc.clone();
    Some(match score {
        Some(score) => doc.with_score(score),
        None => doc,
    })
}

/// Weighted word-match relevance across the descriptor's text index.
///
/// Each search token contributes the field weight once per occurrence of
/// the token as a word in the indexed field.
fn relevance(desc: &EntityDescriptor, doc: &Document, term: &str) -> f64 {
    let tokens: Vec<String> = term
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    for indexed in desc.text_index {
        let Some(text) = doc.field(indexed.field).as_str() else {
            continue;
        };
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        for token in &tokens {
            let hits = words.iter().filter(|w| *w == token).count();
            score += indexed.weight as f64 * hits as f64;
        }
    }
    score
}

/// Stable multi-key sort; later keys break ties of earlier ones.
fn sort_documents(docs: &mut [Document], query: &Query) {
    if query.sort.is_empty() {
        return;
    }
    docs.sort_by(|a, b| {
        for key in &query.sort {
            let ord = compare_field(a, b, &key.field);
            let ord = if key.ascending { ord } else { ord.reverse() };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

fn compare_field(a: &Document, b: &Document, field: &str) -> Ordering {
    if field == RELEVANCE_FIELD {
        return a
            .score()
            .unwrap_or(0.0)
            .partial_cmp(&b.score().unwrap_or(0.0))
            .unwrap_or(Ordering::Equal);
    }
    json_cmp(a.field(field), b.field(field))
}

/// Total order over JSON values: null < bool < number < string < rest.
fn json_cmp(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            _ => 4,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Expands declared relations, replacing reference IDs (scalar or array)
/// with the referenced documents. Dangling references degrade to null.
fn maybe_expand(
    desc: &EntityDescriptor,
    mut doc: Document,
    expand: bool,
    collections: &Collections,
) -> Document {
    if !expand || desc.relations.is_empty() {
        return doc;
    }

    let lookup = |target: &str, id: &Value| -> Value {
        id.as_str()
            .and_then(|id| {
                collections
                    .get(target)
                    .and_then(|docs| docs.iter().find(|d| d.id() == id))
            })
            .map(|found| found.content().clone())
            .unwrap_or(Value::Null)
    };

    if let Some(map) = doc.content_mut() {
        for relation in desc.relations {
            let Some(current) = map.get(relation.field) else {
                continue;
            };
            let expanded = match current {
                Value::Array(ids) => {
                    Value::Array(ids.iter().map(|id| lookup(relation.target, id)).collect())
                }
                Value::Null => continue,
                id => lookup(relation.target, id),
            };
            map.insert(relation.field.to_string(), expanded);
        }
    }
    doc
}

/// Applies field selection to a single document.
fn apply_projection(mut doc: Document, projection: &Projection) -> Document {
    let Some(map) = doc.content_mut() else {
        return doc;
    };
    match projection {
        Projection::Unversioned => {
            map.remove(VERSION_MARKER);
        }
        Projection::Fields(fields) => {
            map.retain(|key, _| key == "_id" || fields.iter().any(|f| f == key));
        }
    }
    doc
}
