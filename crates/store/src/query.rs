//! The typed query model.
//!
//! A [`Query`] is an immutable value describing which documents match
//! (filters and text search) and how they are presented (sort, projection,
//! skip/take). Pipeline stages in [`crate::pipeline`] return refined copies
//! instead of mutating shared builder state, so the count path and the list
//! path can share exactly the match-determining parts.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::descriptor::FieldType;

/// Comparison operator for a filter predicate.
///
/// `Eq` is the default (no bracket suffix in the query string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterOp {
    /// Equality.
    Eq,
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl FilterOp {
    /// Parses a bracket-operator suffix (`gte` in `price[gte]`).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "gt" => Some(FilterOp::Gt),
            "gte" => Some(FilterOp::Gte),
            "lt" => Some(FilterOp::Lt),
            "lte" => Some(FilterOp::Lte),
            _ => None,
        }
    }

    /// Whether an ordering of document value vs. filter value satisfies
    /// this operator.
    fn accepts(self, ord: Ordering) -> bool {
        match self {
            FilterOp::Eq => ord == Ordering::Equal,
            FilterOp::Gt => ord == Ordering::Greater,
            FilterOp::Gte => ord != Ordering::Less,
            FilterOp::Lt => ord == Ordering::Less,
            FilterOp::Lte => ord != Ordering::Greater,
        }
    }
}

/// A filter value coerced through the descriptor's field table.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// String comparison (lexicographic for range operators).
    Text(String),
    /// Numeric comparison.
    Number(f64),
    /// Boolean, equality only.
    Flag(bool),
    /// Timestamp comparison.
    Time(DateTime<Utc>),
}

impl FilterValue {
    /// Coerces a raw query-string value according to the declared field
    /// type. Returns `None` when the raw value does not parse; the caller
    /// drops such filters silently (tolerant parsing).
    pub fn parse(kind: FieldType, raw: &str) -> Option<Self> {
        match kind {
            FieldType::String => Some(FilterValue::Text(raw.to_string())),
            FieldType::Number => raw.parse::<f64>().ok().map(FilterValue::Number),
            FieldType::Boolean => match raw {
                "true" => Some(FilterValue::Flag(true)),
                "false" => Some(FilterValue::Flag(false)),
                _ => None,
            },
            FieldType::Date => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| FilterValue::Time(dt.with_timezone(&Utc))),
        }
    }

    /// Compares a document field value against this filter value.
    ///
    /// Returns `None` when the document value has an incompatible type (or
    /// is absent), which never matches.
    fn compare(&self, actual: &Value) -> Option<Ordering> {
        match self {
            FilterValue::Text(expected) => actual.as_str().map(|s| s.cmp(expected.as_str())),
            FilterValue::Number(expected) => {
                actual.as_f64().and_then(|n| n.partial_cmp(expected))
            }
            FilterValue::Flag(expected) => {
                actual.as_bool().map(|b| b.cmp(expected))
            }
            FilterValue::Time(expected) => actual
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc).cmp(expected)),
        }
    }
}

/// One `(field, operator, value)` predicate triple.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Document field the predicate applies to.
    pub field: String,
    /// Comparison operator.
    pub op: FilterOp,
    /// Typed comparison value.
    pub value: FilterValue,
}

impl Filter {
    /// Builds an equality filter on a string field.
    pub fn eq_str(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Eq,
            value: FilterValue::Text(value.into()),
        }
    }

    /// Whether a document field value satisfies this predicate.
    pub fn matches(&self, actual: &Value) -> bool {
        match self.value.compare(actual) {
            Some(ord) => self.op.accepts(ord),
            None => false,
        }
    }
}

/// One sort key. The synthetic field `relevanceScore` sorts by text-match
/// relevance; `createdAt` is the creation-time default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Field to sort by.
    pub field: String,
    /// Ascending if true.
    pub ascending: bool,
}

impl SortKey {
    /// Descending sort on the given field.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

/// Field selection for returned documents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    /// All fields except the internal schema-version marker (`__v`).
    #[default]
    Unversioned,
    /// Exactly the listed fields (plus `_id`).
    Fields(Vec<String>),
}

/// An executable query: match-determining parts (filters, text) plus
/// presentation parts (sort, projection, skip/take).
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// AND-combined filter predicates.
    pub filters: Vec<Filter>,
    /// Free-text search term, if active.
    pub text: Option<String>,
    /// Ordered sort keys.
    pub sort: Vec<SortKey>,
    /// Field selection.
    pub projection: Projection,
    /// Documents to skip.
    pub skip: u64,
    /// Maximum documents to return; `None` means unbounded.
    pub take: Option<u64>,
}

impl Query {
    /// An empty base query matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter predicate.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Activates a free-text search.
    pub fn with_text(mut self, term: impl Into<String>) -> Self {
        self.text = Some(term.into());
        self
    }

    /// Replaces the sort keys.
    pub fn with_sort(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Replaces the projection.
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Sets skip/take pagination.
    pub fn with_page(mut self, skip: u64, take: u64) -> Self {
        self.skip = skip;
        self.take = Some(take);
        self
    }
}
