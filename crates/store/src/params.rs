//! Raw list parameters, parsed once at the transport boundary.
//!
//! [`ListParams`] is the structured form of an untrusted query string. The
//! reserved keys `page`, `limit`, `sort`, `fields` and `search` land in
//! dedicated slots; every other key becomes a candidate filter, with an
//! optional bracket-operator suffix (`price[gte]=50`). Parsing is tolerant
//! throughout: malformed keys and unknown operators are dropped, bad
//! pagination values fall back to defaults. The listing surface is designed
//! to be forgiving of client-side query construction mistakes.

use std::collections::HashMap;

use crate::query::FilterOp;

/// Reserved query-string keys that never become filters.
pub const RESERVED_KEYS: &[&str] = &["page", "limit", "sort", "fields", "search"];

/// A candidate filter extracted from the query string, value still raw.
#[derive(Debug, Clone)]
pub struct RawFilter {
    /// Field name (bracket suffix stripped).
    pub field: String,
    /// Parsed operator, `Eq` when no suffix was present.
    pub op: FilterOp,
    /// The raw string value, coerced later via the field table.
    pub value: String,
}

/// Parsed query parameters for a list request.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    search: Option<String>,
    sort: Option<String>,
    fields: Option<String>,
    page: Option<String>,
    limit: Option<String>,
    filters: Vec<RawFilter>,
}

impl ListParams {
    /// Parses a raw query-parameter map.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        let mut result = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "search" => result.search = non_empty(value),
                "sort" => result.sort = non_empty(value),
                "fields" => result.fields = non_empty(value),
                "page" => result.page = Some(value),
                "limit" => result.limit = Some(value),
                _ => {
                    if let Some(raw) = parse_filter_key(&key, value) {
                        result.filters.push(raw);
                    }
                }
            }
        }

        // Deterministic order regardless of map iteration.
        result
            .filters
            .sort_by(|a, b| a.field.cmp(&b.field).then(a.op.cmp(&b.op)));
        result
    }

    /// The free-text search term, if present and non-empty.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The raw `sort` parameter.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// The raw `fields` parameter.
    pub fn fields(&self) -> Option<&str> {
        self.fields.as_deref()
    }

    /// The candidate filters.
    pub fn filters(&self) -> &[RawFilter] {
        &self.filters
    }

    /// Resolves pagination from the raw `page`/`limit` values.
    ///
    /// Non-numeric or non-positive input falls back to the defaults; the
    /// limit is clamped to the configured ceiling.
    pub fn page_spec(&self, limits: &PageLimits) -> PageSpec {
        let page = parse_positive(self.page.as_deref()).unwrap_or(1);
        let limit = parse_positive(self.limit.as_deref())
            .unwrap_or(limits.default_limit)
            .min(limits.max_limit);
        PageSpec { page, limit }
    }
}

/// Splits a candidate filter key into field and operator.
///
/// `price[gte]` → (`price`, `Gte`); a bare key means equality. Keys with an
/// unknown operator or mismatched brackets are dropped, as are keys whose
/// field part is a reserved name (`search[gte]=x` must not leak a filter on
/// the reserved `search` parameter).
fn parse_filter_key(key: &str, value: String) -> Option<RawFilter> {
    let (field, op) = match key.find('[') {
        Some(open) => {
            let suffix = key[open + 1..].strip_suffix(']')?;
            (&key[..open], FilterOp::from_suffix(suffix)?)
        }
        None => (key, FilterOp::Eq),
    };

    if field.is_empty() || RESERVED_KEYS.contains(&field) {
        return None;
    }

    Some(RawFilter {
        field: field.to_string(),
        op,
        value,
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
}

/// Configured pagination bounds.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Limit used when the client supplies none.
    pub default_limit: u64,
    /// Hard ceiling on the client-supplied limit.
    pub max_limit: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: 100,
            max_limit: 500,
        }
    }
}

/// Parsed, defaulted pagination for one request.
///
/// These are the values echoed back in the result's pagination block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
}

impl PageSpec {
    /// Documents to skip: `(page - 1) * limit`, saturating so an absurd
    /// page number degrades to an empty page instead of overflowing.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Total pages for a document count: `ceil(total / limit)`, zero when
    /// the count is zero.
    pub fn total_pages(&self, total: u64) -> u64 {
        if total == 0 {
            0
        } else {
            total.div_ceil(self.limit)
        }
    }
}
