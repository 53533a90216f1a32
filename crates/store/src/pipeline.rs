//! The query pipeline.
//!
//! Five pure, order-sensitive stages refine a base [`Query`]:
//!
//! `search → filter → sort → project → paginate`
//!
//! `search` must run before `filter` so the reserved `search` parameter is
//! never reinterpreted as a field-equality filter. The first two stages are
//! the match-determining ones; [`count_query`] composes exactly those, so a
//! count computed from it describes the same document set as the full list
//! pipeline, independent of sort, projection and pagination.

use crate::descriptor::EntityDescriptor;
use crate::params::{ListParams, PageLimits, RESERVED_KEYS};
use crate::query::{Filter, FilterValue, Projection, Query, SortKey};

/// Synthetic sort field carrying text-match relevance.
pub const RELEVANCE_FIELD: &str = "relevanceScore";

/// Default sort field when neither a search nor an explicit sort is active.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Applies the free-text search predicate.
///
/// No-op unless a `search` term is present and the entity declares itself
/// text-searchable; every other resource ignores the parameter rather than
/// erroring, so one list implementation serves the whole catalog.
pub fn search(params: &ListParams, desc: &EntityDescriptor, query: Query) -> Query {
    match params.search() {
        Some(term) if desc.text_searchable => query.with_text(term),
        _ => query,
    }
}

/// Translates candidate filter keys into typed predicates, AND-combined.
///
/// Reserved keys are excluded, unknown fields and malformed values are
/// dropped silently, and coercion goes through the descriptor's field table
/// so the list and count paths see byte-identical predicates.
pub fn filter(params: &ListParams, desc: &EntityDescriptor, mut query: Query) -> Query {
    for raw in params.filters() {
        if RESERVED_KEYS.contains(&raw.field.as_str()) {
            continue;
        }
        let Some(kind) = desc.field_type(&raw.field) else {
            continue;
        };
        let Some(value) = FilterValue::parse(kind, &raw.value) else {
            continue;
        };
        query = query.with_filter(Filter {
            field: raw.field.clone(),
            op: raw.op,
            value,
        });
    }
    query
}

/// Applies the sort specification.
///
/// An explicit `sort` parameter is a comma-separated field list, each
/// optionally prefixed with `-` for descending. Without one, results order
/// by descending relevance when a search is active, else by descending
/// creation time.
pub fn sort(params: &ListParams, query: Query) -> Query {
    let keys = params.sort().map(parse_sort).unwrap_or_default();
    if !keys.is_empty() {
        return query.with_sort(keys);
    }

    if query.text.is_some() {
        query.with_sort(vec![SortKey::descending(RELEVANCE_FIELD)])
    } else {
        query.with_sort(vec![SortKey::descending(CREATED_AT_FIELD)])
    }
}

/// Applies field selection.
///
/// A user-supplied `fields` value switches to a strict allow-list; absent,
/// the default excludes only the internal schema-version marker.
pub fn project(params: &ListParams, query: Query) -> Query {
    match params.fields() {
        Some(spec) => {
            let fields: Vec<String> = spec
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
            if fields.is_empty() {
                query
            } else {
                query.with_projection(Projection::Fields(fields))
            }
        }
        None => query,
    }
}

/// Applies skip/limit pagination from the parsed, defaulted page spec.
pub fn paginate(params: &ListParams, limits: &PageLimits, query: Query) -> Query {
    let spec = params.page_spec(limits);
    query.with_page(spec.skip(), spec.limit)
}

/// The full pipeline, in its fixed order.
pub fn list_query(
    params: &ListParams,
    desc: &EntityDescriptor,
    limits: &PageLimits,
    base: Query,
) -> Query {
    let query = search(params, desc, base);
    let query = filter(params, desc, query);
    let query = sort(params, query);
    let query = project(params, query);
    paginate(params, limits, query)
}

/// Only the match-determining stages, for the twin count query.
pub fn count_query(params: &ListParams, desc: &EntityDescriptor, base: Query) -> Query {
    let query = search(params, desc, base);
    filter(params, desc, query)
}

fn parse_sort(spec: &str) -> Vec<SortKey> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix('-') {
            Some(field) => SortKey {
                field: field.to_string(),
                ascending: false,
            },
            None => SortKey {
                field: s.to_string(),
                ascending: true,
            },
        })
        .collect()
}
