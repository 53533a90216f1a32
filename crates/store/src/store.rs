//! The document store trait and pagination metadata.
//!
//! [`DocumentStore`] is the seam between the HTTP layer and a concrete
//! backend. Every operation takes the resource's [`EntityDescriptor`], so
//! backends never branch on resource names.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::descriptor::EntityDescriptor;
use crate::document::Document;
use crate::error::StoreResult;
use crate::params::PageSpec;
use crate::query::Query;

/// Pagination metadata echoed with every list result.
///
/// `current_page` and `limit` are the parsed, defaulted values the query ran
/// with, never the raw request strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number the query ran with.
    pub current_page: u64,
    /// Page size the query ran with.
    pub limit: u64,
    /// `ceil(total_documents / limit)`; zero when nothing matched.
    pub total_pages: u64,
    /// Independently counted matching documents.
    pub total_documents: u64,
}

impl PageInfo {
    /// Builds pagination metadata from the page spec and the count.
    pub fn new(spec: PageSpec, total_documents: u64) -> Self {
        Self {
            current_page: spec.page,
            limit: spec.limit,
            total_pages: spec.total_pages(total_documents),
            total_documents,
        }
    }
}

/// Storage seam for the generic CRUD handlers.
///
/// Mutating operations validate against the descriptor's constraints and
/// return the affected document; lookups return `None` for absent IDs so
/// callers decide how absence maps onto their error surface.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable backend name, for logs.
    fn backend_name(&self) -> &'static str;

    /// Validates and persists a new document.
    async fn create(&self, desc: &EntityDescriptor, payload: Value) -> StoreResult<Document>;

    /// Fetches a document by ID, optionally expanding declared relations.
    async fn find_by_id(
        &self,
        desc: &EntityDescriptor,
        id: &str,
        expand: bool,
    ) -> StoreResult<Option<Document>>;

    /// Executes a query: match, sort, project, paginate.
    async fn find(
        &self,
        desc: &EntityDescriptor,
        query: &Query,
        expand: bool,
    ) -> StoreResult<Vec<Document>>;

    /// Counts documents matching the query's filters and text search.
    ///
    /// Sort, projection and pagination on the query have no effect here.
    async fn count(&self, desc: &EntityDescriptor, query: &Query) -> StoreResult<u64>;

    /// Applies a partial payload to the matching document, re-running
    /// validation, and returns the updated document. `None` if absent.
    async fn update_by_id(
        &self,
        desc: &EntityDescriptor,
        id: &str,
        patch: Value,
    ) -> StoreResult<Option<Document>>;

    /// Removes the matching document, returning it. `None` if absent.
    async fn delete_by_id(
        &self,
        desc: &EntityDescriptor,
        id: &str,
    ) -> StoreResult<Option<Document>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_arithmetic() {
        let spec = PageSpec { page: 2, limit: 50 };
        let info = PageInfo::new(spec, 237);
        assert_eq!(info.current_page, 2);
        assert_eq!(info.limit, 50);
        assert_eq!(info.total_pages, 5);
        assert_eq!(info.total_documents, 237);
    }

    #[test]
    fn test_page_info_empty() {
        let spec = PageSpec { page: 1, limit: 100 };
        let info = PageInfo::new(spec, 0);
        assert_eq!(info.total_pages, 0);
    }

    #[test]
    fn test_page_info_serializes_camel_case() {
        let info = PageInfo::new(PageSpec { page: 1, limit: 10 }, 3);
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalDocuments"], 3);
    }
}
