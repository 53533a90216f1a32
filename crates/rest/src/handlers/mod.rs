//! HTTP request handlers.
//!
//! The admin CRUD handlers are generic over the document store and over the
//! resource: the `{resource}` path segment is resolved against the entity
//! catalog, so one set of handlers serves every managed collection.
//!
//! - [`create`] - Create a document
//! - [`list`] - List documents with search, filters, sort and pagination
//! - [`read`] - Read a document by ID
//! - [`update`] - Update a document
//! - [`delete`] - Delete a document
//! - [`storefront`] - Public product endpoints
//! - [`health`] - Health check endpoint

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod storefront;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use storefront::{public_product_handler, public_products_handler};
pub use update::update_handler;

use shopd_store::{EntityDescriptor, catalog};

use crate::error::{RestError, RestResult};

/// Resolves a URL path segment against the entity catalog.
pub(crate) fn resolve(resource: &str) -> RestResult<&'static EntityDescriptor> {
    catalog::find(resource).ok_or_else(|| RestError::UnknownResource {
        resource: resource.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_resource() {
        assert_eq!(resolve("products").unwrap().name, "product");
        assert_eq!(resolve("categories").unwrap().name, "category");
    }

    #[test]
    fn test_resolve_unknown_resource() {
        assert!(matches!(
            resolve("warehouses"),
            Err(RestError::UnknownResource { .. })
        ));
    }
}
