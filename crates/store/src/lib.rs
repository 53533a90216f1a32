//! shopd Document Store
//!
//! This crate provides the storage layer for the shopd commerce API: a
//! backend-agnostic [`DocumentStore`] trait, a catalog of entity
//! descriptors, a typed query model and the pure pipeline that turns raw
//! HTTP list parameters into executable queries.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`catalog`] - Static descriptors for every managed entity
//! - [`descriptor`] - The [`EntityDescriptor`] metadata model
//! - [`document`] - Stored documents and server-managed metadata
//! - [`params`] - Raw query-string parameters and pagination limits
//! - [`pipeline`] - Pure query-construction stages (search, filter, sort,
//!   project, paginate)
//! - [`query`] - The typed [`Query`] a backend executes
//! - [`store`] - The [`DocumentStore`] trait and pagination metadata
//! - [`memory`] - An in-memory backend for development and tests
//!
//! # Example
//!
//! ```
//! use shopd_store::{catalog, pipeline, MemoryStore, PageLimits, Query};
//! use shopd_store::params::ListParams;
//! use std::collections::HashMap;
//!
//! let params = ListParams::from_map(HashMap::from([
//!     ("search".to_string(), "shirt".to_string()),
//!     ("price[lte]".to_string(), "50".to_string()),
//! ]));
//! let query = pipeline::list_query(
//!     &params,
//!     catalog::product(),
//!     &PageLimits::default(),
//!     Query::new(),
//! );
//! assert!(query.text.is_some());
//! assert_eq!(query.filters.len(), 1);
//! ```

pub mod catalog;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod memory;
pub mod params;
pub mod pipeline;
pub mod query;
pub mod store;

pub use descriptor::EntityDescriptor;
pub use document::Document;
pub use error::{FieldError, StoreError, StoreResult, ValidationFailure};
pub use memory::MemoryStore;
pub use params::{ListParams, PageLimits, PageSpec};
pub use query::{Filter, FilterOp, FilterValue, Projection, Query, SortKey};
pub use store::{DocumentStore, PageInfo};
