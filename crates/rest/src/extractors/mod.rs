//! Axum extractors for API-specific request data.
//!
//! - [`list_params`] - Raw list parameters from the query string

pub mod list_params;

pub use list_params::RawListParams;
