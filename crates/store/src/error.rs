//! Error types for the document store.
//!
//! The taxonomy is small and deliberate: `Validation` and `UnknownResource`
//! are expected, locally recoverable outcomes the caller branches on;
//! `Backend` covers anything unanticipated and is surfaced generically.
//! Absent IDs are not an error at this layer: lookups return `Option`, and
//! the HTTP layer decides how absence maps onto its error surface.

use std::fmt;

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The resource type is not part of the catalog.
    #[error("unknown resource type: {resource}")]
    UnknownResource {
        /// The resource path segment that failed to resolve.
        resource: String,
    },

    /// The payload was rejected by store-level constraints.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Backend failure (I/O, poisoned state, anything unanticipated).
    #[error("backend error: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },
}

/// A payload rejected by store-level validation.
///
/// Carries one entry per invalid field; [`fmt::Display`] joins them into a
/// single human-readable message.
#[derive(Debug)]
pub struct ValidationFailure {
    /// Field-level validation errors.
    pub errors: Vec<FieldError>,
}

/// A single field-level validation error.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// The offending field name.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(FieldError::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "invalid document: {}", joined)
    }
}

impl std::error::Error for ValidationFailure {}

impl ValidationFailure {
    /// Creates a failure from collected field errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resource_display() {
        let err = StoreError::UnknownResource {
            resource: "warehouses".to_string(),
        };
        assert_eq!(err.to_string(), "unknown resource type: warehouses");
    }

    #[test]
    fn test_validation_joins_field_errors() {
        let failure = ValidationFailure::new(vec![
            FieldError::new("name", "is required"),
            FieldError::new("price", "must be a number"),
        ]);
        let message = failure.to_string();
        assert!(message.contains("name: is required"));
        assert!(message.contains("price: must be a number"));
    }
}
