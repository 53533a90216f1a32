//! Error types for the shopd HTTP API.
//!
//! This module defines all error types used throughout the REST layer, with
//! automatic conversion to the JSON error envelope every endpoint shares:
//!
//! ```json
//! {
//!   "statusCode": 404,
//!   "success": false,
//!   "message": "no products found with that ID",
//!   "errors": []
//! }
//! ```
//!
//! # Error Mapping
//!
//! Store errors are automatically mapped to HTTP status codes:
//!
//! | Store Error | HTTP Status |
//! |-------------|-------------|
//! | UnknownResource | 404 |
//! | Validation | 400 |
//! | Backend | 500 |
//!
//! Backend failures never leak internals to the client: the original error
//! is logged and the response carries a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shopd_store::StoreError;
use std::fmt;
use tracing::error;

/// Convenience result type for handler functions.
pub type RestResult<T> = Result<T, RestError>;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Document not found (HTTP 404).
    NotFound {
        /// The resource collection (e.g. "products").
        resource: String,
    },

    /// The URL names a resource the catalog does not know (HTTP 404).
    UnknownResource {
        /// The unrecognized path segment.
        resource: String,
    },

    /// Bad request - malformed body or parameters (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Document failed validation (HTTP 400).
    Validation {
        /// Summary message.
        message: String,
        /// Per-field error details for the envelope's `errors` array.
        errors: Vec<FieldDetail>,
    },

    /// Internal server error (HTTP 500).
    Internal {
        /// Error message, logged but never sent to the client.
        message: String,
    },
}

/// A single entry in the error envelope's `errors` array.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldDetail {
    /// The offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl RestError {
    /// Shorthand for a [`RestError::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource } => {
                write!(f, "no {} found with that ID", resource)
            }
            RestError::UnknownResource { resource } => {
                write!(f, "unknown resource: {}", resource)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::Validation { message, .. } => {
                write!(f, "Validation failed: {}", message)
            }
            RestError::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownResource { resource } => RestError::UnknownResource { resource },
            StoreError::Validation(failure) => RestError::Validation {
                message: failure.to_string(),
                errors: failure
                    .errors
                    .into_iter()
                    .map(|e| FieldDetail {
                        field: e.field,
                        message: e.message,
                    })
                    .collect(),
            },
            StoreError::Backend { message } => RestError::Internal { message },
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("invalid JSON body: {}", err),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            RestError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                format!("no {} found with that ID", resource),
                Vec::new(),
            ),
            RestError::UnknownResource { resource } => (
                StatusCode::NOT_FOUND,
                format!("unknown resource: {}", resource),
                Vec::new(),
            ),
            RestError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, Vec::new()),
            RestError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, errors)
            }
            RestError::Internal { message } => {
                error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = serde_json::json!({
            "statusCode": status.as_u16(),
            "success": false,
            "message": message,
            "errors": errors,
        });
        (status, Json(body)).into_response()
    }
}
