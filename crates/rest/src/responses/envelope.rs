//! The success envelope and list payload helpers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use shopd_store::PageInfo;

/// The uniform success envelope.
///
/// `success` is derived from the status code (`statusCode < 400`) rather
/// than set independently, so the two can never disagree.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    success: bool,
    message: String,
    data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Value>,
}

impl ApiResponse {
    /// Builds an envelope for the given status code.
    pub fn new(status: StatusCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            status_code: status.as_u16(),
            success: status.as_u16() < 400,
            message: message.into(),
            data,
            meta: None,
        }
    }

    /// A `200 OK` envelope.
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    /// A `201 Created` envelope.
    pub fn created(message: impl Into<String>, data: Value) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }

    /// Attaches pagination metadata under `meta.pagination`.
    pub fn with_pagination(mut self, pagination: &PageInfo) -> Self {
        self.meta = Some(json!({ "pagination": pagination }));
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Builds the `data` object of a list response: the result count alongside
/// the documents themselves.
pub fn list_payload(items: Vec<Value>) -> Value {
    json!({
        "results": items.len(),
        "data": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopd_store::{PageInfo, PageSpec};

    #[test]
    fn test_success_derived_from_status() {
        let ok = ApiResponse::ok("fine", json!(null));
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["success"], true);
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_pagination_meta_shape() {
        let info = PageInfo::new(PageSpec { page: 2, limit: 10 }, 25);
        let envelope = ApiResponse::ok("ok", list_payload(vec![])).with_pagination(&info);
        let value = serde_json::to_value(&envelope).unwrap();

        let pagination = &value["meta"]["pagination"];
        assert_eq!(pagination["currentPage"], 2);
        assert_eq!(pagination["limit"], 10);
        assert_eq!(pagination["totalPages"], 3);
        assert_eq!(pagination["totalDocuments"], 25);
    }

    #[test]
    fn test_list_payload_counts_results() {
        let payload = list_payload(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(payload["results"], 2);
        assert_eq!(payload["data"].as_array().unwrap().len(), 2);
    }
}
