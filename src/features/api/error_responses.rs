use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ServiceError;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServiceError::NotConfigured => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ServiceError::Validation(e) => (StatusCode::BAD_REQUEST, e),
            ServiceError::Provider(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ServiceError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", e),
            ),
            ServiceError::Asset(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Asset write error: {}", e),
            ),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
