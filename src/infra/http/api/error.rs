use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::error::ErrorReport;

/// Wire error codes shared across the API. The set is closed; most entries
/// are reserved for surfaces that do not exist yet.
pub mod codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const GROUP_ACCESS_DENIED: &str = "GROUP_ACCESS_DENIED";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
}

/// Error envelope: `data` is always serialized as null so clients can rely
/// on the field being present.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub data: Option<serde_json::Value>,
    pub errors: Vec<ApiErrorMessage>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    errors: Vec<ApiErrorMessage>,
    /// Diagnostic detail for the logging middleware; never sent to clients.
    detail: String,
}

impl ApiError {
    pub fn validation(fields: Vec<(&'static str, &'static str)>) -> Self {
        let errors = fields
            .iter()
            .map(|(field, message)| ApiErrorMessage {
                code: codes::VALIDATION_ERROR.to_string(),
                message: format!("{field}: {message}"),
            })
            .collect();
        let detail = fields
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            status: StatusCode::BAD_REQUEST,
            errors,
            detail,
        }
    }

    pub fn not_found(entity: &'static str) -> Self {
        let message = format!("{entity} not found");
        Self {
            status: StatusCode::NOT_FOUND,
            errors: vec![ApiErrorMessage {
                code: codes::NOT_FOUND.to_string(),
                message: message.clone(),
            }],
            detail: message,
        }
    }

    /// `message` is what the client sees; `cause` stays in the report.
    pub fn database(message: &'static str, cause: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            errors: vec![ApiErrorMessage {
                code: codes::DATABASE_ERROR.to_string(),
                message: message.to_string(),
            }],
            detail: cause,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            errors: vec![ApiErrorMessage {
                code: codes::INTERNAL_ERROR.to_string(),
                message: "internal error".to_string(),
            }],
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let report = ErrorReport::from_message("infra::http::api", self.status, self.detail);
        let body = ErrorResponse {
            data: None,
            errors: self.errors,
        };
        let mut response = (self.status, Json(body)).into_response();
        report.attach(&mut response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_produces_one_message_per_field() {
        let err = ApiError::validation(vec![
            ("offset", "offset must be at least 0"),
            ("limit", "limit must be between 1 and 100"),
        ]);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.errors.len(), 2);
        assert!(err.errors.iter().all(|e| e.code == codes::VALIDATION_ERROR));
        assert!(err.errors[0].message.contains("offset"));
        assert!(err.errors[1].message.contains("limit"));
    }

    #[test]
    fn database_error_hides_the_cause_from_the_body() {
        let err = ApiError::database("failed to list sakes", "connection refused".to_string());

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.errors[0].code, codes::DATABASE_ERROR);
        assert_eq!(err.errors[0].message, "failed to list sakes");
        assert!(!err.errors[0].message.contains("connection refused"));
    }

    #[test]
    fn error_envelope_serializes_null_data() {
        let body = ErrorResponse {
            data: None,
            errors: vec![ApiErrorMessage {
                code: codes::NOT_FOUND.to_string(),
                message: "brewery not found".to_string(),
            }],
        };
        let value = serde_json::to_value(&body).expect("envelope serializes");

        assert!(value["data"].is_null());
        assert_eq!(value["errors"][0]["code"], "NOT_FOUND");
    }
}
