//! Error responses for the labour report API.
//!
//! This module defines the error body returned on failure and the mapping
//! from [`ReportError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Stable code for the innermost cause of a report error.
fn error_code(error: &ReportError) -> &'static str {
    match error.root_cause() {
        ReportError::InvalidTimeFormat { .. } => "INVALID_TIME",
        ReportError::InvalidBreakFormat { .. } => "INVALID_BREAK",
        ReportError::InvalidNumber { .. } => "INVALID_NUMBER",
        ReportError::HourOutOfRange { .. } => "HOUR_OUT_OF_RANGE",
        ReportError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        ReportError::InvalidShift { .. } => "INVALID_SHIFT",
        ReportError::ConfigNotFound { .. } | ReportError::ConfigParseError { .. } => "CONFIG_ERROR",
        ReportError::InputNotFound { .. } | ReportError::InputParseError { .. } => "INPUT_ERROR",
        ReportError::RecordRejected { .. } => "INVALID_RECORD",
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let code = error_code(&error);
        let status = match code {
            "CONFIG_ERROR" | "INPUT_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        let error = match &error {
            ReportError::RecordRejected { table, row, source } => ApiError::with_details(
                code,
                source.root_cause().to_string(),
                format!("Rejected {} row {}", table, row),
            ),
            other => ApiError::new(code, other.to_string()),
        };

        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Table;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_rejected_record_maps_to_bad_request_with_row() {
        let error = ReportError::InvalidBreakFormat {
            value: "lunch".to_string(),
        }
        .in_record(Table::Shifts, 2);
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_BREAK");
        assert_eq!(response.error.details.as_deref(), Some("Rejected shifts row 2"));
    }

    #[test]
    fn test_config_error_maps_to_server_error() {
        let error = ReportError::ConfigNotFound {
            path: "/etc/report.yaml".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_overflow_maps_to_bad_request() {
        let error = ReportError::AmountOverflow {
            what: "total cost".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "AMOUNT_OVERFLOW");
        assert!(response.error.details.is_none());
    }

    #[test]
    fn test_into_response_keeps_status_and_json_body() {
        let response = ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::malformed_json("bad body"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
