//! Error handling for the Aimpur API
//!
//! Every failure leaves the service as the same envelope:
//! `{"error": {"code", "message", "details"}, "request_id", "timestamp"}`.

use aimpur_calculator::{CalculatorError, ErrorCode};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request arguments are missing, mistyped or out of range.
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Arguments were well formed but the calculator could not produce a result.
    #[error("Calculation failed: {message}")]
    Calculation { message: String, calculator: String },

    /// The body could not be buffered within the configured size limit.
    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Calculation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Calculation { .. } => "CALCULATION_ERROR",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            ApiError::Validation { field: Some(field), .. } => {
                Some(serde_json::json!({ "field": field }))
            }
            ApiError::NotFound { resource } => Some(serde_json::json!({ "resource": resource })),
            ApiError::Calculation { calculator, .. } => {
                Some(serde_json::json!({ "calculator": calculator }))
            }
            _ => None,
        }
    }

    pub fn to_response(&self, request_id: Option<String>) -> ApiErrorResponse {
        ApiErrorResponse {
            error: ErrorBody {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
            request_id: request_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: Utc::now(),
        }
    }

    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation { message: message.into(), field: field.map(str::to_string) }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound { resource: resource.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_response(None);

        warn!(
            request_id = %body.request_id,
            code = %body.error.code,
            error = %self,
            "request rejected"
        );

        (status, Json(body)).into_response()
    }
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        let field = err
            .details
            .as_ref()
            .and_then(|d| d.get("field"))
            .map(|f| f.as_string());
        let calculator = err
            .details
            .as_ref()
            .and_then(|d| d.get("calculator"))
            .map(|c| c.as_string())
            .unwrap_or_default();

        match err.code {
            ErrorCode::MissingRequiredField
            | ErrorCode::InvalidFieldType
            | ErrorCode::InvalidFieldValue => ApiError::Validation { message: err.message, field },
            ErrorCode::InvalidInput => ApiError::Calculation { message: err.message, calculator },
            ErrorCode::UnknownCalculator => {
                ApiError::NotFound { resource: format!("calculator '{calculator}'") }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge { message: rejection.body_text() }
        } else {
            ApiError::validation(rejection.body_text(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_error_mapping() {
        let missing: ApiError = CalculatorError::missing_field("height").into();
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            missing,
            ApiError::Validation { field: Some(ref f), .. } if f == "height"
        ));

        let invalid: ApiError = CalculatorError::invalid_input("paint").into();
        assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(invalid.error_code(), "CALCULATION_ERROR");

        let unknown: ApiError = CalculatorError::unknown_calculator("wallpaper").into();
        assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_envelope_carries_request_id_and_details() {
        let body = ApiError::validation("bad value", Some("coats"))
            .to_response(Some("req-1".to_string()));
        assert_eq!(body.request_id, "req-1");
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(body.error.details, Some(serde_json::json!({ "field": "coats" })));

        let generated = ApiError::validation("bad value", None).to_response(None);
        assert!(Uuid::parse_str(&generated.request_id).is_ok());
        assert_eq!(generated.error.details, None);

        let too_large = ApiError::PayloadTooLarge { message: "length limit exceeded".into() };
        assert_eq!(too_large.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(too_large.to_response(None).error.code, "PAYLOAD_TOO_LARGE");
    }
}
