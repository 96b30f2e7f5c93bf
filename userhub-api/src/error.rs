/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP
/// responses. All handlers return `Result<T, ApiError>` which converts
/// to the appropriate status code:
///
/// - validation failure → 400 with per-field errors
/// - missing resource → 404 with a message
/// - storage failure → 500 with a generic message (details are logged)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400) - validation errors
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500)
    #[error("internal error: {0}")]
    Internal(String),
}

/// A single field-level validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "validation_error", "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Field-level validation errors, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, errors) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            errors,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert validator errors to API errors
///
/// This is the single canonical mapping from `validator` output to the
/// wire format; handlers call `req.validate()?` and nothing else.
impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let errors: Vec<FieldError> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        ApiError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("User with id 7 not found".to_string());
        assert_eq!(err.to_string(), "not found: User with id 7 not found");

        let err = ApiError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "internal error: boom");
    }

    #[test]
    fn test_validation_error_display() {
        let errors = vec![
            FieldError {
                field: "username".to_string(),
                message: "username is required".to_string(),
            },
            FieldError {
                field: "email".to_string(),
                message: "email is required".to_string(),
            },
        ];

        let err = ApiError::Validation(errors);
        assert_eq!(err.to_string(), "validation failed for 2 field(s)");
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_404() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_error_response_omits_empty_errors() {
        let body = ErrorResponse {
            error: "not_found".to_string(),
            message: "User with id 7 not found".to_string(),
            errors: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("errors").is_none());
        assert_eq!(json["error"], "not_found");
    }
}
