//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service and repository layers returns
//! [`AppError`]. Handlers propagate it with `?` and axum renders it through
//! [`IntoResponse`] as:
//!
//! ```json
//! { "error": "UserNotFound", "message": "User not found", "details": { "username": "bob" } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

/// Which entity a not-found error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    User,
    Track,
    Route,
}

impl NotFoundKind {
    /// Machine-readable error kind sent in the `error` field.
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundKind::User => "UserNotFound",
            NotFoundKind::Track => "TrackNotFound",
            NotFoundKind::Route => "NotFound",
        }
    }
}

/// Serialized error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub error: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid input: {message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound {
        kind: NotFoundKind,
        message: String,
        details: Value,
    },

    #[error("{message}")]
    MethodNotAllowed { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn user_not_found(details: Value) -> Self {
        Self::NotFound {
            kind: NotFoundKind::User,
            message: "User not found".to_string(),
            details,
        }
    }

    /// Track is absent, or present but owned by someone else.
    pub fn track_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            kind: NotFoundKind::Track,
            message: message.into(),
            details,
        }
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::NotFound {
            kind: NotFoundKind::Route,
            message: "The requested URL was not found on the server".to_string(),
            details: json!({ "path": path }),
        }
    }

    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::MethodNotAllowed {
            message: "The method is not allowed for the requested URL".to_string(),
            details: json!({ "method": method, "path": path }),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                error: "InvalidInput",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound {
                kind,
                message,
                details,
            } => ErrorInfo {
                error: kind.as_str(),
                message: message.clone(),
                details: details.clone(),
            },
            AppError::MethodNotAllowed { message, details } => ErrorInfo {
                error: "MethodNotAllowed",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, details } => ErrorInfo {
                error: "InternalError",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_info())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::bad_request(
                    "Value already taken",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() || db.is_check_violation() {
                return AppError::bad_request(
                    "Integrity constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            // string_data_right_truncation
            if db.code().as_deref() == Some("22001") {
                return AppError::bad_request("Value too long", json!({}));
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Internal server error", json!({}))
    }
}

/// Details list only the failed rule codes per field. Rejected values are
/// never echoed back.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details: Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
                (field.to_string(), json!(codes))
            })
            .collect();
        AppError::bad_request("Validation failed", Value::Object(details))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Malformed JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Malformed path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
