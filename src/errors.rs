//! Request-level error taxonomy.
//!
//! Every handler failure maps onto one of these variants and surfaces as an
//! HTTP status with a JSON body; nothing here crashes the process. Failures
//! are reported once per request, never retried.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed identifier in the request path
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// Malformed request body
    #[error("validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// Expected business outcome for well-formed ids that do not resolve
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Store-layer failure
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "Bad request",
            Self::Validation { .. } => "Validation failed",
            Self::NotFound { .. } => "Not found",
            Self::Database(_) => "Internal server error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Database(e) = self {
            ::tracing::error!(error = %e, "store operation failed");
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}
