//! Request-level errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shield_auth::AuthError;
use shield_core::errors::CoreError;
use shield_core::responses::ErrorResponse;
use shield_db::error::DatabaseError;
use thiserror::Error;

/// Everything a handler can fail with. Library errors converge here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{message}")]
    Validation { field: String, message: String },

    /// No usable session token.
    #[error("Unauthorized")]
    Unauthenticated(#[from] AuthError),

    /// Authenticated, but the entity belongs to another user.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(String),

    /// Rendering or writing a report document failed.
    #[error("report generation failed: {0}")]
    Report(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message } => Self::Validation { field, message },
            CoreError::Unauthorized => Self::Unauthorized,
            CoreError::NotFound { entity_type, .. } => Self::NotFound(entity_type),
            CoreError::Other(e) => Self::Internal(e),
        }
    }
}

impl ServiceError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Report(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::Validation { field, message } => ErrorResponse {
                message: message.clone(),
                field: Some(field.clone()),
            },
            Self::Unauthenticated(_) | Self::Unauthorized | Self::NotFound(_) => {
                ErrorResponse::new(self.to_string())
            }
            Self::Report(_) => ErrorResponse::new("Failed to generate PDF"),
            Self::Database(_) | Self::Internal(_) => ErrorResponse::new("Internal server error"),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::Unauthenticated(e) => tracing::debug!(error = %e, "rejected request"),
            Self::Report(_) | Self::Database(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "request failed");
            }
            _ => {}
        }
        (self.status(), Json(self.body())).into_response()
    }
}
