use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::engine::{DecisionError, DetailError};

/// Request-level failure. Every variant renders the uniform envelope
/// `{"error": {"code", "message", "details"?}}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {message}")]
    NotFound { message: String, details: Value },
    #[error("Validation error: {message}")]
    Validation { message: String, details: Value },
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn payout_not_found(payout_id: &str) -> Self {
        AppError::NotFound {
            message: format!("Payout not found: {payout_id}"),
            details: json!({ "payoutId": payout_id }),
        }
    }
}

impl From<DetailError> for AppError {
    fn from(err: DetailError) -> Self {
        match err {
            DetailError::NotFound { payout_id } => AppError::payout_not_found(&payout_id),
        }
    }
}

impl From<DecisionError> for AppError {
    fn from(err: DecisionError) -> Self {
        match err {
            DecisionError::NotFound { payout_id } => AppError::payout_not_found(&payout_id),
            DecisionError::InvalidAction { ref received } => AppError::Validation {
                message: err.to_string(),
                details: json!({ "received": received }),
            },
            DecisionError::MissingReason { ref payout_id } => AppError::Validation {
                message: err.to_string(),
                details: json!({ "payoutId": payout_id }),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, Some(details))
            }
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                message,
                Some(details),
            ),
            AppError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", message, None)
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
