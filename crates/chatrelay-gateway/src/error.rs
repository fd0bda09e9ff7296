use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chatrelay_cache::prelude::CacheError;
use chatrelay_context::prelude::ContextError;
use chatrelay_llm::prelude::CompletionError;
use serde_json::json;
use tracing::error;

/// Request-level failure as surfaced to the caller: a malformed request is
/// rejected up front, everything else collapses to one 500 shape carrying the
/// original message text, never a backtrace.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Internal(String),
}

impl AppError {
    pub fn validation(detail: impl Into<String>) -> Self {
        AppError::Validation(detail.into())
    }
}

impl From<ContextError> for AppError {
    fn from(err: ContextError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(detail) => (StatusCode::BAD_REQUEST, detail),
            AppError::Internal(detail) => {
                error!("request failed: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
