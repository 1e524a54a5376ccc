use axum::{
    extract::rejection::JsonRejection,
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// One field-scoped validation failure, surfaced in a 400 error list.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// All failures are converted to a JSON error body at the handler
/// boundary; no partial results are ever returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input parameters")]
    InvalidInput(Vec<FieldError>),

    #[error("Upstream credential error: {0}")]
    UpstreamCredential(String),

    #[error("Upstream quota error: {0}")]
    UpstreamQuota(String),

    #[error("Malformed upstream reply: {0}")]
    MalformedReply(String),

    #[error("Upstream reply violated the response contract: {0}")]
    ContractViolation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": "Invalid input parameters",
                    "errors": [{ "field": "body", "message": msg }],
                }),
            ),
            AppError::InvalidInput(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": "Invalid input parameters",
                    "errors": errors,
                }),
            ),
            AppError::UpstreamCredential(msg) => {
                tracing::error!("Upstream credential error: {msg}");
                (
                    StatusCode::UNAUTHORIZED,
                    json!({ "message": "OpenAI API key not configured or invalid" }),
                )
            }
            AppError::UpstreamQuota(msg) => {
                tracing::error!("Upstream quota error: {msg}");
                (
                    StatusCode::PAYMENT_REQUIRED,
                    json!({ "message": "OpenAI API quota exceeded or billing issue" }),
                )
            }
            AppError::MalformedReply(msg) => {
                tracing::error!("Malformed upstream reply: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Invalid JSON response from OpenAI API" }),
                )
            }
            AppError::ContractViolation(msg) => {
                tracing::error!("Upstream contract violation: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Invalid response structure from OpenAI API" }),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Failed to generate prompt. Please try again." }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Json extractor whose rejection is an `AppError`, so body
/// deserialization failures (bad enum token, missing field, invalid
/// JSON) surface as the same 400 error-list shape as handler-level
/// validation instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Classifies an upstream failure into the credential / quota / generic
/// taxonomy. Structured signals (HTTP status, error code) take priority;
/// substring sniffing of the fault message is a documented last-resort
/// fallback and inherently fragile.
impl From<LlmError> for AppError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::Api {
                status,
                code,
                message,
            } => {
                let code = code.unwrap_or_default();
                let lower = message.to_lowercase();
                if status == 401 || code == "invalid_api_key" || lower.contains("api key") {
                    AppError::UpstreamCredential(message)
                } else if status == 402
                    || code == "insufficient_quota"
                    || lower.contains("quota")
                    || lower.contains("billing")
                {
                    AppError::UpstreamQuota(message)
                } else {
                    AppError::Upstream(message)
                }
            }
            LlmError::Http(e) => AppError::Upstream(e.to_string()),
            LlmError::EmptyContent => {
                AppError::Upstream("No content received from OpenAI API".to_string())
            }
        }
    }
}
