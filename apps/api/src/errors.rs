use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::profile::provider::ProviderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Provider fault: {0}")]
    ProviderFault(#[from] ProviderError),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::ProviderFault(_) => "PROVIDER_FAULT",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ProviderFault(e) => {
                // Fault detail stays in the server log; the client only sees the code.
                tracing::error!("Provider fault: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "message": "Server error",
            "error": self.code(),
        }));

        (status, body).into_response()
    }
}
