//! Unified error types for the QR Mail API
//!
//! This module defines error types for each layer:
//! - `QrError`: QR rendering adapter errors
//! - `EmailTransportError`: email delivery provider errors
//! - `AppError`: Application layer errors (the only type converted into HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// QR rendering errors
#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encode error: {0}")]
    Encode(String),

    #[error("PNG encode error: {0}")]
    Png(String),
}

/// Email delivery errors, carrying the provider's code and message verbatim
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code} - {message}")]
pub struct EmailTransportError {
    pub code: String,
    pub message: String,
}

impl EmailTransportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("QR error: {0}")]
    Qr(#[from] QrError),

    #[error("Email transport error: {0}")]
    Transport(#[from] EmailTransportError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match &self {
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "Invalid input", msg.clone())
            }
            AppError::Qr(e) => {
                tracing::error!(error = %e, "QR generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    format!("Failed to generate QR code: {}", e),
                )
            }
            AppError::Transport(e) => {
                tracing::error!(code = %e.code, message = %e.message, "Email delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Email delivery failed",
                    format!("Failed to send email via SES: {}", e),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    msg.clone(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            detail,
        });

        (status, body).into_response()
    }
}
