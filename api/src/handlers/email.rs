//! Email handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeliveryId, QrEmail};
use crate::error::AppError;
use crate::AppState;

/// Request body for sending an email with a QR code.
///
/// Missing fields deserialize as empty strings so they are reported by name
/// during validation. `html` may also be `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SendEmailRequest {
    pub from_email: String,
    pub to: String,
    pub subject: String,
    pub html: Option<String>,
    pub content_qr: String,
}

impl From<SendEmailRequest> for QrEmail {
    fn from(r: SendEmailRequest) -> Self {
        Self {
            from_email: r.from_email,
            to: r.to,
            subject: r.subject,
            html: r.html.unwrap_or_default(),
            content_qr: r.content_qr,
        }
    }
}

/// Response body for a sent email
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<DeliveryId>,
}

/// POST /send-email-with-qr
///
/// Embed a QR code built from `content_qr` into `html` and send it.
pub async fn send_email_with_qr(
    State(state): State<AppState>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, AppError> {
    let Json(request) = payload?;
    let email = QrEmail::from(request);
    let delivery_id = state.email_service.send_with_qr(&email).await?;

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email sent successfully".to_string(),
        message_id: Some(delivery_id),
    }))
}
