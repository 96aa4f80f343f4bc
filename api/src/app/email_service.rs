//! Email service
//!
//! Builds a QR code from `content_qr`, embeds it into the HTML body and hands
//! the result to the email transport. One send attempt per request.

use std::sync::Arc;

use super::html_embed::embed_qr_image;
use super::validation::require_non_blank;
use crate::domain::entities::{png_base64, DeliveryId, OutgoingEmail, QrEmail};
use crate::domain::ports::{EmailTransport, QrRenderer};
use crate::error::AppError;

/// Service for sending emails with an embedded QR code
pub struct EmailService<R, T>
where
    R: QrRenderer + ?Sized,
    T: EmailTransport + ?Sized,
{
    renderer: Arc<R>,
    transport: Arc<T>,
}

impl<R, T> EmailService<R, T>
where
    R: QrRenderer + ?Sized,
    T: EmailTransport + ?Sized,
{
    pub fn new(renderer: Arc<R>, transport: Arc<T>) -> Self {
        Self {
            renderer,
            transport,
        }
    }

    /// Validate, compose and send. Returns the provider's delivery id.
    ///
    /// Required fields are checked in order `from_email`, `to`, `subject`,
    /// `content_qr`; the first blank one is reported. `html` may be empty.
    pub async fn send_with_qr(&self, request: &QrEmail) -> Result<DeliveryId, AppError> {
        require_non_blank("from_email", &request.from_email)?;
        require_non_blank("to", &request.to)?;
        require_non_blank("subject", &request.subject)?;
        require_non_blank("content_qr", &request.content_qr)?;

        let png = self.renderer.render_png(&request.content_qr)?;
        let html = embed_qr_image(&request.html, &png_base64(&png));

        let email = OutgoingEmail {
            from: request.from_email.clone(),
            to: request.to.clone(),
            subject: request.subject.clone(),
            html,
        };

        let delivery_id = self.transport.send(&email).await.map_err(|e| {
            tracing::warn!(to = %email.to, code = %e.code, "Email transport rejected message");
            e
        })?;

        tracing::info!(to = %email.to, message_id = %delivery_id, "Email sent");

        Ok(delivery_id)
    }
}
