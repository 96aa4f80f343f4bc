//! Mock implementations of port traits
//!
//! In-memory implementations that record what they were asked to do and can
//! be configured to fail.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::{DeliveryId, OutgoingEmail};
use crate::domain::ports::{EmailTransport, QrRenderer};
use crate::error::{EmailTransportError, QrError};

// ============================================================================
// Mock Email Transport
// ============================================================================

/// Records every message and returns `mock-message-<n>` ids, or a fixed error
#[derive(Default)]
pub struct MockEmailTransport {
    sent: RwLock<Vec<OutgoingEmail>>,
    failure: Option<EmailTransportError>,
}

impl MockEmailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that rejects every message with the given provider error
    pub fn failing(code: &str, message: &str) -> Self {
        Self {
            sent: RwLock::default(),
            failure: Some(EmailTransportError::new(code, message)),
        }
    }

    /// Messages accepted so far
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl EmailTransport for MockEmailTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryId, EmailTransportError> {
        if let Some(ref failure) = self.failure {
            return Err(failure.clone());
        }

        let mut sent = self.sent.write().unwrap();
        sent.push(email.clone());
        Ok(DeliveryId(format!("mock-message-{}", sent.len())))
    }
}

// ============================================================================
// Failing QR Renderer
// ============================================================================

/// Renderer that always fails, for exercising the internal error path
pub struct FailingQrRenderer;

impl QrRenderer for FailingQrRenderer {
    fn render_png(&self, _payload: &str) -> Result<Vec<u8>, QrError> {
        Err(QrError::Encode("renderer unavailable".to_string()))
    }
}
