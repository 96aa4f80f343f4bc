//! Email transport port trait
//!
//! Defines the interface for handing a composed message to an email-delivery provider.

use async_trait::async_trait;

use crate::domain::entities::{DeliveryId, OutgoingEmail};
use crate::error::EmailTransportError;

/// Port trait for email delivery
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send one message. Exactly one attempt is made; failures carry the
    /// provider's error code and message.
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryId, EmailTransportError>;
}
