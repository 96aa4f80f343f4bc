//! Email domain entities
//!
//! `QrEmail` is what a caller asks for; `OutgoingEmail` is what actually goes
//! to the transport once the QR code has been embedded into the HTML body.

use serde::Serialize;

/// Request to send an email with a QR code appended to its HTML body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrEmail {
    pub from_email: String,
    pub to: String,
    pub subject: String,
    /// May be empty; the QR block then becomes the whole body
    pub html: String,
    /// Text encoded into the QR code
    pub content_qr: String,
}

/// Fully composed message handed to an `EmailTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Provider-assigned identifier of an accepted message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeliveryId(pub String);

impl std::fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
