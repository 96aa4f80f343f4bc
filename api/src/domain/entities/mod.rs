//! Domain entities
//!
//! Transient value objects owned by a single request. Nothing here is persisted.

pub mod email;
pub mod qr_code;

pub use email::{DeliveryId, OutgoingEmail, QrEmail};
pub use qr_code::{png_base64, GeneratedQr};
