//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod email_service;
pub mod file_name;
pub mod html_embed;
pub mod qr_service;
pub mod validation;

pub use email_service::EmailService;
pub use qr_service::QrService;
