//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod email;
pub mod qr;

pub use email::send_email_with_qr;
pub use qr::{download_qr, gen_qr};
