//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod email_transport;
pub mod qr_renderer;

pub use email_transport::EmailTransport;
pub use qr_renderer::QrRenderer;
