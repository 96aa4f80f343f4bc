//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod qr;
pub mod ses;

pub use qr::QrCodeRenderer;
pub use ses::SesEmailTransport;
