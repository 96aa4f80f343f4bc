//! QR code adapter
//!
//! Renders QR codes with the `qrcode` crate and encodes them as PNG with `image`.

pub mod codec;
pub mod renderer;

pub use renderer::QrCodeRenderer;
