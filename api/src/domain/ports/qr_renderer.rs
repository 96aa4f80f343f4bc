//! QR renderer port trait

use crate::error::QrError;

/// Port trait for turning a text payload into a PNG QR code
///
/// Rendering is CPU-only and fast, so this port is synchronous.
pub trait QrRenderer: Send + Sync {
    /// Encode `payload` and return the PNG bytes
    fn render_png(&self, payload: &str) -> Result<Vec<u8>, QrError>;
}
