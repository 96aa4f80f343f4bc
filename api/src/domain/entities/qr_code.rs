//! Generated QR code entity

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Base64 (standard alphabet, padded) of PNG bytes
pub fn png_base64(png: &[u8]) -> String {
    STANDARD.encode(png)
}

/// A rendered QR code together with its advisory download name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQr {
    /// PNG encoded image bytes
    pub png: Vec<u8>,
    /// `qr_<digest8>_<YYYYMMDD_HHMMSS>.png`
    pub file_name: String,
}

impl GeneratedQr {
    pub fn new(png: Vec<u8>, file_name: String) -> Self {
        Self { png, file_name }
    }

    /// Base64 (standard alphabet, padded) of the PNG bytes
    pub fn to_base64(&self) -> String {
        png_base64(&self.png)
    }
}
