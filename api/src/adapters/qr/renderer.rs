//! QR code rendering
//!
//! Low error correction, auto-sized version, 10px modules and a 4 module quiet zone.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

use super::codec;
use crate::domain::ports::QrRenderer;
use crate::error::QrError;

/// Pixels per QR module
pub const MODULE_SIZE: u32 = 10;
/// Quiet zone width, in modules
pub const BORDER_MODULES: u32 = 4;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// Renders QR codes as black-on-white grayscale images
#[derive(Debug, Clone, Copy)]
pub struct QrCodeRenderer {
    module_size: u32,
    border: u32,
}

impl Default for QrCodeRenderer {
    fn default() -> Self {
        Self {
            module_size: MODULE_SIZE,
            border: BORDER_MODULES,
        }
    }
}

impl QrCodeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `payload` into a raster image.
    ///
    /// The `qrcode` crate picks the smallest version that fits the payload;
    /// payloads too large for version 40 fail with `QrError::Encode`.
    pub fn encode(&self, payload: &str) -> Result<GrayImage, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
            .map_err(|e| QrError::Encode(e.to_string()))?;

        let modules = code.width() as u32;
        let img_size = (modules + 2 * self.border) * self.module_size;
        let mut img = GrayImage::from_pixel(img_size, img_size, LIGHT);

        for (i, color) in code.to_colors().iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let x = (i as u32 % modules + self.border) * self.module_size;
            let y = (i as u32 / modules + self.border) * self.module_size;
            for dy in 0..self.module_size {
                for dx in 0..self.module_size {
                    img.put_pixel(x + dx, y + dy, DARK);
                }
            }
        }

        Ok(img)
    }
}

impl QrRenderer for QrCodeRenderer {
    fn render_png(&self, payload: &str) -> Result<Vec<u8>, QrError> {
        let img = self.encode(payload)?;
        codec::to_png(&img)
    }
}
