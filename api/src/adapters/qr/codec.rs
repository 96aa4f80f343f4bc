//! PNG serialization for rendered QR codes

use std::io::Cursor;

use image::{GrayImage, ImageFormat};

use crate::error::QrError;

/// PNG file signature
pub const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

/// Serialize a grayscale raster to PNG bytes
pub fn to_png(image: &GrayImage) -> Result<Vec<u8>, QrError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| QrError::Png(e.to_string()))?;

    let png = buffer.into_inner();
    debug_assert!(png.starts_with(&PNG_MAGIC));
    Ok(png)
}
