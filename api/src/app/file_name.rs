//! Download file names for generated QR codes
//!
//! Names are advisory only: two identical payloads within the same second get
//! the same name.

use chrono::NaiveDateTime;
use sha2::{Digest, Sha256};

/// `qr_<first 8 hex chars of sha256(text)>_<YYYYMMDD_HHMMSS>.png`
pub fn derive_file_name(text: &str, at: NaiveDateTime) -> String {
    let digest = hex::encode(Sha256::digest(text.as_bytes()));
    format!("qr_{}_{}.png", &digest[..8], at.format("%Y%m%d_%H%M%S"))
}
