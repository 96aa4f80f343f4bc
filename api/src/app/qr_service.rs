//! QR service
//!
//! Validates the payload, renders the PNG and names the file.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use super::file_name::derive_file_name;
use super::validation::require_non_blank;
use crate::domain::entities::GeneratedQr;
use crate::domain::ports::QrRenderer;
use crate::error::AppError;

/// Service for generating standalone QR codes
pub struct QrService<R>
where
    R: QrRenderer + ?Sized,
{
    renderer: Arc<R>,
}

impl<R> QrService<R>
where
    R: QrRenderer + ?Sized,
{
    pub fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    /// Generate a QR code for `text`, named after the current local time
    pub fn generate(&self, text: &str) -> Result<GeneratedQr, AppError> {
        self.generate_at(text, Local::now().naive_local())
    }

    /// Generate a QR code for `text`, named after `at`
    pub fn generate_at(&self, text: &str, at: NaiveDateTime) -> Result<GeneratedQr, AppError> {
        require_non_blank("text", text)?;

        let png = self.renderer.render_png(text)?;
        let file_name = derive_file_name(text, at);

        tracing::debug!(file_name = %file_name, bytes = png.len(), "QR code generated");

        Ok(GeneratedQr::new(png, file_name))
    }
}
