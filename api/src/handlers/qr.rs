//! QR code handlers
//!
//! Endpoints returning a QR code either as base64 JSON or as a PNG download.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

/// Request body for QR generation
#[derive(Debug, Deserialize)]
pub struct GenerateQrRequest {
    /// Text to encode. Missing is treated like blank.
    #[serde(default)]
    pub text: String,
}

/// Response body for QR generation
#[derive(Debug, Serialize)]
pub struct GenerateQrResponse {
    pub qr_code_base64: String,
    pub file_name: String,
    pub success: bool,
    pub message: String,
}

/// Query params for QR download
#[derive(Debug, Deserialize)]
pub struct DownloadQrParams {
    pub text: String,
}

/// POST /gen-qr
///
/// Generate a QR code and return it as base64 PNG.
pub async fn gen_qr(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQrRequest>, JsonRejection>,
) -> Result<Json<GenerateQrResponse>, AppError> {
    let Json(request) = payload?;
    let qr = state.qr_service.generate(&request.text)?;

    Ok(Json(GenerateQrResponse {
        qr_code_base64: qr.to_base64(),
        file_name: qr.file_name,
        success: true,
        message: "QR code generated successfully".to_string(),
    }))
}

/// GET /download-qr?text=...
///
/// Generate a QR code and return the PNG as an attachment.
pub async fn download_qr(
    State(state): State<AppState>,
    params: Result<Query<DownloadQrParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let qr = state.qr_service.generate(&params.text)?;

    let disposition = format!("attachment; filename={}", qr.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        qr.png,
    )
        .into_response())
}
