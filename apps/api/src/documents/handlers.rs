use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::documents::acquire_text;
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the resume document.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub text: String,
    /// False when `text` is the fallback guidance rather than document content.
    pub parsed: bool,
    pub file_name: String,
}

/// POST /api/v1/jobs/upload-pdf
///
/// Extracts text from an uploaded resume. Unreadable documents still return 200
/// with guidance text and `parsed: false`.
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut document: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        document = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        document.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    info!("Resume document received: {file_name} ({} bytes)", data.len());

    let acquired = acquire_text(state.text_extractor.clone(), data).await;
    if acquired.is_parsed() {
        info!("Document parsed, text length: {}", acquired.text().len());
    }

    Ok(Json(UploadResponse {
        text: acquired.text().to_string(),
        parsed: acquired.is_parsed(),
        file_name,
    }))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid upload: {}", e.body_text()))
    }
}
