//! Axum route handler for PDF download.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::pdf::sanitize_filename;
use crate::render::wrap_document;
use crate::state::AppState;

const MIN_CONTENT_LEN: usize = 10;

#[derive(Debug, Deserialize)]
pub struct DownloadPdfRequest {
    pub content: Option<String>,
    /// `resume` or `cover-letter`; informational only.
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    pub filename: Option<String>,
}

/// Fragments are wrapped into a styled page; complete documents pass through.
fn printable_page(content: &str) -> String {
    let head: String = content
        .trim_start()
        .chars()
        .take(9)
        .collect::<String>()
        .to_ascii_lowercase();
    if head.starts_with("<!doctype") || head.starts_with("<html") {
        content.to_string()
    } else {
        wrap_document(content)
    }
}

/// POST /api/download-pdf
///
/// Renders the posted HTML to PDF and returns it as an attachment.
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Json(request): Json<DownloadPdfRequest>,
) -> Result<Response, AppError> {
    let content = request
        .content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No content provided".to_string()))?;
    if content.chars().count() < MIN_CONTENT_LEN {
        return Err(AppError::Validation("Content too short".to_string()));
    }

    let filename = sanitize_filename(request.filename.as_deref());
    info!(
        document_type = request.document_type.as_deref().unwrap_or("unspecified"),
        content_len = content.len(),
        %filename,
        "PDF requested"
    );

    let pdf = state.pdf.render(&printable_page(content)).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
