//! PDF rasterizer boundary.
//!
//! `PdfRenderer` turns a complete HTML page into PDF bytes. The shipped
//! implementation drives headless Chromium's `--print-to-pdf`. One attempt
//! per request; failures surface to the caller.

pub mod handlers;

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

const PDF_MAGIC: &[u8] = b"%PDF";
pub const DEFAULT_FILENAME: &str = "document.pdf";
const MAX_FILENAME_LEN: usize = 100;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start renderer '{bin}': {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("renderer timed out after {0}s")]
    Timeout(u64),

    #[error("renderer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("renderer produced no PDF output")]
    InvalidOutput,
}

/// Complete HTML page in, PDF bytes out.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfError>;
}

/// Headless Chromium (or Chrome) invoked as a subprocess per request.
#[derive(Debug, Clone)]
pub struct ChromiumPdfRenderer {
    bin: String,
    timeout: Duration,
}

impl ChromiumPdfRenderer {
    pub fn new(bin: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            bin: bin.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn command(&self, page: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.bin);
        command
            .arg("--headless")
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", output.display()))
            .arg(format!("file://{}", page.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl PdfRenderer for ChromiumPdfRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        let dir = tempfile::tempdir()?;
        let page = dir.path().join("document.html");
        let output = dir.path().join("document.pdf");
        tokio::fs::write(&page, html).await?;

        debug!("rendering {} bytes of HTML with {}", html.len(), self.bin);
        let mut command = self.command(&page, &output);
        let result = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| PdfError::Timeout(self.timeout.as_secs()))?
            .map_err(|source| PdfError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(PdfError::Failed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let bytes = tokio::fs::read(&output).await.map_err(|e| {
            debug!("no PDF written: {e}");
            PdfError::InvalidOutput
        })?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(PdfError::InvalidOutput);
        }

        info!("PDF rendered: {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Safe attachment filename: path components stripped, characters outside
/// `[A-Za-z0-9 ._-]` replaced, `.pdf` appended when missing. Blank input
/// yields `document.pdf`.
pub fn sanitize_filename(requested: Option<&str>) -> String {
    let Some(requested) = requested else {
        return DEFAULT_FILENAME.to_string();
    };
    let base = requested
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();
    if base.eq_ignore_ascii_case(".pdf") {
        return DEFAULT_FILENAME.to_string();
    }

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILENAME_LEN)
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.');

    if cleaned.is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    if cleaned.to_ascii_lowercase().ends_with(".pdf") {
        cleaned.to_string()
    } else {
        format!("{cleaned}.pdf")
    }
}
