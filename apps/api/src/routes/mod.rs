pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers::handle_generate_documents;
use crate::pdf::handlers::handle_download_pdf;
use crate::state::AppState;

/// JSON request bodies up to 10 MB (rendered documents are posted back whole).
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("No route for this path".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-documents", post(handle_generate_documents))
        .route("/api/download-pdf", post(handle_download_pdf))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
