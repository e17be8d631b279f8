//! Axum route handler for document generation.

use axum::{extract::State, Json};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{generate_documents, GeneratedDocuments};
use crate::models::applicant::ApplicantData;
use crate::state::AppState;

/// POST /api/generate-documents
///
/// Builds the resume and cover letter for one applicant and returns both as
/// HTML fragments. Backend failures fall back to the template silently; only
/// invalid input is reported.
pub async fn handle_generate_documents(
    State(state): State<AppState>,
    Json(data): Json<ApplicantData>,
) -> Result<Json<GeneratedDocuments>, AppError> {
    data.validate()?;

    let generation_id = Uuid::new_v4();
    let span = tracing::info_span!("generation", %generation_id);

    let documents = async {
        info!(
            education = data.education.len(),
            experience = data.experience.len(),
            "generating documents"
        );
        let today = chrono::Local::now().date_naive();
        generate_documents(state.llm.as_ref(), &data, &state.classifier, today).await
    }
    .instrument(span)
    .await;

    Ok(Json(documents))
}
