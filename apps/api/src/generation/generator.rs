//! Document Generation — AI-or-fallback orchestration.
//!
//! Flow: build prompts → backend calls (resume and cover letter run
//! concurrently) → substitute template text where the backend failed or
//! produced something unusable → parse → render → HTML fragments.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::document::classifier::SectionClassifier;
use crate::document::parse_resume;
use crate::generation::prompts::{
    build_cover_letter_prompt, build_resume_prompt, cover_letter_system, resume_system,
};
use crate::generation::template::{cover_letter_template, resume_template};
use crate::llm_client::{LlmError, TextBackend};
use crate::models::applicant::ApplicantData;
use crate::render::{render_cover_letter, render_resume};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Where a document's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    Backend,
    Template,
}

/// Rendered HTML fragments, as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocuments {
    pub resume: String,
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Source selection
// ────────────────────────────────────────────────────────────────────────────

/// Backend text when usable, else the template. `usable` decides on text
/// that came back without an error.
fn choose_text(
    document: &str,
    outcome: Result<String, LlmError>,
    usable: impl Fn(&str) -> bool,
    template: impl FnOnce() -> String,
) -> (String, TextSource) {
    match outcome {
        Ok(text) if usable(text.as_str()) => {
            info!("{document}: using backend output");
            (text, TextSource::Backend)
        }
        Ok(_) => {
            warn!("{document}: backend output unusable, using template");
            (template(), TextSource::Template)
        }
        Err(LlmError::NotConfigured) => {
            info!("{document}: no backend configured, using template");
            (template(), TextSource::Template)
        }
        Err(e) => {
            warn!("{document}: backend call failed ({e}), using template");
            (template(), TextSource::Template)
        }
    }
}

/// Resume text must carry at least one recognized section.
fn resume_is_usable(text: &str, classifier: &SectionClassifier) -> bool {
    !text.trim().is_empty() && parse_resume(text, classifier).has_recognized_sections()
}

fn letter_is_usable(text: &str) -> bool {
    !text.trim().is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Produces both documents for one applicant. Never fails: backend errors
/// are absorbed by the template fallback.
pub async fn generate_documents(
    backend: &dyn TextBackend,
    data: &ApplicantData,
    classifier: &SectionClassifier,
    today: NaiveDate,
) -> GeneratedDocuments {
    let resume_prompt = build_resume_prompt(data);
    let letter_prompt = build_cover_letter_prompt(data);
    let resume_sys = resume_system();
    let letter_sys = cover_letter_system();

    let (resume_outcome, letter_outcome) = tokio::join!(
        backend.complete(&resume_prompt, &resume_sys),
        backend.complete(&letter_prompt, &letter_sys),
    );

    let (resume_text, resume_source) = choose_text(
        "resume",
        resume_outcome,
        |text| resume_is_usable(text, classifier),
        || resume_template(data),
    );
    let (letter_text, letter_source) = choose_text(
        "cover letter",
        letter_outcome,
        letter_is_usable,
        || cover_letter_template(data),
    );

    let document = parse_resume(&resume_text, classifier);
    info!(
        ?resume_source,
        ?letter_source,
        sections = document.sections.len(),
        "documents generated"
    );

    GeneratedDocuments {
        resume: render_resume(&document, &data.personal_info),
        cover_letter: render_cover_letter(&letter_text, &data.personal_info, today),
    }
}
