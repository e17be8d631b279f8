use std::sync::Arc;

use crate::config::Config;
use crate::document::classifier::SectionClassifier;
use crate::llm_client::TextBackend;
use crate::pdf::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after start-up; capabilities are swapped out in tests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generative backend. `UnconfiguredBackend` when no API key is set.
    pub llm: Arc<dyn TextBackend>,
    pub pdf: Arc<dyn PdfRenderer>,
    /// Section heading precedence, from SECTION_PRECEDENCE or the default order.
    pub classifier: Arc<SectionClassifier>,
}
