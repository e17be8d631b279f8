// Document generation: prompts, backend call with template fallback, and the
// HTTP handler. All backend calls go through llm_client::TextBackend.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod template;
