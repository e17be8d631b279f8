mod config;
mod document;
mod errors;
mod generation;
mod llm_client;
mod models;
mod pdf;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::classifier::SectionClassifier;
use crate::llm_client::{LlmClient, TextBackend, UnconfiguredBackend};
use crate::pdf::ChromiumPdfRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quill API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generative backend
    let llm: Arc<dyn TextBackend> = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; documents will be generated from templates");
            Arc::new(UnconfiguredBackend)
        }
    };

    // Initialize the PDF renderer
    let pdf = Arc::new(ChromiumPdfRenderer::new(
        config.pdf_renderer_bin.clone(),
        config.pdf_timeout_secs,
    ));
    info!(
        "PDF renderer: {} (timeout {}s)",
        config.pdf_renderer_bin, config.pdf_timeout_secs
    );

    // Section heading precedence
    let classifier = match &config.section_precedence {
        Some(list) => SectionClassifier::from_precedence_list(list)
            .context("SECTION_PRECEDENCE must list known section kinds")?,
        None => SectionClassifier::default(),
    };
    let order: Vec<String> = classifier.rules().iter().map(|r| r.kind.to_string()).collect();
    info!("Section precedence: {}", order.join(" > "));

    // Build app state
    let state = AppState {
        config: config.clone(),
        llm,
        pdf,
        classifier: Arc::new(classifier),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
