use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Generative backend key. When absent every request uses the template.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub pdf_renderer_bin: String,
    pub pdf_timeout_secs: u64,
    /// Comma-separated section kinds, e.g. `qualifications,education,experience`.
    pub section_precedence: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
            pdf_renderer_bin: "chromium".to_string(),
            pdf_timeout_secs: 60,
            section_precedence: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            pdf_renderer_bin: optional_env("PDF_RENDERER_BIN").unwrap_or(defaults.pdf_renderer_bin),
            pdf_timeout_secs: parse_env("PDF_TIMEOUT_SECS", defaults.pdf_timeout_secs)
                .context("PDF_TIMEOUT_SECS must be a whole number of seconds")?,
            section_precedence: optional_env("SECTION_PRECEDENCE"),
        })
    }
}

/// Value of `key` when set and not blank.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        None => Ok(default),
    }
}
