//! Blueprint LLM - Summarizer Backends
//!
//! Implementations of the [`Summarizer`] contract from `blueprint-core`:
//! - [`TemplateSummarizer`]: deterministic narrator built from syntax-tree
//!   detectors, no model required
//! - [`OllamaSummarizer`]: a locally hosted model behind Ollama's HTTP API
//! - [`DeadlineSummarizer`]: bounds any other summarizer with a deadline
//!
//! [`engine`] holds the one process-wide summarizer the host initializes at
//! startup and tears down on exit.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod narrator;
pub mod ollama;
pub mod timeout;

pub use narrator::{NarratorConfig, TemplateSummarizer};
pub use ollama::{OllamaConfig, OllamaSummarizer};
pub use timeout::DeadlineSummarizer;

use blueprint_core::Summarizer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Result type for LLM operations
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Error types for LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model inference error
    #[error("Model inference error: {0}")]
    Inference(String),

    /// The engine was initialized twice
    #[error("Summarizer engine is already initialized")]
    AlreadyInitialized,

    /// The engine was used before initialization
    #[error("Summarizer engine is not initialized")]
    NotInitialized,
}

/// Which summarizer implementation to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerBackend {
    #[default]
    Template,
    Ollama,
}

impl std::fmt::Display for SummarizerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarizerBackend::Template => write!(f, "template"),
            SummarizerBackend::Ollama => write!(f, "ollama"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub backend: SummarizerBackend,
    pub ollama: OllamaConfig,
    pub narrator: NarratorConfig,
    /// Upper bound for one summary call in seconds, 0 disables it
    pub deadline_secs: u64,
    /// Summaries longer than this are truncated
    pub max_summary_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            backend: SummarizerBackend::Template,
            ollama: OllamaConfig::default(),
            narrator: NarratorConfig::default(),
            deadline_secs: 0,
            max_summary_chars: 400,
        }
    }
}

/// Build the configured backend, wrapped in a deadline when one is set.
pub fn build_summarizer(config: &SummarizerConfig) -> LlmResult<Arc<dyn Summarizer>> {
    if config.max_summary_chars == 0 {
        return Err(LlmError::Config("max_summary_chars must be positive".to_string()));
    }

    let summarizer: Arc<dyn Summarizer> = match config.backend {
        SummarizerBackend::Template => Arc::new(TemplateSummarizer::new(
            config.narrator.clone(),
            config.max_summary_chars,
        )),
        SummarizerBackend::Ollama => Arc::new(OllamaSummarizer::new(
            config.ollama.clone(),
            config.max_summary_chars,
        )?),
    };

    if config.deadline_secs == 0 {
        return Ok(summarizer);
    }
    Ok(Arc::new(DeadlineSummarizer::new(
        summarizer,
        Duration::from_secs(config.deadline_secs),
    )))
}
