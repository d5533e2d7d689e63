//! Ollama Integration
//!
//! Summaries from a locally hosted model through Ollama's
//! `POST /api/generate` endpoint, non-streaming.

use crate::{LlmError, LlmResult};
use async_trait::async_trait;
use blueprint_core::{Summarizer, SummaryError};
use blueprint_utils::{normalize_whitespace, safe_truncate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Ollama connection and sampling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Ollama server URL
    pub base_url: String,
    pub model: String,
    /// HTTP timeout for one request
    pub request_timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: i32,
    /// Maximum tokens to generate
    pub num_predict: i32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "deepseek-coder:6.7b-instruct".to_string(),
            request_timeout_secs: 120,
            temperature: 0.1,
            top_p: 0.95,
            top_k: 40,
            num_predict: 160,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    num_predict: i32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

pub struct OllamaSummarizer {
    config: OllamaConfig,
    client: Client,
    max_chars: usize,
}

impl OllamaSummarizer {
    pub fn new(config: OllamaConfig, max_chars: usize) -> LlmResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(LlmError::Config("Ollama base_url is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { config, client, max_chars })
    }

    /// Prompt sent for one snippet.
    pub fn prompt(source: &str) -> String {
        format!(
            "Summarize what the following Python code does in one to three plain sentences. \
             Do not repeat the code.\n\n```python\n{source}\n```\n"
        )
    }

    /// Raw completion for `prompt`.
    pub async fn generate(&self, prompt: String) -> LlmResult<String> {
        let url = format!("{}/api/generate", self.config.base_url.trim_end_matches('/'));
        let request_body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
                num_predict: self.config.num_predict,
            },
        };

        debug!("POST {} (model {})", url, self.config.model);
        let response = self.client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Inference(format!("Ollama request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Inference(format!("Ollama error ({status}): {error_text}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Inference(format!("Failed to read Ollama response: {e}")))?;
        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        Ok(parsed.response)
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn summarize(&self, source: &str) -> Result<String, SummaryError> {
        let raw = self
            .generate(Self::prompt(source))
            .await
            .map_err(|e| SummaryError::Unavailable(e.to_string()))?;

        let summary = normalize_whitespace(&raw);
        if summary.is_empty() {
            return Err(SummaryError::Unavailable("Ollama returned an empty response".to_string()));
        }
        Ok(safe_truncate(&summary, self.max_chars))
    }
}
