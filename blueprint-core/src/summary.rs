//! The summarizer collaborator
//!
//! A summarizer turns source text into a short human-readable description.
//! The assembler calls it exactly once per successful analysis; it may be
//! slow, and it must be safe to call from several tasks at once.

use async_trait::async_trait;
use std::time::Duration;

/// Placeholder used when the summarizer fails and degradation is allowed
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    /// A host-imposed deadline expired
    #[error("summarizer did not answer within {0:?}")]
    Timeout(Duration),

    /// The summarizer could not produce text
    #[error("summarizer unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Describe what `source` does. Must not retain or mutate the input.
    async fn summarize(&self, source: &str) -> Result<String, SummaryError>;
}

/// Summarizer that always returns the same text
#[derive(Debug, Clone, Default)]
pub struct StaticSummarizer {
    text: String,
}

impl StaticSummarizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn summarize(&self, _source: &str) -> Result<String, SummaryError> {
        Ok(self.text.clone())
    }
}
