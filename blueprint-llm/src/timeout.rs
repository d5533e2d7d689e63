//! Deadline wrapper for summarizers

use async_trait::async_trait;
use blueprint_core::{Summarizer, SummaryError};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Fails with [`SummaryError::Timeout`] when the inner summarizer is slower
/// than the deadline. The inner call is dropped, not awaited.
pub struct DeadlineSummarizer {
    inner: Arc<dyn Summarizer>,
    deadline: Duration,
}

impl DeadlineSummarizer {
    pub fn new(inner: Arc<dyn Summarizer>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait]
impl Summarizer for DeadlineSummarizer {
    fn name(&self) -> &'static str {
        "deadline"
    }

    async fn summarize(&self, source: &str) -> Result<String, SummaryError> {
        match tokio::time::timeout(self.deadline, self.inner.summarize(source)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Summarizer '{}' exceeded {:?}", self.inner.name(), self.deadline);
                Err(SummaryError::Timeout(self.deadline))
            }
        }
    }
}
