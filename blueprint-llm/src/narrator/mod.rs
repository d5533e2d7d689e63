//! Template narrator
//!
//! Parses the snippet, runs the syntax detectors, folds their findings into
//! an [`Outline`] and renders that as a few sentences. Deterministic and
//! local, so it doubles as the fallback when no model is configured.

pub mod aggregate;
pub mod config;
pub mod detectors;
pub mod findings;
pub mod render;

pub use aggregate::{aggregate_findings, Outline};
pub use config::NarratorConfig;
pub use detectors::DetectorRegistry;
pub use findings::{Finding, FindingType};
pub use render::render_summary;

use async_trait::async_trait;
use blueprint_core::{PythonParser, SourceUnit, Summarizer, SummaryError};
use blueprint_utils::safe_truncate;
use tracing::debug;

pub struct TemplateSummarizer {
    config: NarratorConfig,
    registry: DetectorRegistry,
    max_chars: usize,
}

impl TemplateSummarizer {
    pub fn new(config: NarratorConfig, max_chars: usize) -> Self {
        let registry = DetectorRegistry::new(&config);
        Self {
            config,
            registry,
            max_chars,
        }
    }

    /// Narrate `source` synchronously.
    pub fn narrate(&self, source: &str) -> Result<String, SummaryError> {
        let source = SourceUnit::new(source);
        let mut parser = PythonParser::new().map_err(|e| SummaryError::Unavailable(e.to_string()))?;
        let tree = parser
            .parse(&source)
            .map_err(|e| SummaryError::Unavailable(e.to_string()))?;

        let findings = self.registry.detect_all(&tree);
        let statement_count = detectors::top_level_statements(tree.root()).len();
        debug!("Narrator collected {} finding(s)", findings.len());

        let outline = aggregate_findings(&findings, statement_count, &self.config);
        Ok(safe_truncate(&render_summary(&outline, &self.config), self.max_chars))
    }
}

#[async_trait]
impl Summarizer for TemplateSummarizer {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn summarize(&self, source: &str) -> Result<String, SummaryError> {
        self.narrate(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::samples::DEMO_SNIPPET;

    fn narrator() -> TemplateSummarizer {
        TemplateSummarizer::new(NarratorConfig::default(), 400)
    }

    #[test]
    fn test_demo_summary() {
        assert_eq!(
            narrator().narrate(DEMO_SNIPPET).unwrap(),
            "Defines function database_connect(user, password). Imports os."
        );
    }

    #[test]
    fn test_script_with_io_and_entrypoint() {
        let src = "\"\"\"Backs up the settings file.\"\"\"\nimport shutil\n\ndef main():\n    shutil.copy('a', 'b')\n\nif __name__ == '__main__':\n    main()\n";
        assert_eq!(
            narrator().narrate(src).unwrap(),
            "Backs up the settings file. Defines function main(). Performs file I/O via shutil.copy in main."
        );
    }

    #[test]
    fn test_invalid_source_is_unavailable() {
        assert!(matches!(narrator().narrate("def broken(:"), Err(SummaryError::Unavailable(_))));
    }

    #[test]
    fn test_output_is_truncated() {
        let narrator = TemplateSummarizer::new(NarratorConfig::default(), 20);
        let summary = narrator.narrate(DEMO_SNIPPET).unwrap();
        assert!(summary.len() <= 20);
        assert!(summary.ends_with("..."));
    }

    #[tokio::test]
    async fn test_summarizer_contract() {
        let summary = narrator().summarize("x = 1\ny = 2\n").await.unwrap();
        assert_eq!(summary, "A top-level script of 2 statement(s).");
    }
}
