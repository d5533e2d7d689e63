//! Blueprint assembly
//!
//! [`BlueprintAssembler`] runs one request end to end: blank check, parse,
//! complexity, maintainability, security scan, then a single summarizer
//! call. Analyzer failures after a successful parse are all-or-nothing;
//! summarizer failures degrade to a placeholder unless
//! [`BlueprintConfig::require_summary`] is set.

pub mod error;
pub mod health;

pub use error::AnalysisError;
pub use health::{Advice, HealthProfile, RadarScores};

use crate::extractors::complexity::ComplexityAnalyzer;
use crate::extractors::maintainability::maintainability;
use crate::extractors::security::SecurityScanner;
use crate::models::{BlueprintReport, MetricsReport, SecurityFinding, SummaryStatus};
use crate::parser::{PythonParser, SourceUnit, SyntaxTree};
use crate::summary::{Summarizer, SummaryError, SUMMARY_UNAVAILABLE};
use crate::{BlueprintConfig, Error};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Metrics and findings of a parsed snippet, before summarization
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub metrics: MetricsReport,
    pub security_issues: Vec<SecurityFinding>,
}

pub struct BlueprintAssembler {
    config: BlueprintConfig,
    scanner: SecurityScanner,
    summarizer: Arc<dyn Summarizer>,
}

impl BlueprintAssembler {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            config: BlueprintConfig::default(),
            scanner: SecurityScanner::new(),
            summarizer,
        }
    }

    pub fn with_config(mut self, config: BlueprintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scanner(mut self, scanner: SecurityScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn config(&self) -> &BlueprintConfig {
        &self.config
    }

    /// Complexity feeds maintainability, so the order is fixed.
    pub fn measure(&self, tree: &SyntaxTree<'_>) -> crate::Result<MetricsReport> {
        let complexity = ComplexityAnalyzer::new(self.config.complexity_aggregate).analyze(tree)?;
        let tokens = tree.tokens();
        let maintainability = maintainability(tree, &tokens, complexity.score)?;

        Ok(MetricsReport {
            cyclomatic_complexity: complexity.score,
            halstead_volume: maintainability.volume,
            effort: maintainability.effort,
            maintainability_index: maintainability.index,
            lines_of_code: maintainability.lines_of_code,
            halstead: maintainability.halstead,
            units: complexity.units,
        })
    }

    /// Everything except the summary. Deterministic for a given input and
    /// configuration.
    pub fn inspect(&self, source: &SourceUnit) -> Result<Inspection, AnalysisError> {
        if source.is_blank() {
            debug!("Rejecting blank input");
            return Err(AnalysisError::EmptyInput);
        }

        let mut parser = PythonParser::new().map_err(internal)?;
        let tree = match parser.parse(source) {
            Ok(tree) => tree,
            Err(Error::Syntax(diagnostic)) => {
                let text_findings = if self.config.text_rules_on_syntax_error {
                    self.scanner.scan_text_only(source)
                } else {
                    Vec::new()
                };
                info!("Snippet rejected: {} ({} text finding(s))", diagnostic, text_findings.len());
                return Err(AnalysisError::SyntaxInvalid { diagnostic, text_findings });
            }
            Err(other) => return Err(internal(other)),
        };

        let metrics = self.measure(&tree).map_err(internal)?;
        let security_issues = self.scanner.try_scan(source, &tree).map_err(internal)?;

        Ok(Inspection { metrics, security_issues })
    }

    /// Build the full blueprint for `source`.
    pub async fn build(&self, source: &str) -> Result<BlueprintReport, AnalysisError> {
        let started = Instant::now();
        let source = SourceUnit::new(source);
        let Inspection { metrics, security_issues } = self.inspect(&source)?;

        let (ai_summary, summary_status) = match self.summarizer.summarize(source.as_str()).await {
            Ok(text) => (text, SummaryStatus::Generated),
            Err(err) if self.config.require_summary => return Err(err.into()),
            Err(err) => {
                warn!("Summarizer '{}' failed, using placeholder: {}", self.summarizer.name(), err);
                let status = match err {
                    SummaryError::Timeout(_) => SummaryStatus::TimedOut,
                    SummaryError::Unavailable(_) => SummaryStatus::Unavailable,
                };
                (SUMMARY_UNAVAILABLE.to_string(), status)
            }
        };

        info!(
            "Blueprint built in {:?}: CC={} MI={:.2} findings={} summary={:?}",
            started.elapsed(),
            metrics.cyclomatic_complexity,
            metrics.maintainability_index,
            security_issues.len(),
            summary_status
        );

        Ok(BlueprintReport {
            metrics,
            security_issues,
            ai_summary,
            summary_status,
        })
    }
}

impl std::fmt::Debug for BlueprintAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlueprintAssembler")
            .field("config", &self.config)
            .field("scanner", &self.scanner)
            .field("summarizer", &self.summarizer.name())
            .finish()
    }
}

fn internal(err: Error) -> AnalysisError {
    AnalysisError::InternalFailure(err.to_string())
}
