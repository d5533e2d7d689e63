//! Blueprint Core - Analysis Engine and Data Structures
//!
//! This crate turns a Python snippet into a blueprint:
//! - Parsing into a concrete syntax tree and a Halstead token stream
//! - Cyclomatic complexity per unit and for the snippet
//! - Halstead volume, effort and the Maintainability Index
//! - A catalog of security pattern rules
//! - Assembly of everything, plus an external summary, into one report

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
)]

pub mod analysis;
pub mod constants;
pub mod extractors;
pub mod models;
pub mod parser;
pub mod samples;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use analysis::{AnalysisError, BlueprintAssembler, HealthProfile};
pub use constants::{ComplexityRank, CyclomaticComplexityThresholds, HealthScoreThresholds};
pub use extractors::{
    complexity::{complexity, ComplexityAnalyzer, ComplexityReport},
    maintainability::{halstead, maintainability, maintainability_index, MaintainabilityReport},
    security::{scan, scan_source, SecurityRule, SecurityScanner},
};
pub use models::{BlueprintReport, MetricsReport, SecurityFinding, Severity, SummaryStatus};
pub use parser::{parse, PythonParser, SourceUnit, SyntaxDiagnostic, SyntaxTree, TokenStream};
pub use summary::{StaticSummarizer, Summarizer, SummaryError, SUMMARY_UNAVAILABLE};

/// Result type used throughout blueprint core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for blueprint core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source is not valid Python
    #[error("Syntax error: {0}")]
    Syntax(SyntaxDiagnostic),

    /// Analysis error
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Utility crate error
    #[error("Utility error: {0}")]
    Util(#[from] blueprint_utils::UtilError),
}

/// How per-unit complexities combine into the snippet's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityAggregate {
    /// Highest complexity of any single unit
    #[default]
    MaxPerUnit,
    /// One plus every decision point in the snippet
    WholeFile,
}

/// Analysis behaviour knobs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintConfig {
    pub complexity_aggregate: ComplexityAggregate,
    /// Run text-only security rules even when the snippet fails to parse
    pub text_rules_on_syntax_error: bool,
    /// Fail the blueprint instead of substituting a placeholder summary
    pub require_summary: bool,
}

impl BlueprintConfig {
    pub fn load(path: &std::path::Path) -> Result<Self> {
        Ok(blueprint_utils::load_config(path)?)
    }
}
