//! Request-level failures of blueprint assembly

use crate::models::SecurityFinding;
use crate::parser::SyntaxDiagnostic;
use crate::summary::SummaryError;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Blank or whitespace-only input
    #[error("input is empty")]
    EmptyInput,

    /// The snippet does not parse. `text_findings` holds text-rule matches
    /// when text scanning on syntax errors is enabled, and is empty otherwise.
    #[error("syntax error: {diagnostic}")]
    SyntaxInvalid {
        diagnostic: SyntaxDiagnostic,
        text_findings: Vec<SecurityFinding>,
    },

    /// An analyzer failed after a successful parse
    #[error("internal analysis failure: {0}")]
    InternalFailure(String),

    #[error("summary timed out after {0:?}")]
    SummaryTimeout(Duration),

    #[error("summary unavailable: {0}")]
    SummaryUnavailable(String),
}

impl AnalysisError {
    /// Stable text shown to the user, one per kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "Input buffer empty.",
            AnalysisError::SyntaxInvalid { .. } => "Syntax Error: The code provided is not valid Python.",
            AnalysisError::InternalFailure(_) => "Analysis failed unexpectedly. Please try again.",
            AnalysisError::SummaryTimeout(_) => "The summary engine did not answer in time.",
            AnalysisError::SummaryUnavailable(_) => "The summary engine is unavailable.",
        }
    }

    /// Stable machine identifier.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "empty_input",
            AnalysisError::SyntaxInvalid { .. } => "syntax_invalid",
            AnalysisError::InternalFailure(_) => "internal_failure",
            AnalysisError::SummaryTimeout(_) => "summary_timeout",
            AnalysisError::SummaryUnavailable(_) => "summary_unavailable",
        }
    }

    /// True for failures caused by what the user submitted.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalysisError::EmptyInput | AnalysisError::SyntaxInvalid { .. })
    }
}

impl From<SummaryError> for AnalysisError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::Timeout(after) => AnalysisError::SummaryTimeout(after),
            SummaryError::Unavailable(reason) => AnalysisError::SummaryUnavailable(reason),
        }
    }
}
