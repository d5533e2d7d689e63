//! The assembled blueprint

use super::{MetricsReport, SecurityFinding};
use serde::{Deserialize, Serialize};

/// How `ai_summary` was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Generated,
    TimedOut,
    Unavailable,
}

/// Metrics, findings and summary for one snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintReport {
    #[serde(flatten)]
    pub metrics: MetricsReport,
    pub security_issues: Vec<SecurityFinding>,
    pub ai_summary: String,
    pub summary_status: SummaryStatus,
}

impl BlueprintReport {
    pub fn is_clean(&self) -> bool {
        self.security_issues.is_empty()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
