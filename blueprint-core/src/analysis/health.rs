//! Health profile shown next to a blueprint
//!
//! Three radar axes on a 0-100 scale (higher is healthier), two badges and a
//! single piece of refactoring advice.

use crate::constants::{HealthScoreThresholds, QualityThresholds};
use crate::models::{BlueprintReport, MetricsReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarScores {
    pub maintainability: f64,
    pub structural_simplicity: f64,
    pub security: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    ReduceComplexity,
    ImproveReadability,
    Solid,
}

impl Advice {
    pub fn message(self) -> &'static str {
        match self {
            Advice::ReduceComplexity => {
                "High Complexity: Consider breaking this function into smaller sub-functions."
            }
            Advice::ImproveReadability => {
                "Low Maintainability: Code is dense. Add comments and meaningful variable names."
            }
            Advice::Solid => "Structure looks solid. Ready for deployment.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthProfile {
    pub radar: RadarScores,
    pub maintainability_badge: &'static str,
    pub complexity_badge: &'static str,
    pub advice: Advice,
}

impl HealthProfile {
    pub fn from_metrics(metrics: &MetricsReport, finding_count: usize) -> Self {
        let mi = metrics.maintainability_index;
        let cc = metrics.cyclomatic_complexity;

        let radar = RadarScores {
            maintainability: mi.min(HealthScoreThresholds::MAX_SCORE),
            structural_simplicity: (HealthScoreThresholds::MAX_SCORE
                - f64::from(cc) * HealthScoreThresholds::COMPLEXITY_PENALTY)
                .max(0.0),
            security: (HealthScoreThresholds::MAX_SCORE
                - finding_count as f64 * HealthScoreThresholds::FINDING_PENALTY)
                .max(0.0),
        };

        let advice = if cc > QualityThresholds::REFACTOR_COMPLEXITY {
            Advice::ReduceComplexity
        } else if mi < QualityThresholds::LOW_MAINTAINABILITY {
            Advice::ImproveReadability
        } else {
            Advice::Solid
        };

        Self {
            radar,
            maintainability_badge: HealthScoreThresholds::maintainability_badge(mi),
            complexity_badge: HealthScoreThresholds::complexity_badge(cc),
            advice,
        }
    }

    pub fn assess(report: &BlueprintReport) -> Self {
        Self::from_metrics(&report.metrics, report.security_issues.len())
    }
}
