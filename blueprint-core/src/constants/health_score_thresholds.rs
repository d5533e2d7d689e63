//! Health Profile Thresholds
//!
//! Boundaries for the three-axis health radar, the status badges and the
//! refactoring advice shown next to a blueprint.

use serde::{Deserialize, Serialize};

/// Thresholds for the health radar and badges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreThresholds;

impl HealthScoreThresholds {
    /// Radar axes are percentages
    pub const MAX_SCORE: f64 = 100.0;

    /// Structural simplicity loses this much per complexity point
    pub const COMPLEXITY_PENALTY: f64 = 5.0;
    /// Security loses this much per finding
    pub const FINDING_PENALTY: f64 = 25.0;

    /// Maintainability index above this is "Healthy"
    pub const HEALTHY_MAINTAINABILITY: f64 = 75.0;
    /// Cyclomatic complexity above this is "High"
    pub const HIGH_COMPLEXITY: u32 = 10;

    /// Get maintainability badge text
    pub fn maintainability_badge(maintainability_index: f64) -> &'static str {
        if maintainability_index > Self::HEALTHY_MAINTAINABILITY {
            "Healthy"
        } else {
            "Risk"
        }
    }

    /// Get complexity badge text
    pub fn complexity_badge(cyclomatic_complexity: u32) -> &'static str {
        if cyclomatic_complexity > Self::HIGH_COMPLEXITY {
            "High"
        } else {
            "Normal"
        }
    }
}

/// Thresholds that select the refactoring advice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds;

impl QualityThresholds {
    /// Complexity above this asks for decomposition
    pub const REFACTOR_COMPLEXITY: u32 = 8;
    /// Maintainability below this asks for readability work
    pub const LOW_MAINTAINABILITY: f64 = 60.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges() {
        assert_eq!(HealthScoreThresholds::maintainability_badge(80.0), "Healthy");
        assert_eq!(HealthScoreThresholds::maintainability_badge(75.0), "Risk");
        assert_eq!(HealthScoreThresholds::complexity_badge(10), "Normal");
        assert_eq!(HealthScoreThresholds::complexity_badge(11), "High");
    }
}
