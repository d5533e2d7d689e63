//! Threshold constants used when ranking and describing analysis results

pub mod complexity_thresholds;
pub mod health_score_thresholds;

pub use complexity_thresholds::{ComplexityRank, CyclomaticComplexityThresholds};
pub use health_score_thresholds::{HealthScoreThresholds, QualityThresholds};
