//! Complexity Analysis Thresholds
//!
//! Letter ranks for per-unit cyclomatic complexity and the risk bands used
//! when describing a snippet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter rank of a unit's cyclomatic complexity, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplexityRank {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl fmt::Display for ComplexityRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ComplexityRank::A => "A",
            ComplexityRank::B => "B",
            ComplexityRank::C => "C",
            ComplexityRank::D => "D",
            ComplexityRank::E => "E",
            ComplexityRank::F => "F",
        };
        f.write_str(letter)
    }
}

/// Cyclomatic complexity specific thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclomaticComplexityThresholds;

impl CyclomaticComplexityThresholds {
    /// Rank upper bounds (inclusive)
    pub const RANK_A_MAX: u32 = 5;                  // Simple block
    pub const RANK_B_MAX: u32 = 10;                 // Well structured
    pub const RANK_C_MAX: u32 = 20;                 // Slightly complex
    pub const RANK_D_MAX: u32 = 30;                 // More than moderately complex
    pub const RANK_E_MAX: u32 = 40;                 // Complex, alarming

    /// McCabe risk bands
    pub const SIMPLE_COMPLEXITY: u32 = 1;           // No branching
    pub const LOW_RISK: u32 = 10;
    pub const MODERATE_RISK: u32 = 20;
    pub const HIGH_RISK: u32 = 50;

    /// Rank a unit by its complexity.
    pub fn rank(cyclomatic_complexity: u32) -> ComplexityRank {
        match cyclomatic_complexity {
            c if c <= Self::RANK_A_MAX => ComplexityRank::A,
            c if c <= Self::RANK_B_MAX => ComplexityRank::B,
            c if c <= Self::RANK_C_MAX => ComplexityRank::C,
            c if c <= Self::RANK_D_MAX => ComplexityRank::D,
            c if c <= Self::RANK_E_MAX => ComplexityRank::E,
            _ => ComplexityRank::F,
        }
    }

    /// Get risk level based on cyclomatic complexity
    pub fn get_risk_level(cyclomatic_complexity: u32) -> &'static str {
        match cyclomatic_complexity {
            c if c <= Self::SIMPLE_COMPLEXITY => "no risk",
            c if c <= Self::LOW_RISK => "low risk",
            c if c <= Self::MODERATE_RISK => "moderate risk",
            c if c <= Self::HIGH_RISK => "high risk",
            _ => "very high risk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(CyclomaticComplexityThresholds::rank(1), ComplexityRank::A);
        assert_eq!(CyclomaticComplexityThresholds::rank(5), ComplexityRank::A);
        assert_eq!(CyclomaticComplexityThresholds::rank(6), ComplexityRank::B);
        assert_eq!(CyclomaticComplexityThresholds::rank(20), ComplexityRank::C);
        assert_eq!(CyclomaticComplexityThresholds::rank(21), ComplexityRank::D);
        assert_eq!(CyclomaticComplexityThresholds::rank(40), ComplexityRank::E);
        assert_eq!(CyclomaticComplexityThresholds::rank(41), ComplexityRank::F);
    }

    #[test]
    fn test_risk_level() {
        assert_eq!(CyclomaticComplexityThresholds::get_risk_level(1), "no risk");
        assert_eq!(CyclomaticComplexityThresholds::get_risk_level(5), "low risk");
        assert_eq!(CyclomaticComplexityThresholds::get_risk_level(15), "moderate risk");
        assert_eq!(CyclomaticComplexityThresholds::get_risk_level(40), "high risk");
        assert_eq!(CyclomaticComplexityThresholds::get_risk_level(80), "very high risk");
    }

    proptest! {
        #[test]
        fn rank_is_monotonic(a in 0u32..200, b in 0u32..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(CyclomaticComplexityThresholds::rank(lo) <= CyclomaticComplexityThresholds::rank(hi));
        }
    }
}
