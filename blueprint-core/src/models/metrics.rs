//! Metric result models

use crate::constants::ComplexityRank;
use serde::{Deserialize, Serialize};

/// Raw Halstead counts and the measures derived from them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalsteadMetrics {
    /// n1
    pub distinct_operators: usize,
    /// n2
    pub distinct_operands: usize,
    /// N1
    pub total_operators: usize,
    /// N2
    pub total_operands: usize,
    pub vocabulary: usize,
    pub length: usize,
    pub volume: f64,
    pub difficulty: f64,
    pub effort: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Module,
    Function,
    Method,
}

/// Cyclomatic complexity of one analyzable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitComplexity {
    /// `<module>`, `name`, or `Class.name` for methods
    pub name: String,
    pub kind: UnitKind,
    /// 1-based line where the unit starts
    pub line: usize,
    pub complexity: u32,
    pub rank: ComplexityRank,
}

/// Numeric metrics of one snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub cyclomatic_complexity: u32,
    pub halstead_volume: f64,
    pub effort: f64,
    /// Clamped to `[0, 100]`
    pub maintainability_index: f64,
    pub lines_of_code: usize,
    #[serde(default)]
    pub halstead: HalsteadMetrics,
    #[serde(default)]
    pub units: Vec<UnitComplexity>,
}

impl MetricsReport {
    /// The most complex unit, first one wins on ties.
    pub fn hottest_unit(&self) -> Option<&UnitComplexity> {
        self.units
            .iter()
            .fold(None, |best: Option<&UnitComplexity>, unit| match best {
                Some(b) if b.complexity >= unit.complexity => Some(b),
                _ => Some(unit),
            })
    }
}
