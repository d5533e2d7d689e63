//! Halstead metrics and the Maintainability Index
//!
//! `MI = max(0, 171 - 5.2 ln V - 0.23 CC - 16.2 ln LOC) * 100 / 171`, clamped
//! to `[0, 100]`. `V` and `LOC` are floored at 1 before taking logarithms so
//! empty or trivial snippets stay in range.

use crate::models::HalsteadMetrics;
use crate::parser::{SyntaxTree, TokenStream};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

const MI_BASE: f64 = 171.0;
const MI_VOLUME_COEFF: f64 = 5.2;
const MI_COMPLEXITY_COEFF: f64 = 0.23;
const MI_LOC_COEFF: f64 = 16.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintainabilityReport {
    pub volume: f64,
    pub effort: f64,
    pub index: f64,
    pub lines_of_code: usize,
    pub halstead: HalsteadMetrics,
}

/// Count operators and operands and derive volume, difficulty and effort.
pub fn halstead(tokens: &TokenStream) -> HalsteadMetrics {
    let mut distinct_operators = HashSet::new();
    let mut distinct_operands = HashSet::new();
    let mut total_operators = 0;
    let mut total_operands = 0;

    for token in tokens.operators() {
        distinct_operators.insert(token.lexeme.as_str());
        total_operators += 1;
    }
    for token in tokens.operands() {
        distinct_operands.insert(token.lexeme.as_str());
        total_operands += 1;
    }

    let n1 = distinct_operators.len();
    let n2 = distinct_operands.len();
    let vocabulary = n1 + n2;
    let length = total_operators + total_operands;

    let volume = if vocabulary < 2 {
        0.0
    } else {
        length as f64 * (vocabulary as f64).log2()
    };
    let difficulty = if n2 == 0 {
        0.0
    } else {
        (n1 as f64 / 2.0) * (total_operands as f64 / n2 as f64)
    };

    HalsteadMetrics {
        distinct_operators: n1,
        distinct_operands: n2,
        total_operators,
        total_operands,
        vocabulary,
        length,
        volume,
        difficulty,
        effort: difficulty * volume,
    }
}

/// Maintainability Index on a 0-100 scale.
pub fn maintainability_index(volume: f64, cyclomatic_complexity: u32, lines_of_code: usize) -> f64 {
    let raw = MI_BASE
        - MI_VOLUME_COEFF * volume.max(1.0).ln()
        - MI_COMPLEXITY_COEFF * f64::from(cyclomatic_complexity)
        - MI_LOC_COEFF * (lines_of_code.max(1) as f64).ln();
    (raw.max(0.0) * 100.0 / MI_BASE).clamp(0.0, 100.0)
}

/// Halstead measures plus MI for a parsed snippet.
pub fn maintainability(
    tree: &SyntaxTree<'_>,
    tokens: &TokenStream,
    cyclomatic_complexity: u32,
) -> Result<MaintainabilityReport> {
    let halstead = halstead(tokens);
    let lines_of_code = tree.source().lines_of_code();
    let index = maintainability_index(halstead.volume, cyclomatic_complexity, lines_of_code);

    if !(halstead.volume.is_finite() && halstead.effort.is_finite() && index.is_finite()) {
        return Err(Error::Analysis(format!(
            "Non-finite maintainability metrics: volume={} effort={} index={}",
            halstead.volume, halstead.effort, index
        )));
    }

    debug!(
        "Maintainability: n1={} n2={} N1={} N2={} V={:.2} E={:.2} MI={:.2} LOC={}",
        halstead.distinct_operators,
        halstead.distinct_operands,
        halstead.total_operators,
        halstead.total_operands,
        halstead.volume,
        halstead.effort,
        index,
        lines_of_code
    );

    Ok(MaintainabilityReport {
        volume: halstead.volume,
        effort: halstead.effort,
        index,
        lines_of_code,
        halstead,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, SourceUnit, Token, TokenKind};
    use proptest::prelude::*;

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token { kind, lexeme: lexeme.to_string(), line: 1 }
    }

    #[test]
    fn test_halstead_counts() {
        // x = x + 1
        let tokens: TokenStream = vec![
            tok(TokenKind::Operand, "x"),
            tok(TokenKind::Operator, "="),
            tok(TokenKind::Operand, "x"),
            tok(TokenKind::Operator, "+"),
            tok(TokenKind::Operand, "1"),
        ]
        .into_iter()
        .collect();

        let h = halstead(&tokens);
        assert_eq!(h.distinct_operators, 2);
        assert_eq!(h.distinct_operands, 2);
        assert_eq!(h.total_operators, 2);
        assert_eq!(h.total_operands, 3);
        assert_eq!(h.vocabulary, 4);
        assert_eq!(h.length, 5);
        assert!((h.volume - 10.0).abs() < 1e-9);
        assert!((h.difficulty - 1.5).abs() < 1e-9);
        assert!((h.effort - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_volume_and_difficulty() {
        let single: TokenStream = vec![tok(TokenKind::Operand, "x")].into_iter().collect();
        let h = halstead(&single);
        assert_eq!(h.volume, 0.0);
        assert_eq!(h.effort, 0.0);

        let operators_only: TokenStream =
            vec![tok(TokenKind::Operator, "pass"), tok(TokenKind::Operator, "break")].into_iter().collect();
        let h = halstead(&operators_only);
        assert_eq!(h.difficulty, 0.0);
        assert_eq!(h.effort, 0.0);
    }

    #[test]
    fn test_trivial_snippet_scores_full_marks() {
        assert!((maintainability_index(0.0, 1, 1) - 100.0 * (171.0 - 0.23) / 171.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_from_tree() -> Result<()> {
        let source = SourceUnit::new("def f(a, b):\n    # sum\n    return a + b\n");
        let tree = parse(&source)?;
        let report = maintainability(&tree, &tree.tokens(), 1)?;
        assert_eq!(report.lines_of_code, 2);
        assert!(report.volume > 0.0);
        assert!(report.index > 0.0 && report.index <= 100.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn index_stays_in_range(volume in 0.0f64..1e12, cc in 1u32..10_000, loc in 0usize..1_000_000) {
            let mi = maintainability_index(volume, cc, loc);
            prop_assert!((0.0..=100.0).contains(&mi));
        }

        #[test]
        fn index_is_monotonic(volume in 0.0f64..1e6, cc in 1u32..500, loc in 1usize..10_000,
                              dv in 0.0f64..1e6, dcc in 0u32..50, dloc in 0usize..1_000) {
            let base = maintainability_index(volume, cc, loc);
            prop_assert!(maintainability_index(volume + dv, cc, loc) <= base);
            prop_assert!(maintainability_index(volume, cc + dcc, loc) <= base);
            prop_assert!(maintainability_index(volume, cc, loc + dloc) <= base);
        }
    }
}
