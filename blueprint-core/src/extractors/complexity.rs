//! Cyclomatic complexity per unit and per snippet
//!
//! A unit is the module body or a single function. Every decision point adds
//! one to the unit it lexically belongs to; nested functions start their own
//! unit, lambdas and class bodies do not.

use crate::constants::CyclomaticComplexityThresholds;
use crate::models::{UnitComplexity, UnitKind};
use crate::parser::SyntaxTree;
use crate::{ComplexityAggregate, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tree_sitter::Node;

pub const MODULE_UNIT: &str = "<module>";

/// Complexity added by a node of this kind.
pub fn decision_weight(kind: &str) -> u32 {
    match kind {
        "if_statement" | "elif_clause" => 1,
        "for_statement" | "while_statement" => 1,
        "except_clause" | "except_group_clause" => 1,
        "boolean_operator" => 1,
        "if_clause" => 1,
        "conditional_expression" => 1,
        "case_clause" => 1,
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// The snippet's complexity under `aggregate`
    pub score: u32,
    pub aggregate: ComplexityAggregate,
    pub decision_points: u32,
    /// Module first, then functions in source order
    pub units: Vec<UnitComplexity>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityAnalyzer {
    aggregate: ComplexityAggregate,
}

struct Unit {
    name: String,
    kind: UnitKind,
    line: usize,
    decisions: u32,
}

struct Scope {
    name: String,
    is_class: bool,
}

struct Frame<'t> {
    node: Node<'t>,
    unit: usize,
    scope: Option<usize>,
}

impl ComplexityAnalyzer {
    pub fn new(aggregate: ComplexityAggregate) -> Self {
        Self { aggregate }
    }

    pub fn analyze(&self, tree: &SyntaxTree<'_>) -> Result<ComplexityReport> {
        let mut units = vec![Unit {
            name: MODULE_UNIT.to_string(),
            kind: UnitKind::Module,
            line: 1,
            decisions: 0,
        }];
        let mut scopes: Vec<Scope> = Vec::new();
        let mut decision_points = 0;

        let mut stack = vec![Frame { node: tree.root(), unit: 0, scope: None }];
        while let Some(Frame { node, unit, scope }) = stack.pop() {
            let (mut child_unit, mut child_scope) = (unit, scope);

            match node.kind() {
                "function_definition" => {
                    let enclosing = scope.and_then(|i| scopes.get(i));
                    let name = qualify(enclosing, definition_name(tree, node)?);
                    let kind = match enclosing {
                        Some(s) if s.is_class => UnitKind::Method,
                        _ => UnitKind::Function,
                    };
                    units.push(Unit {
                        name: name.clone(),
                        kind,
                        line: node.start_position().row + 1,
                        decisions: 0,
                    });
                    scopes.push(Scope { name, is_class: false });
                    child_unit = units.len() - 1;
                    child_scope = Some(scopes.len() - 1);
                }
                "class_definition" => {
                    let enclosing = scope.and_then(|i| scopes.get(i));
                    let name = qualify(enclosing, definition_name(tree, node)?);
                    scopes.push(Scope { name, is_class: true });
                    child_scope = Some(scopes.len() - 1);
                }
                kind => {
                    let weight = decision_weight(kind);
                    if weight > 0 {
                        if let Some(current) = units.get_mut(unit) {
                            current.decisions += weight;
                        }
                        decision_points += weight;
                    }
                }
            }

            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev().map(|child| Frame {
                node: child,
                unit: child_unit,
                scope: child_scope,
            }));
        }

        let units: Vec<UnitComplexity> = units
            .into_iter()
            .map(|unit| {
                let complexity = 1 + unit.decisions;
                UnitComplexity {
                    name: unit.name,
                    kind: unit.kind,
                    line: unit.line,
                    complexity,
                    rank: CyclomaticComplexityThresholds::rank(complexity),
                }
            })
            .collect();

        let score = match self.aggregate {
            ComplexityAggregate::MaxPerUnit => units.iter().map(|u| u.complexity).max().unwrap_or(1),
            ComplexityAggregate::WholeFile => 1 + decision_points,
        };

        debug!(
            "Complexity: score={} decisions={} units={} ({:?})",
            score,
            decision_points,
            units.len(),
            self.aggregate
        );

        Ok(ComplexityReport {
            score,
            aggregate: self.aggregate,
            decision_points,
            units,
        })
    }
}

/// Snippet complexity under the default max-per-unit policy.
pub fn complexity(tree: &SyntaxTree<'_>) -> Result<u32> {
    Ok(ComplexityAnalyzer::default().analyze(tree)?.score)
}

fn definition_name<'src>(tree: &SyntaxTree<'src>, node: Node<'_>) -> Result<&'src str> {
    match node.child_by_field_name("name") {
        Some(name) => tree.try_text(name),
        None => Ok("<anonymous>"),
    }
}

fn qualify(enclosing: Option<&Scope>, name: &str) -> String {
    match enclosing {
        Some(scope) => format!("{}.{name}", scope.name),
        None => name.to_string(),
    }
}
