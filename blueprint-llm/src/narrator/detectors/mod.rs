use crate::narrator::{Finding, NarratorConfig};
use blueprint_core::SyntaxTree;
use tree_sitter::Node;

pub mod definitions;
pub mod entrypoint;
pub mod imports;
pub mod io;

pub trait Detector {
    fn detect(&self, tree: &SyntaxTree<'_>) -> Vec<Finding>;
}

pub struct DetectorRegistry {
    detectors: Vec<Box<dyn Detector + Send + Sync>>,
}

impl DetectorRegistry {
    pub fn new(cfg: &NarratorConfig) -> Self {
        let detectors: Vec<Box<dyn Detector + Send + Sync>> = vec![
            Box::new(definitions::DefinitionsDetector),
            Box::new(imports::ImportsDetector),
            Box::new(entrypoint::EntrypointDetector),
            Box::new(io::IoDetector::new(cfg)),
        ];
        Self { detectors }
    }

    pub fn detect_all(&self, tree: &SyntaxTree<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        for d in &self.detectors {
            out.extend(d.detect(tree));
        }
        out
    }
}

/// Module-level statements, with decorators unwrapped.
pub(crate) fn top_level_statements<'t>(root: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .map(|n| {
            if n.kind() == "decorated_definition" {
                n.child_by_field_name("definition").unwrap_or(n)
            } else {
                n
            }
        })
        .collect()
}

/// Dotted name of a call's target, whitespace removed.
pub(crate) fn call_target(tree: &SyntaxTree<'_>, call: Node<'_>) -> Option<String> {
    let function = call.child_by_field_name("function")?;
    matches!(function.kind(), "identifier" | "attribute")
        .then(|| tree.text(function).split_whitespace().collect())
}

/// Name of the innermost function containing `node`.
pub(crate) fn enclosing_function(tree: &SyntaxTree<'_>, node: Node<'_>) -> Option<String> {
    let mut current = node.parent();
    while let Some(n) = current {
        if n.kind() == "function_definition" {
            return n.child_by_field_name("name").map(|name| tree.text(name).to_string());
        }
        current = n.parent();
    }
    None
}
