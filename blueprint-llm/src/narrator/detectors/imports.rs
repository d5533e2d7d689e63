use crate::narrator::detectors::Detector;
use crate::narrator::{Finding, FindingType};
use blueprint_core::SyntaxTree;

/// Imported modules, in source order
pub struct ImportsDetector;

impl Detector for ImportsDetector {
    fn detect(&self, tree: &SyntaxTree<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        for node in tree.nodes() {
            let line = node.start_position().row + 1;
            match node.kind() {
                "import_statement" => {
                    let mut cursor = node.walk();
                    for name in node.children_by_field_name("name", &mut cursor) {
                        let module = if name.kind() == "aliased_import" {
                            name.child_by_field_name("name").unwrap_or(name)
                        } else {
                            name
                        };
                        out.push(Finding::new(line, FindingType::Import).with_subject(tree.text(module).to_string()));
                    }
                }
                "import_from_statement" => {
                    if let Some(module) = node.child_by_field_name("module_name") {
                        out.push(Finding::new(line, FindingType::Import).with_subject(tree.text(module).to_string()));
                    }
                }
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{parse, SourceUnit};

    #[test]
    fn test_import_forms() {
        let source = SourceUnit::new("import os, sys as system\nfrom pathlib import Path\nfrom . import sibling\n");
        let tree = parse(&source).unwrap();
        let subjects: Vec<_> = ImportsDetector
            .detect(&tree)
            .into_iter()
            .filter_map(|f| f.subject)
            .collect();
        assert_eq!(subjects, vec!["os", "sys", "pathlib", "."]);
    }
}
