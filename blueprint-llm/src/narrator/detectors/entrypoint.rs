use crate::narrator::detectors::{top_level_statements, Detector};
use crate::narrator::{Finding, FindingType};
use blueprint_core::SyntaxTree;

/// `if __name__ == "__main__":` guard at module level
pub struct EntrypointDetector;

impl Detector for EntrypointDetector {
    fn detect(&self, tree: &SyntaxTree<'_>) -> Vec<Finding> {
        top_level_statements(tree.root())
            .into_iter()
            .filter(|n| n.kind() == "if_statement")
            .find(|n| {
                n.child_by_field_name("condition").is_some_and(|cond| {
                    let text = tree.text(cond);
                    text.contains("__name__") && text.contains("__main__")
                })
            })
            .map(|n| vec![Finding::new(n.start_position().row + 1, FindingType::Entrypoint)])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{parse, SourceUnit};

    #[test]
    fn test_main_guard() {
        let source = SourceUnit::new("def main():\n    pass\n\nif __name__ == '__main__':\n    main()\n");
        let tree = parse(&source).unwrap();
        let findings = EntrypointDetector.detect(&tree);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 4);
    }

    #[test]
    fn test_other_conditions_ignored() {
        let source = SourceUnit::new("if debug:\n    pass\n");
        let tree = parse(&source).unwrap();
        assert!(EntrypointDetector.detect(&tree).is_empty());
    }
}
