use crate::narrator::detectors::{top_level_statements, Detector};
use crate::narrator::{Finding, FindingType};
use blueprint_core::SyntaxTree;
use tree_sitter::Node;

/// Module docstring, top-level functions and classes
pub struct DefinitionsDetector;

impl Detector for DefinitionsDetector {
    fn detect(&self, tree: &SyntaxTree<'_>) -> Vec<Finding> {
        let statements = top_level_statements(tree.root());
        let mut out = Vec::new();

        if let Some(doc) = statements.first().and_then(|first| docstring(tree, *first)) {
            out.push(Finding::new(1, FindingType::ModuleDocstring).with_text(doc));
        }

        for node in statements {
            let line = node.start_position().row + 1;
            let Some(name) = node.child_by_field_name("name").map(|n| tree.text(n).to_string()) else {
                continue;
            };
            match node.kind() {
                "function_definition" => {
                    out.push(
                        Finding::new(line, FindingType::FunctionDef)
                            .with_subject(name)
                            .with_notes(parameters(tree, node)),
                    );
                }
                "class_definition" => {
                    out.push(
                        Finding::new(line, FindingType::ClassDef)
                            .with_subject(name)
                            .with_notes(methods(tree, node)),
                    );
                }
                _ => {}
            }
        }
        out
    }
}

/// First non-empty line of a leading string statement.
fn docstring(tree: &SyntaxTree<'_>, statement: Node<'_>) -> Option<String> {
    if statement.kind() != "expression_statement" {
        return None;
    }
    let string = statement.named_child(0).filter(|n| n.kind() == "string")?;
    let body = tree
        .text(string)
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .trim_matches(|c| c == '"' || c == '\'');
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

fn parameters(tree: &SyntaxTree<'_>, function: Node<'_>) -> Vec<String> {
    let Some(params) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut cursor = params.walk();
    params
        .named_children(&mut cursor)
        .filter_map(|param| match param.kind() {
            "identifier" => Some(tree.text(param).to_string()),
            "list_splat_pattern" | "dictionary_splat_pattern" => Some(tree.text(param).to_string()),
            "default_parameter" | "typed_default_parameter" => param
                .child_by_field_name("name")
                .map(|n| tree.text(n).to_string()),
            "typed_parameter" => param.named_child(0).map(|n| tree.text(n).to_string()),
            _ => None,
        })
        .collect()
}

fn methods(tree: &SyntaxTree<'_>, class: Node<'_>) -> Vec<String> {
    let Some(body) = class.child_by_field_name("body") else {
        return Vec::new();
    };
    top_level_statements(body)
        .into_iter()
        .filter(|n| n.kind() == "function_definition")
        .filter_map(|n| n.child_by_field_name("name"))
        .map(|n| tree.text(n).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{parse, SourceUnit};

    fn detect(src: &str) -> Vec<Finding> {
        let source = SourceUnit::new(src);
        let tree = parse(&source).unwrap();
        DefinitionsDetector.detect(&tree)
    }

    #[test]
    fn test_functions_and_parameters() {
        let findings = detect("def f(a, b=1, *args, c: int = 2, **kw):\n    pass\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].subject.as_deref(), Some("f"));
        assert_eq!(findings[0].notes, vec!["a", "b", "*args", "c", "**kw"]);
    }

    #[test]
    fn test_decorated_class_methods() {
        let findings = detect("@dataclass\nclass Repo:\n    def get(self):\n        pass\n    @property\n    def size(self):\n        return 0\n");
        assert_eq!(findings[0].typ, FindingType::ClassDef);
        assert_eq!(findings[0].notes, vec!["get", "size"]);
    }

    #[test]
    fn test_module_docstring() {
        let findings = detect("\"\"\"\nLoads user records.\n\nMore.\n\"\"\"\nx = 1\n");
        assert_eq!(findings[0].typ, FindingType::ModuleDocstring);
        assert_eq!(findings[0].text.as_deref(), Some("Loads user records."));
    }
}
