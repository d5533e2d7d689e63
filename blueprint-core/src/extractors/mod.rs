//! Analyzers that run over a parsed snippet
//!
//! Each analyzer reads the shared [`SyntaxTree`] and produces plain data;
//! none of them mutate the tree or keep references into it.

pub mod complexity;
pub mod maintainability;
pub mod security;

use crate::parser::SyntaxTree;
use tree_sitter::Node;

/// Dotted callee of a call node with whitespace removed, e.g. `os.system`.
pub(crate) fn callee_name(tree: &SyntaxTree<'_>, call: Node<'_>) -> Option<String> {
    let function = call.child_by_field_name("function")?;
    match function.kind() {
        "identifier" | "attribute" => Some(tree.text(function).split_whitespace().collect()),
        _ => None,
    }
}

/// Positional and keyword arguments of a call, comments excluded.
pub(crate) fn call_arguments(call: Node<'_>) -> Vec<Node<'_>> {
    let Some(arguments) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    if arguments.kind() != "argument_list" {
        return vec![arguments];
    }
    let mut cursor = arguments.walk();
    arguments
        .named_children(&mut cursor)
        .filter(|arg| arg.kind() != "comment")
        .collect()
}

/// Value node of keyword argument `name`, if passed.
pub(crate) fn keyword_argument<'t>(tree: &SyntaxTree<'_>, call: Node<'t>, name: &str) -> Option<Node<'t>> {
    call_arguments(call)
        .into_iter()
        .filter(|arg| arg.kind() == "keyword_argument")
        .find(|arg| {
            arg.child_by_field_name("name")
                .is_some_and(|n| tree.text(n) == name)
        })
        .and_then(|arg| arg.child_by_field_name("value"))
}

/// A string literal with no interpolated parts.
pub(crate) fn is_constant_string(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    match node.kind() {
        "string" => !node.children(&mut cursor).any(|child| child.kind() == "interpolation"),
        "concatenated_string" => node.named_children(&mut cursor).all(is_constant_string),
        _ => false,
    }
}

/// Contents of a plain string literal without prefix and quotes.
pub(crate) fn string_contents<'src>(tree: &SyntaxTree<'src>, node: Node<'_>) -> Option<&'src str> {
    if node.kind() != "string" {
        return None;
    }
    let body = tree.text(node).trim_start_matches(|c: char| c.is_ascii_alphabetic());
    ["\"\"\"", "'''", "\"", "'"]
        .into_iter()
        .find_map(|quote| body.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, SourceUnit};

    fn first<'t>(tree: &'t SyntaxTree<'_>, kind: &str) -> Node<'t> {
        tree.nodes().find(|n| n.kind() == kind).expect("node present")
    }

    #[test]
    fn test_callee_name_strips_whitespace() {
        let source = SourceUnit::new("os . system(cmd)\n");
        let tree = parse(&source).expect("valid python");
        assert_eq!(callee_name(&tree, first(&tree, "call")).as_deref(), Some("os.system"));
    }

    #[test]
    fn test_keyword_argument_lookup() {
        let source = SourceUnit::new("run(cmd, shell=True)\n");
        let tree = parse(&source).expect("valid python");
        let call = first(&tree, "call");
        let value = keyword_argument(&tree, call, "shell").expect("shell kwarg");
        assert_eq!(tree.text(value), "True");
        assert_eq!(call_arguments(call).len(), 2);
        assert!(keyword_argument(&tree, call, "cwd").is_none());
    }

    #[test]
    fn test_constant_strings() {
        let source = SourceUnit::new("a = 'x'\nb = f'{a}'\nc = r\"\"\"doc\"\"\"\n");
        let tree = parse(&source).expect("valid python");
        let strings: Vec<_> = tree.nodes().filter(|n| n.kind() == "string").collect();
        assert!(is_constant_string(strings[0]));
        assert!(!is_constant_string(strings[1]));
        assert_eq!(string_contents(&tree, strings[0]), Some("x"));
        assert_eq!(string_contents(&tree, strings[2]), Some("doc"));
    }
}
