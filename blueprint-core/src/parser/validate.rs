//! Python 3 checks the tree-sitter grammar leaves to the caller
//!
//! The grammar is deliberately permissive: it still accepts Python 2
//! statements, and its indentation scanner recovers from layouts the
//! interpreter rejects. Those trees carry no error nodes, so they are
//! checked here after a clean parse.

use super::{Preorder, SyntaxDiagnostic};
use tree_sitter::Node;

/// First construct in `root` that Python 3 would refuse to compile.
pub(crate) fn python3_violation(root: Node<'_>, source: &str) -> Option<SyntaxDiagnostic> {
    Preorder::new(root).find_map(|node| check_node(node, source))
}

fn check_node(node: Node<'_>, source: &str) -> Option<SyntaxDiagnostic> {
    match node.kind() {
        "print_statement" => Some(at(node, "Python 2 `print` statement; use print(...)")),
        "exec_statement" => Some(at(node, "Python 2 `exec` statement; use exec(...)")),
        "<>" => Some(at(node, "`<>` is not a Python 3 operator; use `!=`")),
        "except_clause" if has_direct_comma(node) || catches_bare_tuple(node) => {
            Some(at(node, "multiple exception types must be parenthesized"))
        }
        "for_in_clause" if has_direct_comma(node) => {
            Some(at(node, "iterable of a comprehension must be parenthesized"))
        }
        "module" => check_module(node, source),
        "block" => check_block(node, source),
        _ => None,
    }
}

fn at(node: Node<'_>, message: &str) -> SyntaxDiagnostic {
    let position = node.start_position();
    SyntaxDiagnostic {
        message: message.to_string(),
        line: Some(position.row + 1),
        column: Some(position.column + 1),
    }
}

fn has_direct_comma(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == ",");
    found
}

/// `except A, B:` parsed as a tuple expression
fn catches_bare_tuple(node: Node<'_>) -> bool {
    node.named_child(0).is_some_and(|caught| caught.kind() == "expression_list")
}

fn statements(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).filter(|n| !n.is_extra()).collect()
}

/// Whitespace between the start of `node`'s line and `node`, or `None`
/// when something else precedes it on that line.
fn line_prefix<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    let before = source.get(..node.start_byte())?;
    let prefix = &before[before.rfind('\n').map_or(0, |i| i + 1)..];
    prefix
        .chars()
        .all(|c| matches!(c, ' ' | '\t' | '\x0c'))
        .then_some(prefix)
}

/// Leading whitespace of the line `node` starts on.
fn line_indent<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    let Some(before) = source.get(..node.start_byte()) else {
        return "";
    };
    let line = &source[before.rfind('\n').map_or(0, |i| i + 1)..];
    let width = line
        .find(|c: char| !matches!(c, ' ' | '\t' | '\x0c'))
        .unwrap_or(line.len());
    &line[..width]
}

fn check_module(module: Node<'_>, source: &str) -> Option<SyntaxDiagnostic> {
    statements(module)
        .into_iter()
        .find(|stmt| line_prefix(*stmt, source).is_some_and(|prefix| !prefix.is_empty()))
        .map(|stmt| at(stmt, "unexpected indent"))
}

fn check_block(block: Node<'_>, source: &str) -> Option<SyntaxDiagnostic> {
    let body = statements(block);
    let Some(first) = body.first() else {
        let anchor = block.parent().unwrap_or(block);
        return Some(at(anchor, "expected an indented block"));
    };

    let header = block.parent().map_or("", |parent| line_indent(parent, source));
    let mut indent: Option<&str> = None;

    for stmt in &body {
        // Statements sharing a line with the header or a `;` have no indent
        let Some(prefix) = line_prefix(*stmt, source) else {
            continue;
        };
        match indent {
            None => {
                if prefix.len() <= header.len() || !prefix.starts_with(header) {
                    return Some(at(*first, "expected an indented block"));
                }
                indent = Some(prefix);
            }
            Some(expected) if expected != prefix => {
                let message = if prefix.len() > expected.len() {
                    "unexpected indent"
                } else {
                    "unindent does not match any outer indentation level"
                };
                return Some(at(*stmt, message));
            }
            Some(_) => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, SourceUnit};
    use crate::Error;

    fn rejection(src: &str) -> String {
        let source = SourceUnit::new(src);
        match parse(&source) {
            Err(Error::Syntax(diagnostic)) => diagnostic.message,
            Err(other) => panic!("expected a syntax error for {src:?}, got {other}"),
            Ok(_) => panic!("{src:?} was accepted as Python 3"),
        }
    }

    fn accepts(src: &str) {
        let source = SourceUnit::new(src);
        if let Err(err) = parse(&source) {
            panic!("{src:?} was rejected: {err}");
        }
    }

    #[test]
    fn test_rejects_python2_statements() {
        assert!(rejection("print \"hello\"\n").contains("print"));
        rejection("exec user_code\n");
        rejection("if a <> b:\n    pass\n");
        rejection("try:\n    pass\nexcept ValueError, e:\n    pass\n");
    }

    #[test]
    fn test_rejects_bad_indentation() {
        assert_eq!(rejection("if x:\npass\n"), "expected an indented block");
        assert_eq!(rejection("  x = 1\n"), "unexpected indent");
        assert_eq!(rejection("x = 1\n    y = 2\n"), "unexpected indent");
    }

    #[test]
    fn test_rejects_unparenthesized_generator_argument() {
        assert!(rejection("f(x for x in y, 1)\n").contains("parenthesized"));
        assert!(rejection("[x for x in 1, 2]\n").contains("parenthesized"));
    }

    #[test]
    fn test_accepts_valid_layouts() {
        accepts("if x: a = 1; b = 2\n");
        accepts("class A:\n    def f(self):\n        # note\n        return 1\n\n    @property\n    def g(self):\n        pass\n");
        accepts("def f():\n    x = (1 +\n  2)\n    return x\n");
        accepts("for a, b in pairs:\n    print(a, b)\nelse:\n    pass\n");
        accepts("try:\n    run()\nexcept (ValueError, KeyError) as e:\n    log(e)\n");
        accepts("total = sum(x for x in y)\nf((x for x in y), 1)\n");
        accepts("exec(code)\nprint('hi')\n");
        accepts("if a:\n\tb = 1\n\tc = 2\n");
    }
}
