//! Python parsing on top of tree-sitter
//!
//! [`PythonParser`] turns a [`SourceUnit`] into a [`SyntaxTree`] or a
//! [`SyntaxDiagnostic`] pointing at the first error or missing node, or at
//! the first construct Python 3 rejects although the grammar accepts it. Every
//! downstream analyzer walks the same tree, so parsing happens exactly once
//! per blueprint.

pub mod tokens;
mod validate;

use serde::{Deserialize, Serialize};
use std::fmt;
use tree_sitter::{Node, Parser, Tree, TreeCursor};

pub use tokens::{Token, TokenKind, TokenStream};

/// The text of a single submitted snippet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceUnit {
    text: String,
}

impl SourceUnit {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// True for empty or whitespace-only input.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Lines that are neither blank nor pure comments.
    pub fn lines_of_code(&self) -> usize {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .count()
    }
}

impl From<&str> for SourceUnit {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceUnit {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for SourceUnit {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Where and why a snippet failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxDiagnostic {
    pub message: String,
    /// 1-based
    pub line: Option<usize>,
    /// 1-based
    pub column: Option<usize>,
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "{} (line {line}, column {column})", self.message),
            (Some(line), None) => write!(f, "{} (line {line})", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// A parsed snippet, borrowing the source it was built from
pub struct SyntaxTree<'src> {
    tree: Tree,
    source: &'src SourceUnit,
}

impl<'src> SyntaxTree<'src> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &'src SourceUnit {
        self.source
    }

    /// Source text covered by `node`, or an analysis error when the byte
    /// range does not land on character boundaries.
    pub fn try_text(&self, node: Node<'_>) -> crate::Result<&'src str> {
        node.utf8_text(self.source.as_bytes())
            .map_err(|e| crate::Error::Analysis(format!("Node text is not valid UTF-8: {e}")))
    }

    /// Lenient variant of [`try_text`](Self::try_text) for pattern matching.
    pub fn text(&self, node: Node<'_>) -> &'src str {
        self.try_text(node).unwrap_or("")
    }

    /// Depth-first, pre-order walk over every node.
    pub fn nodes(&self) -> Preorder<'_> {
        Preorder::new(self.root())
    }

    /// Operator/operand token stream for Halstead metrics.
    pub fn tokens(&self) -> TokenStream {
        TokenStream::from_tree(self)
    }
}

impl fmt::Debug for SyntaxTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("root", &self.root().kind())
            .field("bytes", &self.source.as_bytes().len())
            .finish()
    }
}

/// Iterative pre-order traversal; deep expression chains never recurse.
pub struct Preorder<'t> {
    cursor: TreeCursor<'t>,
    done: bool,
}

impl<'t> Preorder<'t> {
    pub fn new(node: Node<'t>) -> Self {
        Self { cursor: node.walk(), done: false }
    }
}

impl<'t> Iterator for Preorder<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        if self.done {
            return None;
        }
        let node = self.cursor.node();
        if self.cursor.goto_first_child() || self.cursor.goto_next_sibling() {
            return Some(node);
        }
        loop {
            if !self.cursor.goto_parent() {
                self.done = true;
                return Some(node);
            }
            if self.cursor.goto_next_sibling() {
                return Some(node);
            }
        }
    }
}

/// Reusable Python parser
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> crate::Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(tree_sitter_python::language())
            .map_err(|e| crate::Error::Config(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse `source`. Empty input yields a valid module with no statements.
    pub fn parse<'src>(&mut self, source: &'src SourceUnit) -> crate::Result<SyntaxTree<'src>> {
        let tree = self
            .parser
            .parse(source.as_str(), None)
            .ok_or_else(|| crate::Error::Analysis("Parser produced no tree".to_string()))?;

        if tree.root_node().has_error() {
            let diagnostic = first_error(&tree, source);
            tracing::debug!("Syntax error: {}", diagnostic);
            return Err(crate::Error::Syntax(diagnostic));
        }

        if let Some(diagnostic) = validate::python3_violation(tree.root_node(), source.as_str()) {
            tracing::debug!("Rejected as Python 3: {}", diagnostic);
            return Err(crate::Error::Syntax(diagnostic));
        }

        Ok(SyntaxTree { tree, source })
    }
}

/// One-shot parse with a fresh parser.
pub fn parse(source: &SourceUnit) -> crate::Result<SyntaxTree<'_>> {
    PythonParser::new()?.parse(source)
}

fn first_error(tree: &Tree, source: &SourceUnit) -> SyntaxDiagnostic {
    let culprit = Preorder::new(tree.root_node()).find(|node| node.is_error() || node.is_missing());

    let Some(node) = culprit else {
        return SyntaxDiagnostic {
            message: "invalid syntax".to_string(),
            line: None,
            column: None,
        };
    };

    let position = node.start_position();
    let message = if node.is_missing() {
        format!("expected `{}`", node.kind())
    } else {
        let snippet = node
            .utf8_text(source.as_bytes())
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .trim();
        if snippet.is_empty() {
            "invalid syntax".to_string()
        } else {
            format!("unexpected `{}`", blueprint_utils::safe_truncate(snippet, 24))
        }
    };

    SyntaxDiagnostic {
        message,
        line: Some(position.row + 1),
        column: Some(position.column + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_function() -> crate::Result<()> {
        let source = SourceUnit::new("def f(x):\n    return x + 1\n");
        let tree = parse(&source)?;
        assert_eq!(tree.root().kind(), "module");
        assert!(tree.nodes().any(|n| n.kind() == "function_definition"));
        Ok(())
    }

    #[test]
    fn test_empty_input_is_a_valid_module() -> crate::Result<()> {
        let source = SourceUnit::new("");
        let tree = parse(&source)?;
        assert_eq!(tree.root().named_child_count(), 0);
        Ok(())
    }

    #[test]
    fn test_syntax_error_has_position() {
        let source = SourceUnit::new("x = 1\ndef f(:\n    pass\n");
        match parse(&source) {
            Err(crate::Error::Syntax(diagnostic)) => {
                assert!(diagnostic.line.is_some());
                assert!(!diagnostic.message.is_empty());
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_lines_of_code_skips_blanks_and_comments() {
        let source = SourceUnit::new("# header\n\nx = 1\n   # indented comment\ny = 2  # trailing\n");
        assert_eq!(source.lines_of_code(), 2);
    }

    #[test]
    fn test_blank_detection() {
        assert!(SourceUnit::new("  \n\t\n").is_blank());
        assert!(!SourceUnit::new("pass").is_blank());
    }

    #[test]
    fn test_preorder_visits_root_first() -> crate::Result<()> {
        let source = SourceUnit::new("a = b\n");
        let tree = parse(&source)?;
        let kinds: Vec<_> = tree.nodes().map(|n| n.kind()).collect();
        assert_eq!(kinds.first(), Some(&"module"));
        assert!(kinds.contains(&"assignment"));
        assert_eq!(kinds.iter().filter(|k| **k == "identifier").count(), 2);
        Ok(())
    }
}
