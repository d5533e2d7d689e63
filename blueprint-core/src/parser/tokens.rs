//! Operator/operand classification of a parsed snippet's leaves

use super::SyntaxTree;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// Node kinds treated as a single operand, never descended into
const ATOMIC_OPERANDS: &[&str] = &[
    "identifier",
    "string",
    "concatenated_string",
    "integer",
    "float",
    "true",
    "false",
    "none",
    "ellipsis",
];

/// Pure grouping punctuation, not counted as operators
const DELIMITERS: &[&str] = &["(", ")", "[", "]", "{", "}", ",", ":", ";", "\"", "'"];

const SKIPPED: &[&str] = &["comment", "line_continuation"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Operator,
    Operand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based
    pub line: usize,
}

/// Ordered tokens of one snippet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn from_tree(tree: &SyntaxTree<'_>) -> Self {
        let mut tokens = Vec::new();
        let mut stack = vec![tree.root()];

        while let Some(node) = stack.pop() {
            let kind = node.kind();
            if SKIPPED.contains(&kind) {
                continue;
            }

            if ATOMIC_OPERANDS.contains(&kind) {
                tokens.push(token(TokenKind::Operand, tree.text(node), node));
                continue;
            }

            if node.child_count() == 0 {
                let text = tree.text(node);
                if text.is_empty() || DELIMITERS.contains(&kind) {
                    continue;
                }
                let kind = if node.is_named() { TokenKind::Operand } else { TokenKind::Operator };
                tokens.push(token(kind, text, node));
                continue;
            }

            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }

        Self { tokens }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn operators(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Operator)
    }

    pub fn operands(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Operand)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().collect() }
    }
}

fn token(kind: TokenKind, text: &str, node: Node<'_>) -> Token {
    Token {
        kind,
        lexeme: text.to_string(),
        line: node.start_position().row + 1,
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, SourceUnit, TokenKind};

    fn lexemes(src: &str, kind: TokenKind) -> Vec<String> {
        let source = SourceUnit::new(src);
        let tree = parse(&source).expect("valid python");
        tree.tokens()
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.lexeme.clone())
            .collect()
    }

    #[test]
    fn test_assignment_tokens() {
        assert_eq!(lexemes("x = y + 1\n", TokenKind::Operand), vec!["x", "y", "1"]);
        assert_eq!(lexemes("x = y + 1\n", TokenKind::Operator), vec!["=", "+"]);
    }

    #[test]
    fn test_string_literal_is_one_operand() {
        let operands = lexemes("s = 'a {b} c'\n", TokenKind::Operand);
        assert_eq!(operands, vec!["s", "'a {b} c'"]);
    }

    #[test]
    fn test_keywords_are_operators_and_grouping_is_not() {
        let operators = lexemes("def f(a, b):\n    return a\n", TokenKind::Operator);
        assert_eq!(operators, vec!["def", "return"]);
    }

    #[test]
    fn test_comments_are_ignored() {
        let source = SourceUnit::new("# only a comment\nx = 1  # trailing\n");
        let tree = parse(&source).expect("valid python");
        assert!(tree.tokens().iter().all(|t| !t.lexeme.starts_with('#')));
        assert_eq!(tree.tokens().len(), 3);
    }

    #[test]
    fn test_empty_source_has_no_tokens() {
        let source = SourceUnit::new("");
        let tree = parse(&source).expect("empty is valid");
        assert!(tree.tokens().is_empty());
    }
}
