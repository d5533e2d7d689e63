//! Security pattern scanner
//!
//! The scanner owns an ordered catalog of independent [`SecurityRule`]s.
//! Findings are reported in catalog order, and by source position within a
//! rule. A rule whose construct is absent, or whose tree-based matching has
//! no tree to work on, contributes nothing. Rules that can fail override
//! [`SecurityRule::try_evaluate`]; [`SecurityScanner::try_scan`] surfaces the
//! failure while the lenient entry points skip that rule.

pub mod rules;

use crate::models::SecurityFinding;
use crate::parser::{PythonParser, SourceUnit, SyntaxTree};
use tracing::{debug, warn};

pub use rules::{
    DynamicExecutionRule, HardcodedSecretRule, InsecureDeserializationRule, PrivateKeyRule,
    ShellInjectionRule, SilentExceptionRule, WeakHashRule,
};

/// What a rule needs in order to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Raw source text only
    Text,
    /// A successfully parsed tree
    Tree,
}

/// One entry of the scanner catalog
pub trait SecurityRule: Send + Sync {
    /// Stable identifier reported on every finding
    fn id(&self) -> &'static str;

    fn scope(&self) -> RuleScope;

    /// `tree` is `None` when the snippet did not parse. Tree-scoped rules are
    /// never called without one.
    fn evaluate(&self, source: &SourceUnit, tree: Option<&SyntaxTree<'_>>) -> Vec<SecurityFinding>;

    /// Fallible form of [`evaluate`](Self::evaluate), which the scanner calls.
    fn try_evaluate(
        &self,
        source: &SourceUnit,
        tree: Option<&SyntaxTree<'_>>,
    ) -> crate::Result<Vec<SecurityFinding>> {
        Ok(self.evaluate(source, tree))
    }
}

pub struct SecurityScanner {
    rules: Vec<Box<dyn SecurityRule>>,
}

impl SecurityScanner {
    /// Scanner with the full default catalog.
    pub fn new() -> Self {
        Self::empty()
            .with_rule(DynamicExecutionRule)
            .with_rule(HardcodedSecretRule)
            .with_rule(ShellInjectionRule)
            .with_rule(InsecureDeserializationRule)
            .with_rule(SilentExceptionRule)
            .with_rule(WeakHashRule)
            .with_rule(PrivateKeyRule)
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the catalog.
    pub fn with_rule(mut self, rule: impl SecurityRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run every rule against a parsed snippet, skipping rules that fail.
    pub fn scan(&self, source: &SourceUnit, tree: &SyntaxTree<'_>) -> Vec<SecurityFinding> {
        self.run(source, Some(tree), false).unwrap_or_default()
    }

    /// Like [`scan`](Self::scan), but the first failing rule aborts the scan.
    pub fn try_scan(&self, source: &SourceUnit, tree: &SyntaxTree<'_>) -> crate::Result<Vec<SecurityFinding>> {
        self.run(source, Some(tree), true)
    }

    /// Run only text-scoped rules, for snippets that did not parse.
    pub fn scan_text_only(&self, source: &SourceUnit) -> Vec<SecurityFinding> {
        self.run(source, None, false).unwrap_or_default()
    }

    fn run(
        &self,
        source: &SourceUnit,
        tree: Option<&SyntaxTree<'_>>,
        strict: bool,
    ) -> crate::Result<Vec<SecurityFinding>> {
        let mut findings = Vec::new();
        for rule in &self.rules {
            if rule.scope() == RuleScope::Tree && tree.is_none() {
                continue;
            }
            let mut matched = match rule.try_evaluate(source, tree) {
                Ok(matched) => matched,
                Err(err) if strict => {
                    return Err(crate::Error::Analysis(format!("rule {} failed: {err}", rule.id())));
                }
                Err(err) => {
                    warn!("Skipping rule {}: {}", rule.id(), err);
                    continue;
                }
            };
            matched.sort_by_key(|finding| finding.location);
            if !matched.is_empty() {
                debug!("Rule {} matched {} time(s)", rule.id(), matched.len());
            }
            findings.extend(matched);
        }
        Ok(findings)
    }
}

impl Default for SecurityScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SecurityScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityScanner").field("rules", &self.rule_ids()).finish()
    }
}

/// Scan a parsed snippet with the default catalog.
pub fn scan(source: &SourceUnit, tree: &SyntaxTree<'_>) -> Vec<SecurityFinding> {
    SecurityScanner::new().scan(source, tree)
}

/// Parse `text` if possible and scan it; falls back to text-only rules.
pub fn scan_source(text: &str) -> Vec<SecurityFinding> {
    let source = SourceUnit::new(text);
    let scanner = SecurityScanner::new();
    match PythonParser::new().and_then(|mut parser| parser.parse(&source)) {
        Ok(tree) => scanner.scan(&source, &tree),
        Err(_) => scanner.scan_text_only(&source),
    }
}
