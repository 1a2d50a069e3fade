//! Registry of all available lint rules
//!
//! A [`RuleTable`] maps each [`SyntaxKind`] to the rules that asked to see
//! nodes of that kind. Tables are built once up front and are read-only
//! afterwards, so a traversal driver can share one across threads.

use crate::config::LintConfig;
use crate::context::{DiagnosticSink, ReportError, SyntaxNodeContext};
use crate::descriptor::RuleDescriptor;
use crate::rules::IfSpacingRuleImpl;
use crate::traits::SyntaxNodeRule;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use trivia_syntax::{SyntaxKind, SyntaxNode, SyntaxTree};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a different rule is already registered with id '{0}'")]
    DuplicateRuleId(String),
}

/// Lazily initialized built-in rules.
/// Rules are created once and reused across all calls.
static BUILTIN_RULES: LazyLock<Vec<Arc<dyn SyntaxNodeRule>>> =
    LazyLock::new(|| vec![Arc::new(IfSpacingRuleImpl)]);

static BUILTIN_TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::from_builtin(|_| true));

#[must_use]
pub fn builtin_rules() -> &'static [Arc<dyn SyntaxNodeRule>] {
    &BUILTIN_RULES
}

/// Ids of every built-in rule, in registration order
#[must_use]
pub fn all_rule_ids() -> Vec<&'static str> {
    builtin_rules().iter().map(|rule| rule.name()).collect()
}

/// Builder for a [`RuleTable`]
#[derive(Default)]
pub struct RuleTableBuilder {
    rules: Vec<Arc<dyn SyntaxNodeRule>>,
    by_kind: HashMap<SyntaxKind, Vec<Arc<dyn SyntaxNodeRule>>>,
}

impl RuleTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` under every kind it declares.
    ///
    /// Registering a rule whose descriptor is already present is a no-op: the
    /// instance registered first, and the kinds it declared, are kept. A rule
    /// whose id is already taken by a different descriptor is rejected.
    pub fn register(&mut self, rule: Arc<dyn SyntaxNodeRule>) -> Result<&mut Self, RegistryError> {
        let descriptor = rule.descriptor();

        match self.find(descriptor.id) {
            Some(existing) if existing != descriptor => {
                return Err(RegistryError::DuplicateRuleId(descriptor.id.to_string()));
            }
            Some(_) => return Ok(self),
            None => {}
        }

        for &kind in rule.node_kinds() {
            let entries = self.by_kind.entry(kind).or_default();
            if !entries.iter().any(|entry| Arc::ptr_eq(entry, &rule)) {
                entries.push(Arc::clone(&rule));
            }
        }
        self.rules.push(rule);

        Ok(self)
    }

    fn find(&self, id: &str) -> Option<&'static RuleDescriptor> {
        self.rules
            .iter()
            .map(|rule| rule.descriptor())
            .find(|descriptor| descriptor.id == id)
    }

    #[must_use]
    pub fn build(self) -> RuleTable {
        RuleTable {
            rules: self.rules,
            by_kind: self.by_kind,
        }
    }
}

/// Immutable dispatch table from node kind to interested rules
pub struct RuleTable {
    rules: Vec<Arc<dyn SyntaxNodeRule>>,
    by_kind: HashMap<SyntaxKind, Vec<Arc<dyn SyntaxNodeRule>>>,
}

impl RuleTable {
    #[must_use]
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// Process-wide table holding every built-in rule
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Table of the built-in rules that `config` enables
    #[must_use]
    pub fn with_config(config: &LintConfig) -> Self {
        Self::from_builtin(|descriptor| config.is_enabled(descriptor))
    }

    fn from_builtin(enabled: impl Fn(&RuleDescriptor) -> bool) -> Self {
        let mut builder = RuleTableBuilder::new();
        for rule in builtin_rules() {
            if !enabled(rule.descriptor()) {
                continue;
            }
            if let Err(error) = builder.register(Arc::clone(rule)) {
                tracing::error!(%error, "skipping built-in rule");
            }
        }
        builder.build()
    }

    /// Rules registered for `kind`, in registration order
    #[must_use]
    pub fn rules_for(&self, kind: SyntaxKind) -> &[Arc<dyn SyntaxNodeRule>] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every registered rule once, in registration order
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn SyntaxNodeRule>] {
        &self.rules
    }

    /// Descriptor of every registered rule once, in registration order
    #[must_use]
    pub fn supported_diagnostics(&self) -> Vec<&'static RuleDescriptor> {
        self.rules.iter().map(|rule| rule.descriptor()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Invoke every rule registered for `node`'s kind.
    ///
    /// Returns the number of rules invoked. Stops at the first reporting failure.
    pub fn dispatch(
        &self,
        node: &SyntaxNode,
        tree: &SyntaxTree,
        sink: &dyn DiagnosticSink,
    ) -> Result<usize, ReportError> {
        let rules = self.rules_for(node.kind());
        if rules.is_empty() {
            return Ok(0);
        }

        let ctx = SyntaxNodeContext::new(node, tree, sink);
        for rule in rules {
            tracing::trace!(rule = rule.name(), ?node, "dispatching rule");
            rule.check(&ctx)?;
        }
        Ok(rules.len())
    }
}

impl std::fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.rules.iter().map(|rule| rule.name()).collect();
        f.debug_struct("RuleTable").field("rules", &ids).finish()
    }
}
