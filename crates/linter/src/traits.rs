//! Trait hierarchy for lint rules.
//!
//! Rules are stateless `Send + Sync` values. The host may invoke one rule on
//! many nodes at once from different threads; everything a rule needs comes
//! from the [`SyntaxNodeContext`] it is given.

use crate::context::{ReportError, SyntaxNodeContext};
use crate::descriptor::RuleDescriptor;
use trivia_syntax::SyntaxKind;

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Static identity of this rule
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// Unique identifier for this rule (e.g., `"IfSpacing"`)
    fn name(&self) -> &'static str {
        self.descriptor().id
    }
}

/// Lint rule invoked once per syntax node of the kinds it registers for
///
/// Examples: `IfSpacing`
pub trait SyntaxNodeRule: LintRule {
    /// Node kinds this rule wants to be called for
    fn node_kinds(&self) -> &'static [SyntaxKind];

    /// Check one node.
    ///
    /// Only fails when the sink rejects a diagnostic; style violations are
    /// reported through `ctx`, never returned as errors.
    fn check(&self, ctx: &SyntaxNodeContext<'_>) -> Result<(), ReportError>;
}
