//! # Trivia-aware lint rules
//!
//! Rules register for the [`SyntaxKind`](trivia_syntax::SyntaxKind)s they
//! care about. A host traversal driver walks a
//! [`SyntaxTree`](trivia_syntax::SyntaxTree) and hands each matching node to
//! [`RuleTable::dispatch`], which invokes the rules with a
//! [`SyntaxNodeContext`]. Rules inspect token trivia and report
//! [`Diagnostic`]s through the host's [`DiagnosticSink`].
//!
//! ```rust,ignore
//! let sink = CollectingSink::new();
//! for node in tree.root().descendants() {
//!     RuleTable::builtin().dispatch(node, &tree, &sink)?;
//! }
//! let diagnostics = sink.into_sorted();
//! ```

mod config;
mod context;
mod descriptor;
mod diagnostics;
mod registry;
mod rules;
mod sink;
mod traits;

pub use config::{LintConfig, RuleSetting};
pub use context::{DiagnosticSink, ReportError, SyntaxNodeContext};
pub use descriptor::RuleDescriptor;
pub use diagnostics::Diagnostic;
pub use registry::{all_rule_ids, builtin_rules, RegistryError, RuleTable, RuleTableBuilder};
pub use rules::{IfSpacingRuleImpl, IF_SPACING};
pub use sink::{ChannelSink, CollectingSink};
pub use traits::{LintRule, SyntaxNodeRule};
pub use trivia_types::DiagnosticSeverity;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust,ignore
/// use trivia_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::LintConfig;
    pub use crate::context::{DiagnosticSink, ReportError, SyntaxNodeContext};
    pub use crate::descriptor::RuleDescriptor;
    pub use crate::diagnostics::Diagnostic;
    pub use crate::registry::RuleTable;
    pub use crate::traits::{LintRule, SyntaxNodeRule};
    pub use trivia_types::DiagnosticSeverity;
}
