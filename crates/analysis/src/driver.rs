//! Reference traversal driver.
//!
//! Walks a [`SyntaxTree`] and hands every node to the rules registered for
//! its kind. Trees are immutable and rules are stateless, so disjoint
//! subtrees can be walked on different threads.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use trivia_linter::{CollectingSink, Diagnostic, DiagnosticSink, ReportError, RuleTable};
use trivia_syntax::{SyntaxNode, SyntaxTree};

/// How the driver schedules node visits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Pre-order walk on the calling thread
    #[default]
    Sequential,
    /// Root on the calling thread, then each child subtree on the rayon pool
    Parallel,
}

/// Counters from one traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub nodes_visited: usize,
    pub rule_invocations: usize,
}

impl AnalysisSummary {
    fn combine(self, other: Self) -> Self {
        Self {
            nodes_visited: self.nodes_visited + other.nodes_visited,
            rule_invocations: self.rule_invocations + other.rule_invocations,
        }
    }
}

#[derive(Debug)]
pub struct Analyzer {
    table: RuleTable,
    mode: TraversalMode,
}

impl Analyzer {
    /// Sequential analyzer over `table`
    #[must_use]
    pub fn new(table: RuleTable) -> Self {
        Self {
            table,
            mode: TraversalMode::Sequential,
        }
    }

    /// Analyzer with the built-in rules at their default settings
    #[must_use]
    pub fn with_builtin_rules() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }

    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(RuleTable::with_config(&config.lint)).with_mode(config.traversal)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Run every registered rule over `tree`, reporting into `sink`.
    ///
    /// The first reporting failure stops the traversal.
    pub fn run(
        &self,
        tree: &SyntaxTree,
        sink: &dyn DiagnosticSink,
    ) -> Result<AnalysisSummary, AnalysisError> {
        let summary = match self.mode {
            TraversalMode::Sequential => self.walk(tree.root(), tree, sink)?,
            TraversalMode::Parallel => self.walk_parallel(tree, sink)?,
        };

        tracing::debug!(
            mode = ?self.mode,
            nodes = summary.nodes_visited,
            invocations = summary.rule_invocations,
            "traversal complete"
        );
        Ok(summary)
    }

    /// Run into a fresh [`CollectingSink`] and return the diagnostics sorted
    /// by span, then rule id.
    pub fn collect(&self, tree: &SyntaxTree) -> Result<Vec<Diagnostic>, AnalysisError> {
        let sink = CollectingSink::new();
        self.run(tree, &sink)?;
        Ok(sink.into_sorted())
    }

    fn walk(
        &self,
        node: &SyntaxNode,
        tree: &SyntaxTree,
        sink: &dyn DiagnosticSink,
    ) -> Result<AnalysisSummary, ReportError> {
        let mut summary = AnalysisSummary::default();
        for node in node.descendants() {
            summary.nodes_visited += 1;
            summary.rule_invocations += self.table.dispatch(node, tree, sink)?;
        }
        Ok(summary)
    }

    fn walk_parallel(
        &self,
        tree: &SyntaxTree,
        sink: &dyn DiagnosticSink,
    ) -> Result<AnalysisSummary, ReportError> {
        let root = tree.root();
        let at_root = AnalysisSummary {
            nodes_visited: 1,
            rule_invocations: self.table.dispatch(root, tree, sink)?,
        };

        let subtrees: Vec<&SyntaxNode> = root.child_nodes().collect();
        let below = subtrees
            .par_iter()
            .map(|subtree| self.walk(subtree, tree, sink))
            .try_reduce(AnalysisSummary::default, |a, b| Ok(a.combine(b)))?;

        Ok(at_root.combine(below))
    }
}
