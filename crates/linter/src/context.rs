use crate::descriptor::RuleDescriptor;
use crate::diagnostics::Diagnostic;
use thiserror::Error;
use trivia_syntax::{SyntaxNode, SyntaxTree};
use trivia_types::TextSpan;

/// Failure to hand a diagnostic to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("diagnostic sink is closed")]
    SinkClosed,

    #[error("diagnostic span {span} lies outside the analyzed text (length {len})")]
    SpanOutOfBounds { span: TextSpan, len: usize },
}

/// Destination for reported diagnostics.
///
/// The traversal driver may call `report` from several threads at once.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ReportError>;
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic) -> Result<(), ReportError> + Send + Sync,
{
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ReportError> {
        self(diagnostic)
    }
}

/// Context handed to a rule for one node visit.
///
/// Lives for a single callback invocation.
#[derive(Clone, Copy)]
pub struct SyntaxNodeContext<'a> {
    node: &'a SyntaxNode,
    tree: &'a SyntaxTree,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> SyntaxNodeContext<'a> {
    #[must_use]
    pub fn new(node: &'a SyntaxNode, tree: &'a SyntaxTree, sink: &'a dyn DiagnosticSink) -> Self {
        Self { node, tree, sink }
    }

    /// The node under inspection
    #[must_use]
    pub fn node(&self) -> &'a SyntaxNode {
        self.node
    }

    /// The tree the node belongs to
    #[must_use]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Forward a diagnostic to the sink.
    ///
    /// The span must lie within the tree's text.
    pub fn report(&self, diagnostic: Diagnostic) -> Result<(), ReportError> {
        if !self.tree.contains_span(diagnostic.span) {
            return Err(ReportError::SpanOutOfBounds {
                span: diagnostic.span,
                len: self.tree.text().len(),
            });
        }
        self.sink.report(diagnostic)
    }

    /// Render `descriptor`'s message with `args` and report it at `span`.
    pub fn report_diagnostic(
        &self,
        descriptor: &'static RuleDescriptor,
        span: TextSpan,
        args: &[&dyn std::fmt::Display],
    ) -> Result<(), ReportError> {
        self.report(Diagnostic::create(descriptor, span, args))
    }
}

impl std::fmt::Debug for SyntaxNodeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxNodeContext")
            .field("node", self.node)
            .finish_non_exhaustive()
    }
}
