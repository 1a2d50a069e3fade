use crate::SyntaxNode;
use std::sync::Arc;
use trivia_types::{LineIndex, TextSpan};

/// A complete syntax tree: the root node plus the source text it was built from.
///
/// The text is exactly the concatenation of every token and trivia in the
/// tree, so every span in the tree resolves against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    text: Arc<str>,
    root: SyntaxNode,
}

impl SyntaxTree {
    pub(crate) fn new(text: String, root: SyntaxNode) -> Self {
        Self {
            text: Arc::from(text),
            root,
        }
    }

    #[must_use]
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Full source text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span covering the whole source text
    #[must_use]
    pub fn span(&self) -> TextSpan {
        TextSpan::new(0, self.text.len())
    }

    /// Returns true if `span` lies within the bounds of this tree's text.
    #[must_use]
    pub fn contains_span(&self, span: TextSpan) -> bool {
        self.span().contains_span(span)
    }

    /// Source text covered by `span`, or `None` if it is out of bounds
    /// or does not fall on char boundaries.
    #[must_use]
    pub fn slice(&self, span: TextSpan) -> Option<&str> {
        self.text.get(span.start()..span.end())
    }

    /// Build a line index for position conversions.
    #[must_use]
    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(&self.text)
    }
}
