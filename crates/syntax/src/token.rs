use crate::{SyntaxKind, Trivia};
use trivia_types::TextSpan;

/// Immutable leaf of the syntax tree.
///
/// `span` covers the token text only. Leading and trailing trivia are kept
/// in source order and are covered by [`full_span`](Self::full_span).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    kind: SyntaxKind,
    text: Box<str>,
    span: TextSpan,
    pub(crate) leading: Vec<Trivia>,
    pub(crate) trailing: Vec<Trivia>,
}

impl SyntaxToken {
    pub(crate) fn new(kind: SyntaxKind, text: &str, span: TextSpan, leading: Vec<Trivia>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            leading,
            trailing: Vec::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Token text without trivia
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn span(&self) -> TextSpan {
        self.span
    }

    /// Span including leading and trailing trivia
    #[must_use]
    pub fn full_span(&self) -> TextSpan {
        let start = self.leading.first().map_or(self.span.start(), |t| t.span().start());
        let end = self.trailing.last().map_or(self.span.end(), |t| t.span().end());
        TextSpan::new(start, end)
    }

    #[must_use]
    pub fn leading_trivia(&self) -> &[Trivia] {
        &self.leading
    }

    #[must_use]
    pub fn trailing_trivia(&self) -> &[Trivia] {
        &self.trailing
    }
}

impl std::fmt::Display for SyntaxToken {
    /// Writes the token with its trivia, reproducing the source text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for trivia in &self.leading {
            f.write_str(trivia.text())?;
        }
        f.write_str(&self.text)?;
        for trivia in &self.trailing {
            f.write_str(trivia.text())?;
        }
        Ok(())
    }
}
