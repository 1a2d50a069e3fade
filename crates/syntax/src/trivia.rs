//! Whitespace and comment trivia attached to tokens.

use trivia_types::TextSpan;

/// Classification of a trivia entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// A run of spaces and/or tabs
    Whitespace,
    /// A single line terminator (`\n` or `\r\n`)
    EndOfLine,
    /// `// ...` up to, not including, the line terminator
    SingleLineComment,
    /// `/* ... */`
    MultiLineComment,
}

/// A classified span of non-semantic source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trivia {
    kind: TriviaKind,
    text: Box<str>,
    span: TextSpan,
}

impl Trivia {
    /// Create a trivia entry. `span` must cover exactly `text`.
    #[must_use]
    pub fn new(kind: TriviaKind, text: impl Into<Box<str>>, span: TextSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TriviaKind {
        self.kind
    }

    /// Literal source text of this trivia
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn span(&self) -> TextSpan {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivia_accessors() {
        let trivia = Trivia::new(TriviaKind::Whitespace, "  ", TextSpan::new(2, 4));
        assert_eq!(trivia.kind(), TriviaKind::Whitespace);
        assert_eq!(trivia.text(), "  ");
        assert_eq!(trivia.span(), TextSpan::new(2, 4));
    }
}
