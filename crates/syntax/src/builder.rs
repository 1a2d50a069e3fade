use crate::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, SyntaxTree, Trivia, TriviaKind};
use thiserror::Error;
use trivia_types::TextSpan;

/// Error that can occur when building a syntax tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("finish_node() called without a matching start_node()")]
    UnmatchedFinishNode,

    #[error("token() called without a parent node. Call start_node() before adding tokens")]
    TokenWithoutParent,

    #[error("trailing_trivia() must directly follow the token it attaches to")]
    TrailingTriviaWithoutToken,

    #[error("a second root node was finished; a tree has exactly one root")]
    MultipleRoots,

    #[error("builder finished with {count} unfinished node(s) on the stack")]
    UnfinishedNodes { count: usize },

    #[error("builder finished without a root node")]
    MissingRoot,

    #[error("{count} leading trivia entries were never attached to a token")]
    DanglingTrivia { count: usize },
}

/// Builder for constructing syntax trees from a token stream.
///
/// Offsets are assigned as pieces are appended: every trivia and token text is
/// written to the tree's source text in call order, so spans always resolve
/// against [`SyntaxTree::text`].
///
/// ```
/// use trivia_syntax::{SyntaxKind, TreeBuilder, TriviaKind};
///
/// let mut builder = TreeBuilder::new();
/// builder.start_node(SyntaxKind::CompilationUnit);
/// builder.start_node(SyntaxKind::ExpressionStatement);
/// builder.token(SyntaxKind::Identifier, "x")?;
/// builder.trailing_trivia(TriviaKind::Whitespace, " ")?;
/// builder.token(SyntaxKind::Semicolon, ";")?;
/// builder.finish_node()?;
/// builder.token(SyntaxKind::EndOfFile, "")?;
/// builder.finish_node()?;
/// let tree = builder.finish()?;
/// assert_eq!(tree.text(), "x ;");
/// # Ok::<(), trivia_syntax::BuildError>(())
/// ```
#[derive(Default)]
pub struct TreeBuilder {
    stack: Vec<NodeBuilder>,
    text: String,
    pending_leading: Vec<Trivia>,
    root: Option<SyntaxNode>,
    last_was_token: bool,
}

struct NodeBuilder {
    kind: SyntaxKind,
    children: Vec<SyntaxElement>,
    start_offset: usize,
    bounds: Option<Bounds>,
}

/// Token extent seen so far inside a node under construction.
#[derive(Clone, Copy)]
struct Bounds {
    start: usize,
    end: usize,
    full_start: usize,
    full_end: usize,
}

impl Bounds {
    fn extend(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
            full_start: self.full_start,
            full_end: other.full_end,
        }
    }
}

fn merge(existing: Option<Bounds>, next: Bounds) -> Bounds {
    existing.map_or(next, |bounds| bounds.extend(next))
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.last_was_token = false;
        self.stack.push(NodeBuilder {
            kind,
            children: Vec::new(),
            start_offset: self.text.len(),
            bounds: None,
        });
    }

    /// Finish the current node and add it to its parent.
    ///
    /// Finishing the outermost node makes it the tree root.
    pub fn finish_node(&mut self) -> Result<(), BuildError> {
        self.last_was_token = false;
        let node = self.stack.pop().ok_or(BuildError::UnmatchedFinishNode)?;

        let (span, full_span) = node.bounds.map_or_else(
            || {
                let at = TextSpan::at(node.start_offset);
                (at, at)
            },
            |b| (TextSpan::new(b.start, b.end), TextSpan::new(b.full_start, b.full_end)),
        );
        let built = SyntaxNode::new(node.kind, span, full_span, node.children);

        match self.stack.last_mut() {
            Some(parent) => {
                if let Some(bounds) = node.bounds {
                    parent.bounds = Some(merge(parent.bounds, bounds));
                }
                parent.children.push(SyntaxElement::Node(built));
            }
            None if self.root.is_some() => return Err(BuildError::MultipleRoots),
            None => self.root = Some(built),
        }
        Ok(())
    }

    /// Queue trivia that will lead the next token.
    pub fn leading_trivia(&mut self, kind: TriviaKind, text: &str) {
        self.last_was_token = false;
        let span = self.append(text);
        self.pending_leading.push(Trivia::new(kind, text, span));
    }

    /// Add a token to the current node, taking any queued leading trivia.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> Result<(), BuildError> {
        if self.stack.is_empty() {
            return Err(BuildError::TokenWithoutParent);
        }
        let leading = std::mem::take(&mut self.pending_leading);
        let span = self.append(text);
        let token = SyntaxToken::new(kind, text, span, leading);
        let full_start = token.full_span().start();

        let parent = self.stack.last_mut().ok_or(BuildError::TokenWithoutParent)?;
        parent.bounds = Some(merge(
            parent.bounds,
            Bounds {
                start: span.start(),
                end: span.end(),
                full_start,
                full_end: span.end(),
            },
        ));
        parent.children.push(SyntaxElement::Token(token));
        self.last_was_token = true;
        Ok(())
    }

    /// Attach trivia to the trailing side of the token just added.
    pub fn trailing_trivia(&mut self, kind: TriviaKind, text: &str) -> Result<(), BuildError> {
        if !self.last_was_token {
            return Err(BuildError::TrailingTriviaWithoutToken);
        }
        let span = self.append(text);
        let parent = self
            .stack
            .last_mut()
            .ok_or(BuildError::TrailingTriviaWithoutToken)?;
        let Some(SyntaxElement::Token(token)) = parent.children.last_mut() else {
            return Err(BuildError::TrailingTriviaWithoutToken);
        };
        token.trailing.push(Trivia::new(kind, text, span));
        if let Some(bounds) = parent.bounds.as_mut() {
            bounds.full_end = span.end();
        }
        Ok(())
    }

    /// Finish building and return the tree.
    pub fn finish(self) -> Result<SyntaxTree, BuildError> {
        if !self.stack.is_empty() {
            return Err(BuildError::UnfinishedNodes {
                count: self.stack.len(),
            });
        }
        if !self.pending_leading.is_empty() {
            return Err(BuildError::DanglingTrivia {
                count: self.pending_leading.len(),
            });
        }
        let root = self.root.ok_or(BuildError::MissingRoot)?;
        Ok(SyntaxTree::new(self.text, root))
    }

    fn append(&mut self, text: &str) -> TextSpan {
        let start = self.text.len();
        self.text.push_str(text);
        TextSpan::new(start, self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn if_statement(builder: &mut TreeBuilder) -> Result<(), BuildError> {
        builder.start_node(SyntaxKind::IfStatement);
        builder.token(SyntaxKind::IfKeyword, "if")?;
        builder.trailing_trivia(TriviaKind::Whitespace, " ")?;
        builder.token(SyntaxKind::OpenParen, "(")?;
        builder.start_node(SyntaxKind::Expression);
        builder.token(SyntaxKind::Identifier, "x")?;
        builder.finish_node()?;
        builder.token(SyntaxKind::CloseParen, ")")?;
        builder.trailing_trivia(TriviaKind::Whitespace, " ")?;
        builder.start_node(SyntaxKind::Block);
        builder.token(SyntaxKind::OpenBrace, "{")?;
        builder.trailing_trivia(TriviaKind::Whitespace, " ")?;
        builder.token(SyntaxKind::CloseBrace, "}")?;
        builder.trailing_trivia(TriviaKind::EndOfLine, "\n")?;
        builder.finish_node()?;
        builder.finish_node()
    }

    #[test]
    fn test_build_if_statement() {
        let mut builder = TreeBuilder::new();
        builder.start_node(SyntaxKind::CompilationUnit);
        builder.leading_trivia(TriviaKind::Whitespace, "  ");
        if_statement(&mut builder).unwrap();
        builder.token(SyntaxKind::EndOfFile, "").unwrap();
        builder.finish_node().unwrap();
        let tree = builder.finish().unwrap();

        assert_eq!(tree.text(), "  if (x) { }\n");
        let if_node = tree.root().child_node(SyntaxKind::IfStatement).unwrap();
        assert_eq!(if_node.span(), TextSpan::new(2, 12));
        assert_eq!(if_node.full_span(), TextSpan::new(0, 13));

        let keyword = if_node.child_token(SyntaxKind::IfKeyword).unwrap();
        assert_eq!(keyword.span(), TextSpan::new(2, 4));
        assert_eq!(keyword.leading_trivia().len(), 1);
        assert_eq!(keyword.trailing_trivia()[0].text(), " ");

        let paren = if_node.child_token(SyntaxKind::OpenParen).unwrap();
        assert_eq!(paren.span(), TextSpan::new(5, 6));
    }

    #[test]
    fn test_empty_node_is_zero_width() {
        let mut builder = TreeBuilder::new();
        builder.start_node(SyntaxKind::CompilationUnit);
        builder.token(SyntaxKind::Identifier, "abc").unwrap();
        builder.start_node(SyntaxKind::Expression);
        builder.finish_node().unwrap();
        builder.finish_node().unwrap();
        let tree = builder.finish().unwrap();

        let expr = tree.root().child_node(SyntaxKind::Expression).unwrap();
        assert_eq!(expr.span(), TextSpan::at(3));
        assert_eq!(tree.root().span(), TextSpan::new(0, 3));
    }

    #[test]
    fn test_unmatched_finish_node() {
        let mut builder = TreeBuilder::new();
        assert_eq!(builder.finish_node(), Err(BuildError::UnmatchedFinishNode));
    }

    #[test]
    fn test_token_without_parent() {
        let mut builder = TreeBuilder::new();
        assert_eq!(
            builder.token(SyntaxKind::IfKeyword, "if"),
            Err(BuildError::TokenWithoutParent)
        );
    }

    #[test]
    fn test_trailing_trivia_must_follow_token() {
        let mut builder = TreeBuilder::new();
        builder.start_node(SyntaxKind::CompilationUnit);
        builder.start_node(SyntaxKind::Block);
        builder.token(SyntaxKind::OpenBrace, "{").unwrap();
        builder.finish_node().unwrap();
        assert_eq!(
            builder.trailing_trivia(TriviaKind::Whitespace, " "),
            Err(BuildError::TrailingTriviaWithoutToken)
        );
    }

    #[test]
    fn test_finish_errors() {
        let mut builder = TreeBuilder::new();
        builder.start_node(SyntaxKind::CompilationUnit);
        assert!(matches!(
            builder.finish(),
            Err(BuildError::UnfinishedNodes { count: 1 })
        ));

        assert!(matches!(
            TreeBuilder::new().finish(),
            Err(BuildError::MissingRoot)
        ));

        let mut builder = TreeBuilder::new();
        builder.start_node(SyntaxKind::CompilationUnit);
        builder.finish_node().unwrap();
        builder.leading_trivia(TriviaKind::Whitespace, " ");
        assert!(matches!(
            builder.finish(),
            Err(BuildError::DanglingTrivia { count: 1 })
        ));
    }

    #[test]
    fn test_multiple_roots() {
        let mut builder = TreeBuilder::new();
        builder.start_node(SyntaxKind::CompilationUnit);
        builder.finish_node().unwrap();
        builder.start_node(SyntaxKind::CompilationUnit);
        assert_eq!(builder.finish_node(), Err(BuildError::MultipleRoots));
    }
}
