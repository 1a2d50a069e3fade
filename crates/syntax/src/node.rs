use crate::{SyntaxKind, SyntaxToken};
use std::sync::Arc;
use trivia_types::TextSpan;

/// Immutable, shareable syntax tree node.
///
/// Cloning is cheap (reference count bump). Nodes are `Send + Sync`, so any
/// subtree can be handed to another thread while the tree is being walked.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxNode(Arc<NodeData>);

#[derive(PartialEq, Eq, Hash)]
struct NodeData {
    kind: SyntaxKind,
    span: TextSpan,
    full_span: TextSpan,
    children: Box<[SyntaxElement]>,
}

/// A child of a node: either another node or a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxElement {
    #[must_use]
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    #[must_use]
    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            Self::Node(_) => None,
            Self::Token(token) => Some(token),
        }
    }
}

impl SyntaxNode {
    pub(crate) fn new(
        kind: SyntaxKind,
        span: TextSpan,
        full_span: TextSpan,
        children: Vec<SyntaxElement>,
    ) -> Self {
        Self(Arc::new(NodeData {
            kind,
            span,
            full_span,
            children: children.into_boxed_slice(),
        }))
    }

    #[must_use]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    /// Span from the start of the first token to the end of the last token,
    /// trivia excluded. Zero-width for nodes without tokens.
    #[must_use]
    pub fn span(&self) -> TextSpan {
        self.0.span
    }

    /// Span including the leading trivia of the first token and the
    /// trailing trivia of the last token.
    #[must_use]
    pub fn full_span(&self) -> TextSpan {
        self.0.full_span
    }

    /// Direct children in source order
    #[must_use]
    pub fn children(&self) -> &[SyntaxElement] {
        &self.0.children
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.0.children.iter().filter_map(SyntaxElement::as_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = &SyntaxToken> {
        self.0.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// First direct child token of the given kind
    #[must_use]
    pub fn child_token(&self, kind: SyntaxKind) -> Option<&SyntaxToken> {
        self.child_tokens().find(|token| token.kind() == kind)
    }

    /// First direct child node of the given kind
    #[must_use]
    pub fn child_node(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.child_nodes().find(|node| node.kind() == kind)
    }

    /// Pre-order iterator over this node and all nodes below it.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// All tokens below this node, in source order.
    #[must_use]
    pub fn descendant_tokens(&self) -> Vec<&SyntaxToken> {
        let mut tokens = Vec::new();
        collect_tokens(self, &mut tokens);
        tokens
    }

    /// Returns true if both handles point at the same node allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn collect_tokens<'a>(node: &'a SyntaxNode, out: &mut Vec<&'a SyntaxToken>) {
    for child in node.children() {
        match child {
            SyntaxElement::Node(node) => collect_tokens(node, out),
            SyntaxElement::Token(token) => out.push(token),
        }
    }
}

impl std::fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{}", self.kind(), self.span())
    }
}

/// Pre-order node iterator returned by [`SyntaxNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the leftmost child is visited first
        self.stack.extend(node.child_nodes().collect::<Vec<_>>().into_iter().rev());
        Some(node)
    }
}
