//! Typed views over untyped [`SyntaxNode`]s.
//!
//! A view is a borrowed wrapper that checks the node kind once in `cast` and
//! then offers named accessors for the node's children. Accessors return
//! `Option` because trees produced while the user is typing can be missing
//! any piece.

use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

/// `if (condition) statement [else statement]`
#[derive(Debug, Clone, Copy)]
pub struct IfStatement<'a> {
    node: &'a SyntaxNode,
}

impl<'a> IfStatement<'a> {
    #[must_use]
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::IfStatement).then_some(Self { node })
    }

    #[must_use]
    pub fn syntax(&self) -> &'a SyntaxNode {
        self.node
    }

    #[must_use]
    pub fn if_keyword(&self) -> Option<&'a SyntaxToken> {
        self.node.child_token(SyntaxKind::IfKeyword)
    }

    #[must_use]
    pub fn open_paren_token(&self) -> Option<&'a SyntaxToken> {
        self.node.child_token(SyntaxKind::OpenParen)
    }

    #[must_use]
    pub fn condition(&self) -> Option<&'a SyntaxNode> {
        self.node.child_node(SyntaxKind::Expression)
    }

    #[must_use]
    pub fn close_paren_token(&self) -> Option<&'a SyntaxToken> {
        self.node.child_token(SyntaxKind::CloseParen)
    }

    /// The statement executed when the condition holds
    #[must_use]
    pub fn statement(&self) -> Option<&'a SyntaxNode> {
        self.node.child_nodes().find(|node| node.kind().is_statement())
    }

    #[must_use]
    pub fn else_clause(&self) -> Option<ElseClause<'a>> {
        self.node
            .child_node(SyntaxKind::ElseClause)
            .and_then(ElseClause::cast)
    }
}

/// `else statement`
#[derive(Debug, Clone, Copy)]
pub struct ElseClause<'a> {
    node: &'a SyntaxNode,
}

impl<'a> ElseClause<'a> {
    #[must_use]
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::ElseClause).then_some(Self { node })
    }

    #[must_use]
    pub fn syntax(&self) -> &'a SyntaxNode {
        self.node
    }

    #[must_use]
    pub fn else_keyword(&self) -> Option<&'a SyntaxToken> {
        self.node.child_token(SyntaxKind::ElseKeyword)
    }

    #[must_use]
    pub fn statement(&self) -> Option<&'a SyntaxNode> {
        self.node.child_nodes().find(|node| node.kind().is_statement())
    }
}
