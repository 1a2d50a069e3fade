//! Node and token categories.

/// Category of a syntax node or token.
///
/// Rules register interest in node kinds; the traversal driver dispatches
/// each node to the rules registered for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    // Nodes
    CompilationUnit,
    IfStatement,
    ElseClause,
    Block,
    ExpressionStatement,
    Expression,

    // Tokens
    IfKeyword,
    ElseKeyword,
    Identifier,
    NumberLiteral,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Operator,
    EndOfFile,
}

impl SyntaxKind {
    /// Returns true for node kinds that can appear in statement position.
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::IfStatement | Self::Block | Self::ExpressionStatement
        )
    }
}
