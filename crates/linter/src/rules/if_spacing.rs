use crate::context::{ReportError, SyntaxNodeContext};
use crate::descriptor::RuleDescriptor;
use crate::traits::{LintRule, SyntaxNodeRule};
use trivia_syntax::ast::IfStatement;
use trivia_syntax::{SyntaxKind, TextSpan, TriviaKind};
use trivia_types::DiagnosticSeverity;

pub static IF_SPACING: RuleDescriptor = RuleDescriptor {
    id: "IfSpacing",
    title: "If statement must have a space between 'if' and the boolean expression",
    message_format:
        "If statements must contain a space between the 'if' keyword and the boolean expression",
    category: "Syntax",
    default_severity: DiagnosticSeverity::Warning,
    enabled_by_default: true,
    description: "Requires exactly one space between the `if` keyword and its opening parenthesis",
};

/// Lint rule that requires `if (` rather than `if(` or `if  (`
///
/// Only the *last* trailing trivia of the keyword is judged: `if/*x*/ (` passes
/// because a single space follows the comment, while `if/* */(` is reported.
/// The diagnostic covers the keyword up to (not including) the parenthesis.
pub struct IfSpacingRuleImpl;

impl LintRule for IfSpacingRuleImpl {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &IF_SPACING
    }
}

impl SyntaxNodeRule for IfSpacingRuleImpl {
    fn node_kinds(&self) -> &'static [SyntaxKind] {
        &[SyntaxKind::IfStatement]
    }

    fn check(&self, ctx: &SyntaxNodeContext<'_>) -> Result<(), ReportError> {
        let Some(if_stmt) = IfStatement::cast(ctx.node()) else {
            return Ok(());
        };

        let (Some(keyword), Some(open_paren)) = (if_stmt.if_keyword(), if_stmt.open_paren_token())
        else {
            tracing::trace!(node = ?ctx.node(), "skipping incomplete if statement");
            return Ok(());
        };

        let Some(span) = TextSpan::try_new(keyword.span().start(), open_paren.span().start())
        else {
            tracing::trace!(node = ?ctx.node(), "skipping if statement with paren before keyword");
            return Ok(());
        };

        let single_space = keyword
            .trailing_trivia()
            .last()
            .is_some_and(|trivia| trivia.kind() == TriviaKind::Whitespace && trivia.text() == " ");
        if single_space {
            return Ok(());
        }

        ctx.report_diagnostic(&IF_SPACING, span, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::sink::CollectingSink;
    use trivia_syntax::SyntaxTree;
    use trivia_test_utils::{format_diagnostics, parse_fixture};

    fn check_all(tree: &SyntaxTree) -> Vec<Diagnostic> {
        let sink = CollectingSink::new();
        for node in tree.root().descendants() {
            if node.kind() == SyntaxKind::IfStatement {
                IfSpacingRuleImpl
                    .check(&SyntaxNodeContext::new(node, tree, &sink))
                    .unwrap();
            }
        }
        sink.into_sorted()
    }

    fn check_source(source: &str) -> Vec<Diagnostic> {
        check_all(&parse_fixture(source).unwrap())
    }

    #[test]
    fn test_single_space_is_compliant() {
        assert!(check_source("if (x) { }").is_empty());
    }

    #[test]
    fn test_missing_space_is_reported() {
        let diagnostics = check_source("if(x) { }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id(), "IfSpacing");
        assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
        assert_eq!(diagnostics[0].span, TextSpan::new(0, 2));
    }

    #[test]
    fn test_two_spaces_are_reported() {
        let diagnostics = check_source("if  (x) { }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, TextSpan::new(0, 4));
    }

    #[test]
    fn test_tab_is_reported() {
        let diagnostics = check_source("if\t(x) { }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, TextSpan::new(0, 3));
    }

    #[test]
    fn test_newline_is_reported() {
        let diagnostics = check_source("if\n(x) { }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, TextSpan::new(0, 3));
    }

    #[test]
    fn test_space_after_comment_is_compliant() {
        assert!(check_source("if/*c*/ (x) { }").is_empty());
    }

    #[test]
    fn test_comment_before_paren_is_reported() {
        let diagnostics = check_source("if/* */(x) { }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, TextSpan::new(0, 7));
    }

    #[test]
    fn test_comment_after_space_is_reported() {
        let tree = parse_fixture("if /*x*/(y) z;").unwrap();
        let if_stmt = tree
            .root()
            .descendants()
            .find_map(IfStatement::cast)
            .unwrap();
        let kinds: Vec<_> = if_stmt
            .if_keyword()
            .unwrap()
            .trailing_trivia()
            .iter()
            .map(|trivia| trivia.kind())
            .collect();
        assert_eq!(kinds, vec![TriviaKind::Whitespace, TriviaKind::MultiLineComment]);

        let diagnostics = check_all(&tree);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, TextSpan::new(0, 8));
    }

    #[test]
    fn test_span_is_absolute_for_nested_statements() {
        let source = "{\n    if (a) {\n        if(b) c;\n    }\n}\n";
        let diagnostics = check_source(source);
        assert_eq!(diagnostics.len(), 1);

        let start = source.find("if(b)").unwrap();
        assert_eq!(diagnostics[0].span, TextSpan::new(start, start + 2));
    }

    #[test]
    fn test_else_if_chain_checks_every_if() {
        let diagnostics = check_source("if(a) x; else if  (b) y; else if (c) z;");
        let starts: Vec<_> = diagnostics.iter().map(|d| d.span.start()).collect();
        assert_eq!(starts, vec![0, 14]);
    }

    #[test]
    fn test_incomplete_if_is_ignored() {
        assert!(check_source("if x;").is_empty());
    }

    #[test]
    fn test_non_if_node_is_ignored() {
        let tree = parse_fixture("x;").unwrap();
        let sink = CollectingSink::new();
        IfSpacingRuleImpl
            .check(&SyntaxNodeContext::new(tree.root(), &tree, &sink))
            .unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_repeated_checks_are_identical() {
        let tree = parse_fixture("if(a) { if  (b) c; }").unwrap();
        assert_eq!(check_all(&tree), check_all(&tree));
    }

    #[test]
    fn test_sink_failure_is_propagated() {
        let tree = parse_fixture("if(x) { }").unwrap();
        let closed = |_: Diagnostic| -> Result<(), ReportError> { Err(ReportError::SinkClosed) };
        let node = tree
            .root()
            .descendants()
            .find(|node| node.kind() == SyntaxKind::IfStatement)
            .unwrap();
        let result = IfSpacingRuleImpl.check(&SyntaxNodeContext::new(node, &tree, &closed));
        assert_eq!(result, Err(ReportError::SinkClosed));
    }

    #[test]
    fn test_snapshot_mixed_spacing() {
        let diagnostics = check_source("if(a) {}\nif (b) {}\nif  (c) {}\n");
        insta::assert_snapshot!(format_diagnostics(&diagnostics), @r"
        [1] warning[IfSpacing] 0..2: If statements must contain a space between the 'if' keyword and the boolean expression
        [2] warning[IfSpacing] 19..23: If statements must contain a space between the 'if' keyword and the boolean expression
        ");
    }
}
