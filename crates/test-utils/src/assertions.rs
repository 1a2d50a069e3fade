//! Snapshot testing helpers
//!
//! Diagnostics and trees are formatted consistently for readable insta
//! snapshots.

use std::fmt::Write;
use trivia_syntax::{SyntaxElement, SyntaxNode, SyntaxToken, SyntaxTree, Trivia};

/// Format a list of diagnostics for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use trivia_test_utils::format_diagnostics;
///
/// let diagnostics = analyzer.collect(&tree)?;
/// insta::assert_snapshot!(format_diagnostics(&diagnostics));
/// ```
pub fn format_diagnostics<D: std::fmt::Display>(diagnostics: &[D]) -> String {
    if diagnostics.is_empty() {
        return String::from("(no diagnostics)");
    }

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| format!("[{}] {d}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a tree one element per line, nodes as `Kind@span` and tokens with
/// their text and any non-empty trivia.
pub fn format_tree(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    write_node(&mut out, tree.root(), 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_node(out: &mut String, node: &SyntaxNode, depth: usize) {
    let _ = writeln!(out, "{:indent$}{node:?}", "", indent = depth * 2);
    for child in node.children() {
        match child {
            SyntaxElement::Node(child) => write_node(out, child, depth + 1),
            SyntaxElement::Token(token) => write_token(out, token, depth + 1),
        }
    }
}

fn write_token(out: &mut String, token: &SyntaxToken, depth: usize) {
    let _ = write!(
        out,
        "{:indent$}{:?}@{} {:?}",
        "",
        token.kind(),
        token.span(),
        token.text(),
        indent = depth * 2
    );
    write_trivia(out, "leading", token.leading_trivia());
    write_trivia(out, "trailing", token.trailing_trivia());
    out.push('\n');
}

fn write_trivia(out: &mut String, label: &str, trivia: &[Trivia]) {
    if trivia.is_empty() {
        return;
    }
    let entries: Vec<_> = trivia
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind(), t.text()))
        .collect();
    let _ = write!(out, " {label}=[{}]", entries.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diagnostics_empty() {
        let empty: Vec<String> = vec![];
        assert_eq!(format_diagnostics(&empty), "(no diagnostics)");
    }

    #[test]
    fn test_format_diagnostics_numbers_entries() {
        let diagnostics = vec!["warning[A] 0..2: first", "warning[B] 3..4: second"];
        assert_eq!(
            format_diagnostics(&diagnostics),
            "[1] warning[A] 0..2: first\n[2] warning[B] 3..4: second"
        );
    }

    #[test]
    fn test_format_tree_shows_leading_trivia() {
        let tree = crate::parse_fixture("  x;").unwrap();
        let formatted = format_tree(&tree);
        assert!(
            formatted.contains(r#"Identifier@2..3 "x" leading=[Whitespace "  "]"#),
            "{formatted}"
        );
    }
}
