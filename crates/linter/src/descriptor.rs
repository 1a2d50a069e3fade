use trivia_types::DiagnosticSeverity;

/// Static identity of a lint rule.
///
/// Declare descriptors as `static` items and hand out `&'static` references;
/// every diagnostic a rule reports points back at its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleDescriptor {
    /// Unique identifier for this rule (e.g., `"IfSpacing"`)
    pub id: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Message template; `{0}`, `{1}`, ... are replaced by report arguments
    pub message_format: &'static str,
    /// Rule category (e.g., `"Syntax"`)
    pub category: &'static str,
    pub default_severity: DiagnosticSeverity,
    pub enabled_by_default: bool,
    /// One-line description of what the rule checks
    pub description: &'static str,
}

impl RuleDescriptor {
    /// Render the message template with positional arguments.
    ///
    /// Placeholders without a matching argument are left as written.
    #[must_use]
    pub fn render_message(&self, args: &[&dyn std::fmt::Display]) -> String {
        render(self.message_format, args)
    }
}

fn render(format: &str, args: &[&dyn std::fmt::Display]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|index| (index, close)));

        match placeholder.and_then(|(index, close)| args.get(index).map(|arg| (arg, close))) {
            Some((arg, close)) => {
                let _ = write!(out, "{arg}");
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
