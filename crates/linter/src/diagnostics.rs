use crate::descriptor::RuleDescriptor;
use trivia_types::{DiagnosticSeverity, TextSpan};

/// One detected rule violation.
///
/// Created per violation and handed straight to a
/// [`DiagnosticSink`](crate::DiagnosticSink); the engine keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic
    pub descriptor: &'static RuleDescriptor,
    pub severity: DiagnosticSeverity,
    /// Rendered message
    pub message: String,
    /// Absolute byte span in the analyzed tree's text
    pub span: TextSpan,
}

impl Diagnostic {
    /// Create a diagnostic at the rule's default severity.
    #[must_use]
    pub fn new(
        descriptor: &'static RuleDescriptor,
        span: TextSpan,
        message: impl Into<String>,
    ) -> Self {
        Self {
            descriptor,
            severity: descriptor.default_severity,
            message: message.into(),
            span,
        }
    }

    /// Create a diagnostic whose message is the rule's template rendered with `args`.
    #[must_use]
    pub fn create(
        descriptor: &'static RuleDescriptor,
        span: TextSpan,
        args: &[&dyn std::fmt::Display],
    ) -> Self {
        Self::new(descriptor, span, descriptor.render_message(args))
    }

    /// Stable rule identifier
    #[must_use]
    pub fn rule_id(&self) -> &'static str {
        self.descriptor.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.descriptor.title
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.rule_id(),
            self.span,
            self.message
        )
    }
}
