//! Ready-made [`DiagnosticSink`] implementations.

use crate::context::{DiagnosticSink, ReportError};
use crate::diagnostics::Diagnostic;
use crossbeam_channel::Sender;
use std::sync::{Mutex, PoisonError};

/// Thread-safe sink that keeps every reported diagnostic.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics reported so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Diagnostics in the order they were reported.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Diagnostics ordered by span, then rule id.
    ///
    /// Parallel traversal reports in nondeterministic order; sorting gives
    /// stable output.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.into_diagnostics();
        diagnostics.sort_by(|a, b| {
            a.span
                .cmp(&b.span)
                .then_with(|| a.rule_id().cmp(b.rule_id()))
        });
        diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ReportError> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
        Ok(())
    }
}

/// Sink that forwards diagnostics over a channel.
///
/// Reporting fails with [`ReportError::SinkClosed`] once the receiving side
/// has been dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<Diagnostic>,
}

impl ChannelSink {
    #[must_use]
    pub fn new(sender: Sender<Diagnostic>) -> Self {
        Self { sender }
    }
}

impl DiagnosticSink for ChannelSink {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ReportError> {
        self.sender
            .send(diagnostic)
            .map_err(|_| ReportError::SinkClosed)
    }
}
