//! Shared test utilities for the trivia analyzer crates
//!
//! - [`parse_fixture`]: turn a small C-like snippet into a [`SyntaxTree`](trivia_syntax::SyntaxTree)
//! - [`format_diagnostics`] / [`format_tree`]: stable text for insta snapshots
//! - [`init_test_tracing`]: route `tracing` output to the test harness

pub mod assertions;
pub mod fixtures;

pub use assertions::{format_diagnostics, format_tree};
pub use fixtures::{parse_fixture, FixtureError};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; calling it more than once is harmless.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
