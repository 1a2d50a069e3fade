//! Foundation types for trivia-analyzer.
//!
//! This crate provides shared types used across the analyzer stack.
//! It has zero external dependencies, making it suitable as a foundation layer.
//!
//! # Type Categories
//!
//! - **Position types**: [`TextSpan`], [`Position`], [`Range`], [`LineIndex`]
//! - **Severity types**: [`DiagnosticSeverity`]

mod position;
mod severity;

pub use position::{LineIndex, Position, Range, TextSpan};
pub use severity::DiagnosticSeverity;
