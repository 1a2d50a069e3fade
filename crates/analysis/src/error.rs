use std::path::PathBuf;
use thiserror::Error;
use trivia_linter::ReportError;

/// Failure while running rules over a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("failed to report diagnostic: {0}")]
    Report(#[from] ReportError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config at {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("unknown lint rule(s): {}. Valid rules: {}", rules.join(", "), valid.join(", "))]
    UnknownRules { rules: Vec<String>, valid: Vec<String> },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
