//! # Analysis driver
//!
//! Runs the lint rules of a [`RuleTable`](trivia_linter::RuleTable) over a
//! syntax tree, sequentially or on the rayon pool, and loads the host
//! configuration that selects rules and traversal mode.
//!
//! ```rust,ignore
//! let config = trivia_analysis::load_config(Path::new("trivia.yml"))?;
//! let analyzer = Analyzer::from_config(&config);
//! for diagnostic in analyzer.collect(&tree)? {
//!     println!("{diagnostic}");
//! }
//! ```

mod config;
mod driver;
mod error;

pub use config::{load_config, load_config_from_str, AnalysisConfig};
pub use driver::{AnalysisSummary, Analyzer, TraversalMode};
pub use error::{AnalysisError, ConfigError, Result};
