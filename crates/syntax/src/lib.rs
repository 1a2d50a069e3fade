//! # Syntax Trees with Trivia
//!
//! This crate defines the immutable, full-fidelity syntax tree that lint
//! rules inspect. It does not lex or parse; a host front end (or the test
//! fixture parser) drives [`TreeBuilder`] to produce a [`SyntaxTree`].
//!
//! ## Tree Model
//!
//! - [`SyntaxNode`]: interior node tagged with a [`SyntaxKind`], `Arc`-shared
//! - [`SyntaxToken`]: leaf with its own span plus leading/trailing [`Trivia`]
//! - [`Trivia`]: whitespace, end-of-line or comment text, classified by [`TriviaKind`]
//!
//! All spans are absolute byte offsets into [`SyntaxTree::text`].
//!
//! ```rust,ignore
//! for node in tree.root().descendants() {
//!     if let Some(if_stmt) = ast::IfStatement::cast(node) {
//!         inspect(if_stmt.if_keyword(), if_stmt.open_paren_token());
//!     }
//! }
//! ```

pub mod ast;
mod builder;
mod kind;
mod node;
mod token;
mod tree;
mod trivia;

pub use builder::{BuildError, TreeBuilder};
pub use kind::SyntaxKind;
pub use node::{Descendants, SyntaxElement, SyntaxNode};
pub use token::SyntaxToken;
pub use tree::SyntaxTree;
pub use trivia::{Trivia, TriviaKind};
pub use trivia_types::TextSpan;
