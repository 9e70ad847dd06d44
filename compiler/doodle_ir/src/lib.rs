//! Shared data model for the Doodle recognizer.
//!
//! Holds the types that flow between phases: source spans, lexer tokens,
//! and the immutable parse tree consumed by the derivation engine and the
//! tree renderer.

mod span;
mod token;
mod tree;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tree::{Node, NodeKind, ParseTree, Symbol};
