//! Lexer error type.

use std::fmt;

use doodle_diagnostic::{Diagnostic, ErrorCode, Label};
use doodle_ir::Span;

/// An error produced while scanning the input line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LexError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending character(s).
    pub span: Span,
}

impl LexError {
    /// Create a new lex error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        LexError {
            code,
            message: message.into(),
            span,
        }
    }

    /// Unrecognized character in the input.
    pub fn unrecognized_char(lexeme: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E0001,
            format!("unrecognized character `{lexeme}`"),
            span,
        )
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code, self.message.clone())
            .with_label(Label::primary(self.span, "not part of the language"))
            .with_help("input may contain letters, digits, whitespace, `,` and `;`")
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.category(), self.message)
    }
}

impl std::error::Error for LexError {}
