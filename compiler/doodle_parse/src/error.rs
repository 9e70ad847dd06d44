//! Parser error type.

use std::fmt;

use doodle_diagnostic::{Diagnostic, ErrorCode, Label};
use doodle_ir::{Span, TokenKind};
use doodle_lexer::LexError;

/// An error produced while parsing a token stream.
///
/// Carries everything needed to render a quality diagnostic: an error
/// code, a message, the span of the offending token, and optional help
/// lines with suggestions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending token.
    pub span: Span,
    /// Optional help messages with suggestions.
    pub help: Vec<String>,
}

/// Render a token for an error message: backtick-quoted lexeme, except
/// end of input which reads better unquoted.
fn describe(found: &TokenKind) -> String {
    match found {
        TokenKind::Eof => found.display_name(),
        _ => format!("`{}`", found.display_name()),
    }
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            help: Vec::new(),
        }
    }

    /// Add a help message.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// A token of the wrong kind at some grammar position.
    #[cold]
    pub fn unexpected_token(expected: impl fmt::Display, found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", describe(found)),
            span,
        )
    }

    /// The program does not open with `HI`.
    #[cold]
    pub fn missing_hi(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1002,
            format!("program must start with `HI`, found {}", describe(found)),
            span,
        )
    }

    /// The program does not close with `BYE`.
    #[cold]
    pub fn missing_bye(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1003,
            format!("program must end with `BYE`, found {}", describe(found)),
            span,
        )
        .with_help("separate consecutive actions with `;`")
    }

    /// Tokens remain after the closing `BYE`.
    #[cold]
    pub fn trailing_tokens(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1004,
            format!("unexpected `{}` after `BYE`", found.display_name()),
            span,
        )
    }

    /// A word at action position that is not `bar`, `line`, or `fill`.
    #[cold]
    pub fn invalid_action(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1005,
            format!("`{}` is not a valid action", found.display_name()),
            span,
        )
        .with_help("valid actions are `bar`, `line`, and `fill`")
    }

    /// A coordinate whose letter half is outside `A`..`E`.
    #[cold]
    pub fn letter_out_of_range(coord: &TokenKind, letter: char, span: Span) -> Self {
        Self::new(
            ErrorCode::E2001,
            format!(
                "coordinate `{}` is not valid: letter `{letter}` is outside `A`..`E`",
                coord.display_name()
            ),
            span,
        )
    }

    /// A coordinate or bare digit whose digit half is outside `1`..`5`.
    #[cold]
    pub fn digit_out_of_range(token: &TokenKind, digit: char, span: Span) -> Self {
        Self::new(
            ErrorCode::E2002,
            format!(
                "coordinate `{}` is not valid: digit `{digit}` is outside `1`..`5`",
                token.display_name()
            ),
            span,
        )
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code, self.message.clone())
            .with_label(Label::primary(self.span, self.code.category().to_string()));
        for help in &self.help {
            diag = diag.with_help(help.clone());
        }
        diag
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            code: err.code,
            message: err.message,
            span: err.span,
            help: Vec::new(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.category(), self.message)
    }
}

impl std::error::Error for ParseError {}
