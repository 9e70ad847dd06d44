//! Token types for the Doodle lexer.
//!
//! Tokens are immutable once produced: a kind, plus the span of the lexeme
//! in the input line. The lexeme text itself is recoverable from the kind
//! (all kinds except `Ident` have a canonical spelling).

use super::Span;
use std::fmt;

/// A token with its span in the input.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// The five grammar keywords.
///
/// Keywords are matched case-insensitively by the lexer and stored in their
/// canonical spelling (`HI`/`BYE` upper, action names lower).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Hi,
    Bye,
    Bar,
    Line,
    Fill,
}

impl Keyword {
    /// Canonical source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Hi => "HI",
            Keyword::Bye => "BYE",
            Keyword::Bar => "bar",
            Keyword::Line => "line",
            Keyword::Fill => "fill",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_word(word: &str) -> Option<Keyword> {
        if word.eq_ignore_ascii_case("HI") {
            Some(Keyword::Hi)
        } else if word.eq_ignore_ascii_case("BYE") {
            Some(Keyword::Bye)
        } else if word.eq_ignore_ascii_case("bar") {
            Some(Keyword::Bar)
        } else if word.eq_ignore_ascii_case("line") {
            Some(Keyword::Line)
        } else if word.eq_ignore_ascii_case("fill") {
            Some(Keyword::Fill)
        } else {
            None
        }
    }
}

/// Token kinds for Doodle.
///
/// Coordinate letters are stored uppercased; range validation (A–E, 1–5)
/// belongs to the parser, so `Z9` still lexes as a coordinate.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Grammar keyword: HI, BYE, bar, line, fill.
    Keyword(Keyword),
    /// Letter+digit coordinate pair, e.g. `A1`.
    Coord { x: char, y: char },
    /// Bare digit, e.g. the trailing `2` in `bar A1,2`.
    Digit(char),
    Comma,
    Semicolon,
    /// Any other word; always rejected by the parser.
    Ident(Box<str>),
    Eof,
}

impl TokenKind {
    /// Human-readable rendering for error messages.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Coord { x, y } => format!("{x}{y}"),
            TokenKind::Digit(d) => d.to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Ident(name) => name.to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }

    /// Check for a specific keyword.
    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
