//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access and consumption methods. Replaces any
//! shared position counters: each parse call owns one cursor, so nothing
//! is shared between parses.

use doodle_ir::{Keyword, Span, Token, TokenKind};

/// Cursor over a lexed token stream.
///
/// Invariant: the stream always ends with an `Eof` token, so `current()`
/// is valid at every position the grammar can reach.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token stream must be Eof-terminated"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is a specific keyword.
    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    /// Check if the current token is a semicolon.
    #[inline]
    pub fn check_semicolon(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Semicolon)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Advancing never moves past the trailing `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[current]
    }
}
