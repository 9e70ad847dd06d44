//! Lexer for the Doodle recognizer, built on logos.
//!
//! The raw scan only distinguishes three shapes: `,` and `;` as single-char
//! tokens, and maximal runs of letters/digits as words. A cooking step then
//! classifies each word the way the grammar cares about: case-insensitive
//! keyword, letter+digit coordinate, bare digit, or identifier.
//!
//! Policy: identifiers are *not* rejected here. A word like `foo` lexes as
//! `Ident` and the parser reports it at its grammar position (so an unknown
//! action is a syntax error, not a lex error). The lexer itself only fails
//! on characters outside letters/digits/whitespace/comma/semicolon.

mod lex_error;

pub use lex_error::LexError;

use logos::Logos;
use tracing::debug;

use doodle_ir::{Keyword, Span, Token, TokenKind};

/// Raw token shapes from logos (before classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// A maximal run of letters and digits; classified by [`classify_word`].
    #[regex(r"[A-Za-z0-9]+")]
    Word,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,
}

/// Scan an input line into a token sequence terminated by `Eof`.
///
/// Fails with [`LexError`] on the first character that is not a letter,
/// digit, whitespace, comma, or semicolon.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for (raw, range) in RawToken::lexer(input).spanned() {
        let span = Span::from_range(range.clone());
        let kind = match raw {
            Ok(RawToken::Word) => classify_word(&input[range]),
            Ok(RawToken::Comma) => TokenKind::Comma,
            Ok(RawToken::Semicolon) => TokenKind::Semicolon,
            Err(()) => {
                return Err(LexError::unrecognized_char(&input[range], span));
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let end = Span::point(Span::from_range(0..input.len()).end);
    tokens.push(Token::new(TokenKind::Eof, end));

    debug!(count = tokens.len(), "lexed input line");
    Ok(tokens)
}

/// Classify a buffered word.
///
/// Order matters: keywords first (case-insensitive), then the two
/// coordinate shapes, and anything left over is an identifier for the
/// parser to reject. Coordinate letters are uppercased here; range checks
/// (A–E, 1–5) are the parser's job.
fn classify_word(word: &str) -> TokenKind {
    if let Some(kw) = Keyword::from_word(word) {
        return TokenKind::Keyword(kw);
    }

    let bytes = word.as_bytes();
    if bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit() {
        return TokenKind::Coord {
            x: bytes[0].to_ascii_uppercase() as char,
            y: bytes[1] as char,
        };
    }
    if bytes.len() == 1 && bytes[0].is_ascii_digit() {
        return TokenKind::Digit(bytes[0] as char);
    }

    TokenKind::Ident(word.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        match lex(input) {
            Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
            Err(err) => panic!("lex failed for {input:?}: {err}"),
        }
    }

    #[test]
    fn test_lex_simple_program() {
        assert_eq!(
            kinds("HI bar A1,2 BYE"),
            vec![
                TokenKind::Keyword(Keyword::Hi),
                TokenKind::Keyword(Keyword::Bar),
                TokenKind::Coord { x: 'A', y: '1' },
                TokenKind::Comma,
                TokenKind::Digit('2'),
                TokenKind::Keyword(Keyword::Bye),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation_needs_no_whitespace() {
        // `,` and `;` split adjacent words even when glued to them.
        assert_eq!(
            kinds("fill C3;line B2,D4"),
            vec![
                TokenKind::Keyword(Keyword::Fill),
                TokenKind::Coord { x: 'C', y: '3' },
                TokenKind::Semicolon,
                TokenKind::Keyword(Keyword::Line),
                TokenKind::Coord { x: 'B', y: '2' },
                TokenKind::Comma,
                TokenKind::Coord { x: 'D', y: '4' },
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            kinds("hi Bar FILL bye"),
            vec![
                TokenKind::Keyword(Keyword::Hi),
                TokenKind::Keyword(Keyword::Bar),
                TokenKind::Keyword(Keyword::Fill),
                TokenKind::Keyword(Keyword::Bye),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_coordinate_letter_uppercased() {
        assert_eq!(
            kinds("b2"),
            vec![TokenKind::Coord { x: 'B', y: '2' }, TokenKind::Eof]
        );
    }

    #[test]
    fn test_out_of_range_shapes_still_lex() {
        // Range validation is deferred to the parser.
        assert_eq!(
            kinds("F1 A9 0"),
            vec![
                TokenKind::Coord { x: 'F', y: '1' },
                TokenKind::Coord { x: 'A', y: '9' },
                TokenKind::Digit('0'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unknown_words_lex_as_idents() {
        assert_eq!(
            kinds("foo A1B2 12"),
            vec![
                TokenKind::Ident("foo".into()),
                TokenKind::Ident("A1B2".into()),
                TokenKind::Ident("12".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unrecognized_character_fails() {
        let err = match lex("HI bar B1-2 BYE") {
            Err(err) => err,
            Ok(tokens) => panic!("expected lex error, got {tokens:?}"),
        };
        assert_eq!(err.code, doodle_diagnostic::ErrorCode::E0001);
        assert_eq!(err.span, Span::new(9, 10));
        assert!(err.message.contains('-'));
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_token_spans() {
        let tokens = match lex("HI fill C3 BYE") {
            Ok(tokens) => tokens,
            Err(err) => panic!("lex failed: {err}"),
        };
        assert_eq!(tokens[0].span, Span::new(0, 2)); // HI
        assert_eq!(tokens[2].span, Span::new(8, 10)); // C3
        assert_eq!(tokens[4].span, Span::point(14)); // Eof
    }
}
