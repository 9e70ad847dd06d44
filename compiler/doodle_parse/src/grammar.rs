//! Recursive descent over the drawing grammar.
//!
//! ```text
//! <graph>  -> HI <draw> BYE
//! <draw>   -> <action> | <action> ; <draw>
//! <action> -> bar <x><y>,<y> | line <x><y>,<x><y> | fill <x><y>
//! <x>      -> A | B | C | D | E
//! <y>      -> 1 | 2 | 3 | 4 | 5
//! ```
//!
//! One method per production. Each method consumes the tokens of its
//! production and returns the node whose children are exactly the
//! production's right-hand side, in order. The grammar is LL(1): every
//! decision looks at the current token only, and nothing backtracks.

use doodle_ir::{Keyword, Node, NodeKind, ParseTree, Symbol, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::ParseError;

const LETTER_RANGE: std::ops::RangeInclusive<char> = 'A'..='E';
const DIGIT_RANGE: std::ops::RangeInclusive<char> = '1'..='5';

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// `<graph> -> HI <draw> BYE`, then end of input.
    pub(crate) fn parse_graph(mut self) -> Result<ParseTree, ParseError> {
        if !self.cursor.check_keyword(Keyword::Hi) {
            return Err(ParseError::missing_hi(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        self.cursor.advance();

        let draw = self.parse_draw()?;

        if !self.cursor.check_keyword(Keyword::Bye) {
            return Err(ParseError::missing_bye(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        self.cursor.advance();

        if !self.cursor.is_at_end() {
            return Err(ParseError::trailing_tokens(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }

        trace!("parsed graph");
        Ok(ParseTree::new(Node::new(
            NodeKind::Graph,
            vec![
                Symbol::terminal("HI"),
                Symbol::NonTerminal(draw),
                Symbol::terminal("BYE"),
            ],
        )))
    }

    /// `<draw> -> <action> | <action> ; <draw>`
    ///
    /// Right recursion mirrors the production, so a three-action program
    /// nests as `<draw>[<action> ; <draw>[<action> ; <draw>[<action>]]]`.
    fn parse_draw(&mut self) -> Result<Node, ParseError> {
        let action = self.parse_action()?;

        if self.cursor.check_semicolon() {
            self.cursor.advance();
            let rest = self.parse_draw()?;
            return Ok(Node::new(
                NodeKind::Draw,
                vec![
                    Symbol::NonTerminal(action),
                    Symbol::terminal(";"),
                    Symbol::NonTerminal(rest),
                ],
            ));
        }

        Ok(Node::new(NodeKind::Draw, vec![Symbol::NonTerminal(action)]))
    }

    /// `<action> -> bar <x><y>,<y> | line <x><y>,<x><y> | fill <x><y>`
    fn parse_action(&mut self) -> Result<Node, ParseError> {
        let kind = self.cursor.current_kind().clone();
        let span = self.cursor.current_span();

        match kind {
            TokenKind::Keyword(Keyword::Bar) => {
                self.cursor.advance();
                let (x, y) = self.expect_coord("after `bar`")?;
                self.expect_comma()?;
                let height = self.expect_bare_y()?;
                Ok(Node::new(
                    NodeKind::Action,
                    vec![
                        Symbol::terminal("bar"),
                        Symbol::NonTerminal(x),
                        Symbol::NonTerminal(y),
                        Symbol::terminal(","),
                        Symbol::NonTerminal(height),
                    ],
                ))
            }
            TokenKind::Keyword(Keyword::Line) => {
                self.cursor.advance();
                let (x1, y1) = self.expect_coord("after `line`")?;
                self.expect_comma()?;
                let (x2, y2) = self.expect_coord("after `,`")?;
                Ok(Node::new(
                    NodeKind::Action,
                    vec![
                        Symbol::terminal("line"),
                        Symbol::NonTerminal(x1),
                        Symbol::NonTerminal(y1),
                        Symbol::terminal(","),
                        Symbol::NonTerminal(x2),
                        Symbol::NonTerminal(y2),
                    ],
                ))
            }
            TokenKind::Keyword(Keyword::Fill) => {
                self.cursor.advance();
                let (x, y) = self.expect_coord("after `fill`")?;
                Ok(Node::new(
                    NodeKind::Action,
                    vec![
                        Symbol::terminal("fill"),
                        Symbol::NonTerminal(x),
                        Symbol::NonTerminal(y),
                    ],
                ))
            }
            // `HI BYE`, a stray trailing `;`, or a truncated line: there is
            // no word to blame, so report the position instead.
            TokenKind::Keyword(Keyword::Bye) | TokenKind::Eof => Err(ParseError::unexpected_token(
                "an action (`bar`, `line`, or `fill`)",
                &kind,
                span,
            )),
            _ => Err(ParseError::invalid_action(&kind, span)),
        }
    }

    /// A full `<x><y>` coordinate token, range-checked on both halves.
    fn expect_coord(&mut self, place: &str) -> Result<(Node, Node), ParseError> {
        let kind = self.cursor.current_kind().clone();
        let span = self.cursor.current_span();

        let TokenKind::Coord { x, y } = kind else {
            // An out-of-range digit loses its shape complaint to the range
            // complaint: `line B2,6` blames the `6`, not the missing letter.
            if let TokenKind::Digit(d) = kind {
                if !DIGIT_RANGE.contains(&d) {
                    return Err(ParseError::digit_out_of_range(&kind, d, span));
                }
            }
            return Err(ParseError::unexpected_token(
                format!("a coordinate {place}"),
                &kind,
                span,
            ));
        };
        if !LETTER_RANGE.contains(&x) {
            return Err(ParseError::letter_out_of_range(&kind, x, span));
        }
        if !DIGIT_RANGE.contains(&y) {
            return Err(ParseError::digit_out_of_range(&kind, y, span));
        }

        self.cursor.advance();
        Ok((Node::coord_x(x), Node::coord_y(y)))
    }

    fn expect_comma(&mut self) -> Result<(), ParseError> {
        if !matches!(self.cursor.current_kind(), TokenKind::Comma) {
            return Err(ParseError::unexpected_token(
                "`,`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        self.cursor.advance();
        Ok(())
    }

    /// The trailing `<y>` of a `bar` action.
    ///
    /// Accepts a bare digit (`bar A1,2`) or the digit half of a full
    /// coordinate (`bar A1,A2` reads its `2`); either way the digit is
    /// range-checked.
    fn expect_bare_y(&mut self) -> Result<Node, ParseError> {
        let kind = self.cursor.current_kind().clone();
        let span = self.cursor.current_span();

        let digit = match kind {
            TokenKind::Digit(d) => d,
            TokenKind::Coord { y, .. } => y,
            _ => {
                return Err(ParseError::unexpected_token(
                    "a height digit after `,`",
                    &kind,
                    span,
                ));
            }
        };
        if !DIGIT_RANGE.contains(&digit) {
            return Err(ParseError::digit_out_of_range(&kind, digit, span));
        }

        self.cursor.advance();
        Ok(Node::coord_y(digit))
    }
}
