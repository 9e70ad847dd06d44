//! Recursive descent parser for the Doodle drawing language.
//!
//! The entry point is [`parse`], which lexes an input line and parses it
//! into a [`ParseTree`] whose node children mirror the grammar productions
//! exactly. Everything downstream (derivation replay, tree diagrams) works
//! off that tree; the parser is the only place grammar knowledge lives.

mod cursor;
mod error;
mod grammar;

pub use error::ParseError;

use doodle_ir::ParseTree;
use tracing::debug;

/// Parse one input line into a parse tree.
///
/// Lexes first, then runs the grammar over the token stream. The whole
/// line must be consumed: anything after the closing `BYE` is an error.
pub fn parse(input: &str) -> Result<ParseTree, ParseError> {
    let tokens = doodle_lexer::lex(input)?;
    let tree = grammar::Parser::new(&tokens).parse_graph()?;
    debug!(tokens = tokens.len(), "parsed input line");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doodle_diagnostic::ErrorCategory;
    use pretty_assertions::assert_eq;

    /// Accept/reject table over the whole pipeline.
    #[test]
    fn test_recognizer_corpus() {
        let valid = [
            "HI bar A1,2 BYE",
            "HI fill C3 BYE",
            "HI line D4,A2 BYE",
            "HI line D4,A2; bar B3,5 BYE",
            "HI fill C3; fill D4; fill E5 BYE",
            "HI bar A1,1; line A1,E5; fill B2 BYE",
            "hi bar a1,2 bye",
            "HI  bar   A1 , 2  BYE",
            "HI fill C3;line B2,D4 BYE",
        ];
        for input in valid {
            if let Err(err) = parse(input) {
                panic!("expected {input:?} to parse, got: {err}");
            }
        }

        let invalid = [
            "",
            "HI",
            "HI BYE",
            "bar A1,2 BYE",
            "HI bar A1,2",
            "BYE HI bar A1,2",
            "HI fill F1 BYE",
            "HI line B2,6 BYE",
            "HI bar C3; fill D2 BYE",
            "HI bar B1-2 BYE",
            "HI fill BYE",
            "HI line A1,B2; foo C3,D4 BYE",
            "HI bar A1,2 line B2,C3 BYE",
            "HI bar A1,2; BYE",
            "HI fill A1 BYE BYE",
        ];
        for input in invalid {
            if parse(input).is_ok() {
                panic!("expected {input:?} to be rejected");
            }
        }
    }

    #[test]
    fn test_error_categories() {
        let cases = [
            ("bar A1,2 BYE", ErrorCategory::Syntax),
            ("HI fill F1 BYE", ErrorCategory::Value),
            ("HI line A1,B2; foo C3,D4 BYE", ErrorCategory::Syntax),
            ("HI line B2,C6 BYE", ErrorCategory::Value),
            ("HI bar B1-2 BYE", ErrorCategory::Lex),
        ];
        for (input, category) in cases {
            let err = match parse(input) {
                Err(err) => err,
                Ok(tree) => panic!("expected {input:?} to be rejected, got {tree:?}"),
            };
            assert_eq!(err.code.category(), category, "for {input:?}");
        }
    }
}
