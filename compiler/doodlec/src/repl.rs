//! Interactive prompt loop.
//!
//! Shows the grammar, reads one line at a time, and answers with either
//! the numbered derivation plus the tree diagram, or a rendered
//! diagnostic. `END` (any case) exits; so does end of input.

use std::io::{self, BufRead, Write};

use doodle_diagnostic::emitter;

const GRAMMAR_BANNER: &str = "\
BNF grammar for the language recognizer:
<graph>  -> HI <draw> BYE
<draw>   -> <action> | <action> ; <draw>
<action> -> bar <x><y>,<y> | line <x><y>,<x><y> | fill <x><y>
<x>      -> A | B | C | D | E
<y>      -> 1 | 2 | 3 | 4 | 5";

pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{GRAMMAR_BANNER}");
        println!();
        print!("Enter input string (or END to quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let input = normalize(&line?);

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("END") {
            println!("Exiting.");
            return Ok(());
        }

        match doodle_parse::parse(&input) {
            Ok(tree) => {
                println!("Leftmost derivation:");
                for (i, step) in doodle_render::derive(&tree).iter().enumerate() {
                    println!("Step {:02}: {step}", i + 1);
                }
                println!();
                println!("Parse tree:");
                for row in doodle_render::render(&tree) {
                    println!("{row}");
                }
            }
            Err(err) => {
                println!("{}", emitter::render(&err.to_diagnostic(), &input));
            }
        }
        println!();
    }
}

/// Collapse whitespace runs to single spaces so diagnostic spans line up
/// with the echoed input.
fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  HI   bar\tA1 , 2  BYE "), "HI bar A1 , 2 BYE");
        assert_eq!(normalize(""), "");
    }
}
