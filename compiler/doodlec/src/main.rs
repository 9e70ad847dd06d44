//! Doodle recognizer CLI.
//!
//! With no arguments, starts the interactive prompt loop. Subcommands
//! run one input line from the command line; remaining arguments are
//! joined with spaces, so the line does not need quoting.

mod repl;

use doodle_diagnostic::emitter;
use doodle_ir::ParseTree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        if let Err(err) = repl::run() {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        return;
    }

    match args[1].as_str() {
        "check" => {
            let input = input_line(&args, "check <input line>");
            parse_or_exit(&input);
            println!("ok");
        }
        "derive" => {
            let input = input_line(&args, "derive <input line>");
            let tree = parse_or_exit(&input);
            for (i, step) in doodle_render::derive(&tree).iter().enumerate() {
                println!("Step {:02}: {step}", i + 1);
            }
        }
        "tree" => {
            let input = input_line(&args, "tree <input line>");
            let tree = parse_or_exit(&input);
            for row in doodle_render::render(&tree) {
                println!("{row}");
            }
        }
        "lex" => {
            let input = input_line(&args, "lex <input line>");
            match doodle_lexer::lex(&input) {
                Ok(tokens) => {
                    for token in tokens {
                        println!("{token:?}");
                    }
                }
                Err(err) => {
                    eprintln!("{}", emitter::render(&err.to_diagnostic(), &input));
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Doodle recognizer {}", env!("CARGO_PKG_VERSION"));
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// The input line for a subcommand: everything after the command name.
fn input_line(args: &[String], usage: &str) -> String {
    if args.len() < 3 {
        eprintln!("Usage: doodle {usage}");
        std::process::exit(1);
    }
    args[2..].join(" ")
}

fn parse_or_exit(input: &str) -> ParseTree {
    match doodle_parse::parse(input) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", emitter::render(&err.to_diagnostic(), input));
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Doodle drawing-language recognizer");
    println!();
    println!("Usage: doodle [command] [input line]");
    println!();
    println!("Commands:");
    println!("  check <line>    Parse a line and report ok or a diagnostic");
    println!("  derive <line>   Print the numbered leftmost derivation");
    println!("  tree <line>     Print the parse-tree diagram");
    println!("  lex <line>      Tokenize a line and display the tokens");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("With no command, starts the interactive prompt loop.");
    println!();
    println!("Examples:");
    println!("  doodle derive HI bar A1,2 BYE");
    println!("  doodle tree \"HI fill C3; line B2,D4 BYE\"");
    println!("  doodle check HI fill F1 BYE");
}
