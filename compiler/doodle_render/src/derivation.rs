//! Leftmost-derivation replay.
//!
//! A parse tree already records which production expanded each
//! non-terminal, so the derivation is a replay: hold a sentential form,
//! repeatedly splice the leftmost non-terminal's children in its place,
//! and snapshot the form after every expansion.

use doodle_ir::{Node, NodeKind, ParseTree, Symbol};
use tracing::debug;

/// One element of a sentential form: settled terminal text, or a
/// non-terminal still waiting to be expanded.
#[derive(Copy, Clone)]
enum Sym<'a> {
    Term(&'a str),
    Open(&'a Node),
}

fn sym_of(symbol: &Symbol) -> Sym<'_> {
    match symbol {
        Symbol::Terminal(text) => Sym::Term(text),
        Symbol::NonTerminal(node) => Sym::Open(node),
    }
}

/// Produce every sentential form of the leftmost derivation.
///
/// The first element is always `<graph>`; the last is the fully terminal
/// line, which re-parses to a tree equal to the input tree.
pub fn derive(tree: &ParseTree) -> Vec<String> {
    let mut form: Vec<Sym<'_>> = vec![Sym::Open(&tree.root)];
    let mut steps = vec![render_form(&form)];

    loop {
        let leftmost = form.iter().enumerate().find_map(|(i, sym)| match sym {
            Sym::Open(node) => Some((i, *node)),
            Sym::Term(_) => None,
        });
        let Some((pos, node)) = leftmost else {
            break;
        };

        form.splice(pos..=pos, node.children.iter().map(sym_of));
        steps.push(render_form(&form));
    }

    debug!(steps = steps.len(), "derivation complete");
    steps
}

/// Spacing class of a symbol within a sentential form.
///
/// Everything is space-separated except two cases: nothing precedes a
/// comma, and a `<y>` half glues straight onto a preceding `<x>` half so
/// coordinates read `A1` (or `<x><y>` before expansion), never `A 1`.
#[derive(Copy, Clone, Eq, PartialEq)]
enum Glue {
    Comma,
    XHalf,
    YHalf,
    Other,
}

fn glue_of(sym: Sym<'_>) -> Glue {
    match sym {
        Sym::Term(text) => glue_of_text(text),
        Sym::Open(node) => match node.kind {
            NodeKind::CoordX => Glue::XHalf,
            NodeKind::CoordY => Glue::YHalf,
            _ => Glue::Other,
        },
    }
}

fn glue_of_text(text: &str) -> Glue {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(','), None) => Glue::Comma,
        (Some(c), None) if c.is_ascii_uppercase() => Glue::XHalf,
        (Some(c), None) if c.is_ascii_digit() => Glue::YHalf,
        _ => Glue::Other,
    }
}

fn render_form(form: &[Sym<'_>]) -> String {
    let mut out = String::new();
    let mut prev = None;

    for &sym in form {
        let glue = glue_of(sym);
        let fused = glue == Glue::Comma || (glue == Glue::YHalf && prev == Some(Glue::XHalf));
        if !out.is_empty() && !fused {
            out.push(' ');
        }
        match sym {
            Sym::Term(text) => out.push_str(text),
            Sym::Open(node) => out.push_str(node.kind.tag()),
        }
        prev = Some(glue);
    }

    out
}
