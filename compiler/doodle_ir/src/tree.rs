//! Parse-tree data model.
//!
//! A node's children are exactly the right-hand side of the grammar
//! production that produced it, in order. That ordering is what the
//! derivation engine replays, so it must never be rearranged. Trees are
//! built once during parsing and never mutated afterwards; the derivation
//! and rendering passes are both read-only.

use std::fmt;

/// The five non-terminal kinds of the grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// `<graph> -> HI <draw> BYE`
    Graph,
    /// `<draw> -> <action> | <action> ; <draw>`
    Draw,
    /// `<action> -> bar <x><y>,<y> | line <x><y>,<x><y> | fill <x><y>`
    Action,
    /// `<x> -> A | B | C | D | E`
    CoordX,
    /// `<y> -> 1 | 2 | 3 | 4 | 5`
    CoordY,
}

impl NodeKind {
    /// The bracketed tag shown in sentential forms and tree diagrams.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Graph => "<graph>",
            NodeKind::Draw => "<draw>",
            NodeKind::Action => "<action>",
            NodeKind::CoordX => "<x>",
            NodeKind::CoordY => "<y>",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One element of a production right-hand side: a literal terminal or a
/// nested non-terminal node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(Node),
}

impl Symbol {
    /// Convenience constructor for terminal symbols.
    pub fn terminal(text: impl Into<String>) -> Symbol {
        Symbol::Terminal(text.into())
    }

    /// The label this symbol carries in a tree diagram: the terminal text,
    /// or the node's bracketed tag.
    pub fn label(&self) -> &str {
        match self {
            Symbol::Terminal(text) => text,
            Symbol::NonTerminal(node) => node.kind.tag(),
        }
    }
}

/// A non-terminal node of the parse tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Symbol>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Symbol>) -> Node {
        Node { kind, children }
    }

    /// An `<x>` node over its single letter terminal.
    pub fn coord_x(letter: char) -> Node {
        Node::new(NodeKind::CoordX, vec![Symbol::terminal(letter.to_string())])
    }

    /// A `<y>` node over its single digit terminal.
    pub fn coord_y(digit: char) -> Node {
        Node::new(NodeKind::CoordY, vec![Symbol::terminal(digit.to_string())])
    }
}

/// A completed parse, owned by the caller for the duration of one
/// parse-derive-render cycle.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseTree {
    pub root: Node,
}

impl ParseTree {
    pub fn new(root: Node) -> ParseTree {
        ParseTree { root }
    }
}
