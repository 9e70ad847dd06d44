//! Derivation replay and tree diagrams for parsed Doodle programs.
//!
//! Both passes are read-only over a [`doodle_ir::ParseTree`]: [`derive`]
//! replays the leftmost derivation as a list of sentential forms, and
//! [`render`] lays the tree out as an ASCII diagram, one string per row.

mod derivation;
mod layout;

pub use derivation::derive;
pub use layout::render;
