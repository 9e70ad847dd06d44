//! Diagnostic system for the Doodle recognizer.
//!
//! - Error codes for searchability (phase-prefixed: E0xxx lex, E1xxx syntax,
//!   E2xxx value)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Help text (how to fix)
//!
//! Phase crates define their own error types and convert them to
//! [`Diagnostic`] for rendering; the [`emitter`] turns a diagnostic plus the
//! input line into the text shown to the user.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
