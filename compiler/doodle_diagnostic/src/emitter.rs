//! Plain-text diagnostic rendering.
//!
//! Produces the classic three-part layout: severity header with code, the
//! offending input line, and a caret underline at the primary span, followed
//! by any help lines.

use crate::Diagnostic;

/// Render a diagnostic against the input line it was produced from.
///
/// Returns the full multi-line message, without a trailing newline.
pub fn render(diag: &Diagnostic, source: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}[{}]: {}",
        diag.severity, diag.code, diag.message
    ));

    if let Some(span) = diag.primary_span() {
        let start = (span.start as usize).min(source.len());
        let end = (span.end as usize).min(source.len()).max(start);

        // Column in display characters, not bytes.
        let column = source
            .get(..start)
            .map_or(start, |prefix| prefix.chars().count());
        let width = source
            .get(start..end)
            .map_or(1, |lexeme| lexeme.chars().count().max(1));

        out.push('\n');
        out.push_str("  |\n");
        out.push_str(&format!("  | {source}\n"));
        out.push_str(&format!("  | {}{}", " ".repeat(column), "^".repeat(width)));

        if let Some(label) = diag.labels.iter().find(|label| label.is_primary) {
            if !label.message.is_empty() {
                out.push(' ');
                out.push_str(&label.message);
            }
        }
    }

    for help in &diag.help {
        out.push('\n');
        out.push_str(&format!("  = help: {help}"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCode, Label};
    use doodle_ir::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_with_caret() {
        let source = "HI fill F1 BYE";
        let diag = Diagnostic::error(ErrorCode::E2001, "letter `F` is not valid")
            .with_label(Label::primary(Span::new(8, 10), "letter out of range"));

        let rendered = render(&diag, source);
        assert_eq!(
            rendered,
            "error[E2001]: letter `F` is not valid\n  |\n  | HI fill F1 BYE\n  |         ^^ letter out of range"
        );
    }

    #[test]
    fn test_render_without_span() {
        let diag = Diagnostic::error(ErrorCode::E1002, "program must start with `HI`");
        let rendered = render(&diag, "bar A1,2 BYE");
        assert_eq!(rendered, "error[E1002]: program must start with `HI`");
    }

    #[test]
    fn test_render_help_lines() {
        let diag = Diagnostic::error(ErrorCode::E1005, "action `foo` is not valid")
            .with_label(Label::primary(Span::new(15, 18), ""))
            .with_help("valid actions are `bar`, `line`, and `fill`");

        let rendered = render(&diag, "HI line A1,B2; foo C3,D4 BYE");
        assert!(rendered.ends_with("= help: valid actions are `bar`, `line`, and `fill`"));
        assert!(rendered.contains("^^^"));
    }
}
