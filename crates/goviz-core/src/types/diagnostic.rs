//! Syntax diagnostics reported by the parser adapter.

use serde::{Deserialize, Serialize};

/// One syntax problem, located by 1-based line and 1-based byte column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }

    /// `file:line:col: message`, the `go/scanner` rendering of a single error.
    pub fn render(&self, file: &str) -> String {
        format!("{file}:{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Render a diagnostic list the way `go/scanner.ErrorList` does: the first
/// error, followed by a count of the rest.
pub fn render_error_list(file: &str, diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "no errors".to_string(),
        [only] => only.render(file),
        [first, rest @ ..] => format!("{} (and {} more errors)", first.render(file), rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_error_has_no_suffix() {
        let diags = vec![Diagnostic::new(1, 9, "syntax error: unexpected {")];
        assert_eq!(
            render_error_list("input.go", &diags),
            "input.go:1:9: syntax error: unexpected {"
        );
    }

    #[test]
    fn extra_errors_are_counted() {
        let diags = vec![
            Diagnostic::new(2, 1, "a"),
            Diagnostic::new(3, 4, "b"),
            Diagnostic::new(5, 2, "c"),
        ];
        assert_eq!(render_error_list("x.go", &diags), "x.go:2:1: a (and 2 more errors)");
    }
}
