use std::fmt::Display;

use super::errors::{ErrorImpl, ErrorTip};

/// Per-line cap applied while scanning.
pub const LEXICAL_ERRORS_PER_LINE: usize = 2;

/// Per-line cap applied while parsing (syntactic and semantic share it).
pub const PARSER_ERRORS_PER_LINE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical,
    Syntactic,
    Semantic,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "LEXICO"),
            DiagnosticKind::Syntactic => write!(f, "SINTACTICO"),
            DiagnosticKind::Semantic => write!(f, "SEMANTICO"),
        }
    }
}

/// A recovered problem. `line` is `None` when it was found at end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub error: ErrorImpl,
}

impl Diagnostic {
    pub fn new(error: ErrorImpl, line: Option<usize>) -> Self {
        Diagnostic { line, error }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.error.kind()
    }

    pub fn message(&self) -> String {
        match self.error.get_tip() {
            ErrorTip::None => self.error.to_string(),
            tip => format!("{} ({})", self.error, tip),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Linea {} ({}): {}", line, self.kind(), self.message()),
            None => write!(f, "Linea ? ({}): {}", self.kind(), self.message()),
        }
    }
}

/// Collects diagnostics, dropping everything past `per_line` on one line.
#[derive(Debug)]
pub struct DiagnosticCollector {
    per_line: usize,
    last_line: Option<Option<usize>>,
    on_line: usize,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new(per_line: usize) -> Self {
        DiagnosticCollector {
            per_line,
            last_line: None,
            on_line: 0,
            diagnostics: vec![],
        }
    }

    /// Records `error` unless the cap for `line` is exhausted. Returns whether it was kept.
    pub fn report(&mut self, error: ErrorImpl, line: Option<usize>) -> bool {
        if self.last_line == Some(line) {
            self.on_line += 1;
            if self.on_line > self.per_line {
                tracing::trace!(?line, error = error.get_error_name(), "diagnostic suppressed");
                return false;
            }
        } else {
            self.last_line = Some(line);
            self.on_line = 1;
        }

        self.diagnostics.push(Diagnostic::new(error, line));
        true
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
