//! Diagnostics collected by the lexer and parser.

use crate::{DiagnosticKind, DiagnosticsFormatter, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub code: Option<&'static str>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self {
            severity,
            code: kind.code(),
            message: DiagnosticsFormatter::format(&kind),
            span,
            help: None,
        }
    }

    pub fn error(message: impl Into<String>, span: Option<Span>) -> Self {
        Self::new(Severity::Error, DiagnosticKind::Raw(message.into()), span)
    }

    pub fn error_kind(kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self::new(Severity::Error, kind, span)
    }

    pub fn warning_kind(kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self::new(Severity::Warning, kind, span)
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

pub mod codes {
    pub const UNEXPECTED_EOF: &str = "E0001";
    pub const INVALID_CHARACTER: &str = "E0002";
    pub const BAD_NUMERAL: &str = "E0003";
    pub const NUMERAL_OVERFLOW: &str = "E0004";
    pub const TRAILING_INPUT: &str = "W0001";
    pub const UNMATCHED_PAREN: &str = "W0002";
}
