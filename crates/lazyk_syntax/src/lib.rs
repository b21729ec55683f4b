//! Shared syntax types: spans, source files, tokens and diagnostics.
//!
//! Used by the lexer, parser, driver and CLI.
mod diagnostic;
mod loc;
mod numeral;
mod render;
mod source;
mod span;
mod token;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use numeral::{NumeralError, parse_numeral};
pub use render::{render_diagnostic, render_diagnostics};
pub use source::{SourceFile, SourceId, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
