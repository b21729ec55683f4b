use lazyk_syntax::{Diagnostic, DiagnosticKind, Span};

pub struct NormalizedSource {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Drop a leading BOM, fold CRLF/CR to LF and cut the text at the first NUL,
/// which ends a program.
pub fn normalize_source(input: &str) -> NormalizedSource {
    let mut diagnostics = Vec::new();
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\0' => {
                let at = out.len() as u32;
                diagnostics.push(Diagnostic::warning_kind(
                    DiagnosticKind::Raw("Input after NUL byte is ignored".into()),
                    Some(Span::new(at, at.saturating_add(1))),
                ));
                break;
            }
            _ => out.push(c),
        }
    }

    NormalizedSource {
        text: out,
        diagnostics,
    }
}
