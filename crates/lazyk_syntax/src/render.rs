use crate::{Diagnostic, SourceFile};

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    let mut out = match diag.span {
        Some(span) => {
            let start = floor_char_boundary(source.text.as_str(), span.start.0 as usize);
            let (line, col) = source.text.line_col(start as u32);
            let mut out = format!(
                "{:?}{}:{}:{}: {}: {}",
                diag.severity,
                code_str,
                line + 1,
                col + 1,
                source.name,
                diag.message
            );
            out.push_str("\n  | ");
            out.push_str(source.text.line_text(line));
            out.push_str("\n  | ");
            out.extend(std::iter::repeat_n(' ', col as usize));
            out.push('^');
            out
        }
        None => format!(
            "{:?}{}: {}: {}",
            diag.severity, code_str, source.name, diag.message
        ),
    };
    if let Some(h) = &diag.help {
        out.push_str("\n  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for (idx, d) in diagnostics.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&render_diagnostic(source, d));
    }
    out
}
