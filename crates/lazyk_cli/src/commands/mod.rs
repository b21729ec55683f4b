use lazyk_syntax::{Diagnostic, Severity, SourceFile, render_diagnostic};
use serde_json::json;

pub(crate) mod ast;
pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod compile;
pub(crate) mod run;
pub(crate) mod tokens;

pub(crate) fn emit_diagnostics(
    source: &SourceFile,
    diagnostics: &[Diagnostic],
    json_out: bool,
) {
    for d in diagnostics {
        if json_out {
            let severity = match d.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let span = d.span.map(|s| json!({ "start": s.start.0, "end": s.end.0 }));
            let obj = json!({
                "severity": severity,
                "code": d.code,
                "message": d.message,
                "help": d.help,
                "span": span,
                "file": source.name,
            });
            println!("{}", obj);
        } else {
            eprintln!("{}", render_diagnostic(source, d));
        }
    }
}
