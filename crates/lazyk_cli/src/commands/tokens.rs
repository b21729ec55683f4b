use std::io::Write;

use lazyk_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::input_path;
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let path = input_path(args);
    let lexed = match driver.lex_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    emit_diagnostics(&lexed.source, &lexed.diagnostics, args.json_out);
    let mut out = std::io::stdout().lock();
    for t in &lexed.tokens {
        let text = lexed.source.text.slice(t.span);
        if let Err(e) = writeln!(
            out,
            "{:?}\t{}..{}\t{}",
            t.kind, t.span.start.0, t.span.end.0, text
        ) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return;
            }
            eprintln!("stdout error: {e}");
            std::process::exit(2);
        }
    }
}
