use std::fmt::Display;

use lazyk_driver::{Driver, ParsedFile, Timings};
use lazyk_runtime::RuntimeConfig;

use crate::args::CliArgs;
use crate::commands::emit_diagnostics;

pub(crate) const EXIT_FATAL: i32 = 70;

pub(crate) fn input_path(args: &CliArgs) -> &str {
    match args.positional.as_slice() {
        [path] => path.as_str(),
        [] => {
            eprintln!("Missing <file>");
            std::process::exit(2);
        }
        _ => {
            eprintln!("Expected exactly one <file>");
            std::process::exit(2);
        }
    }
}

/// Parse the input file, report diagnostics and stop on errors.
pub(crate) fn parse_or_exit(args: &CliArgs, driver: &Driver) -> (ParsedFile, Timings) {
    let path = input_path(args);
    let (parsed, timings) = match driver.parse_file_timed(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    emit_diagnostics(&parsed.source, &parsed.diagnostics, args.json_out);
    if parsed.has_errors() {
        std::process::exit(1);
    }
    (parsed, timings)
}

pub(crate) fn runtime_config(args: &CliArgs) -> RuntimeConfig {
    let mut config = if args.host {
        RuntimeConfig::host()
    } else {
        RuntimeConfig::target()
    };
    if let Some(cells) = args.cells {
        config.heap_cells = cells;
    }
    if let Some(roots) = args.roots {
        config.root_stack_size = roots;
    }
    config
}

pub(crate) fn fatal(err: impl Display) -> ! {
    eprintln!("FATAL: {err}");
    std::process::exit(EXIT_FATAL);
}

pub(crate) fn print_timing(tm: &Timings) {
    eprintln!(
        "TIMING normalize={:.3}ms lex={:.3}ms parse={:.3}ms",
        (tm.normalize_us as f64) / 1000.0,
        (tm.lex_us as f64) / 1000.0,
        (tm.parse_us as f64) / 1000.0,
    );
}
