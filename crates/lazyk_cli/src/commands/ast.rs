use std::io::Write;

use lazyk_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::{parse_or_exit, print_timing};

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let (parsed, tm) = parse_or_exit(args, driver);
    if args.timing {
        print_timing(&tm);
    }
    let mut out = std::io::stdout().lock();
    let mut result = writeln!(out, "{}", parsed.program);
    if args.stats && result.is_ok() {
        let stats = parsed.program.stats();
        result = writeln!(
            out,
            "applications={} combinators={} numerals={} cells_needed={}",
            stats.applications,
            stats.combinators,
            stats.numerals,
            stats.cells_needed()
        );
    }
    if let Err(e) = result {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("stdout error: {e}");
        std::process::exit(2);
    }
}
