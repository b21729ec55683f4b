use lazyk_driver::Driver;
use lazyk_runtime::Runtime;

use crate::args::CliArgs;
use crate::commands::common::{fatal, parse_or_exit, print_timing, runtime_config};

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let (parsed, tm) = parse_or_exit(args, driver);
    if args.timing {
        print_timing(&tm);
    }

    let config = runtime_config(args);
    log::debug!("runtime config: {config:?}");
    let mut rt = Runtime::new(config);
    if let Err(e) = rt.load(&parsed.program) {
        fatal(e);
    }
    let result = rt.run();
    if args.stats {
        let stats = rt.stats();
        eprintln!(
            "STATS reductions={} allocations={} collections={} reclaimed={} peak_live={} peak_roots={} bytes_read={}",
            stats.reductions,
            stats.heap.allocations,
            stats.heap.collections,
            stats.heap.reclaimed,
            stats.heap.peak_live,
            stats.peak_roots,
            stats.bytes_read,
        );
    }
    match result {
        Ok(outcome) => {
            // Exit statuses wrap the same way the host truncates them.
            std::process::exit(outcome.exit_code.unwrap_or(0) as i32)
        }
        Err(e) => {
            let _ = rt.flush();
            fatal(e)
        }
    }
}
