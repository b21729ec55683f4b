use lazyk_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::{parse_or_exit, print_timing};

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let (_, tm) = parse_or_exit(args, driver);
    if args.timing {
        print_timing(&tm);
    }
}
