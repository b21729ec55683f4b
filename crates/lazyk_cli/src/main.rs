mod args;
mod commands;

use lazyk_driver::Driver;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("LAZYK_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let args = match args::parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            if e != args::usage() {
                eprintln!("{}", args::usage());
            }
            std::process::exit(2);
        }
    };
    let driver = Driver::new().with_optimize(args.optimize);

    match args.cmd.as_str() {
        "tokens" => commands::tokens::run(&args, &driver),
        "check" => commands::check::run(&args, &driver),
        "ast" => commands::ast::run(&args, &driver),
        "run" => commands::run::run(&args, &driver),
        "compile" => commands::compile::run(&args, &driver),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    }
}
