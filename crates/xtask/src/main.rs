//! Workspace automation: `cargo run -p xtask -- <command>`.
use std::env;

mod demos;
mod process;

use process::run_args;

fn main() {
    let mut args = env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "verify".to_string());
    let result = match cmd.as_str() {
        "verify" => verify(),
        "fmt" => fmt_check(),
        "clippy" => clippy(),
        "lint" => lint_strict(),
        "test" => test_workspace(),
        "demos" => demos::verify_demos(),
        _ => usage_error(&cmd),
    };
    if let Err(msg) = result {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn usage_error(cmd: &str) -> Result<(), String> {
    Err(format!(
        "Unknown command: {cmd}\nUsage: cargo run -p xtask -- <verify|fmt|clippy|lint|test|demos>"
    ))
}

fn verify() -> Result<(), String> {
    fmt_check()?;
    lint_strict()?;
    test_workspace()?;
    demos::verify_demos()?;
    Ok(())
}

fn checked(cmd: &str, args: &[&str]) -> Result<(), String> {
    let output = run_args(cmd, args)?;
    if !output.status.success() {
        return Err(format!(
            "{cmd} {} failed:\n{}",
            args.join(" "),
            process::format_output(&output)
        ));
    }
    Ok(())
}

fn fmt_check() -> Result<(), String> {
    checked("cargo", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Result<(), String> {
    checked(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )
}

fn lint_strict() -> Result<(), String> {
    checked(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
            "-W",
            "clippy::all",
            "-W",
            "clippy::perf",
        ],
    )
}

fn test_workspace() -> Result<(), String> {
    checked("cargo", &["test", "--workspace"])
}
