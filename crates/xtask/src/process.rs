use std::io::Write;
use std::process::{Command, Output, Stdio};

pub fn run_args(cmd: &str, args: &[&str]) -> Result<Output, String> {
    let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    run_owned(cmd, &owned, None)
}

/// Run `cmd`, feeding `stdin` when given, and capture its output.
pub fn run_owned(cmd: &str, args: &[String], stdin: Option<&[u8]>) -> Result<Output, String> {
    eprintln!(
        "$ {} {}",
        cmd,
        args.iter()
            .map(|s| shell_escape(s))
            .collect::<Vec<_>>()
            .join(" ")
    );
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to run {cmd}: {e}"))?;
    if let (Some(data), Some(mut pipe)) = (stdin, child.stdin.take()) {
        pipe.write_all(data)
            .map_err(|e| format!("Failed to write stdin of {cmd}: {e}"))?;
    }
    child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for {cmd}: {e}"))
}

pub fn format_output(o: &Output) -> String {
    let mut s = String::new();
    if !o.stdout.is_empty() {
        s.push_str("stdout:\n");
        s.push_str(&String::from_utf8_lossy(&o.stdout));
        if !s.ends_with('\n') {
            s.push('\n');
        }
    }
    if !o.stderr.is_empty() {
        s.push_str("stderr:\n");
        s.push_str(&String::from_utf8_lossy(&o.stderr));
        if !s.ends_with('\n') {
            s.push('\n');
        }
    }
    if s.is_empty() {
        s.push_str("(no output)\n");
    }
    s
}

fn shell_escape(s: &str) -> String {
    if s.chars().all(|c| c.is_ascii_alphanumeric() || "-_./:".contains(c)) {
        return s.to_string();
    }
    format!("{:?}", s)
}
