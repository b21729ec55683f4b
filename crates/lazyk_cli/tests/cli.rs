use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

fn lazyk() -> Command {
    Command::cargo_bin("lazyk").unwrap()
}

fn write_program(dir: &TempDir, name: &str, src: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, src).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn usage_without_args() {
    let assert = lazyk().assert().code(2);
    assert!(stderr_of(&assert).contains("Usage: lazyk"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    let assert = lazyk().args(["run", "--fast", "x.lazy"]).assert().code(2);
    assert!(stderr_of(&assert).contains("Unknown option: --fast"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    lazyk().args(["frob", "x.lazy"]).assert().code(2);
}

#[test]
fn missing_file_exits_with_usage_code() {
    let assert = lazyk().args(["check"]).assert().code(2);
    assert!(stderr_of(&assert).contains("Missing <file>"));
    lazyk()
        .args(["check", "/nonexistent/prog.lazy"])
        .assert()
        .code(2);
}

#[test]
fn run_echoes_stdin() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "echo.lazy", "i\n");
    lazyk()
        .args(["run", arg(&prog)])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn run_exit_code_comes_from_program() {
    let dir = TempDir::new().unwrap();
    let src = "# 2 + 3\n`k``c```s`k`[2]+`[3]+[256]k\n";
    let prog = write_program(&dir, "add.lazy", src);
    lazyk()
        .args(["run", arg(&prog)])
        .assert()
        .code(5)
        .stdout("");
}

#[test]
fn run_with_optimizer_and_overrides() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "c.lazy", "`k``c````s``s`kski+[65]`k[256]");
    let assert = lazyk()
        .args(["run", "--optimize", "--roots", "64", "--stats", arg(&prog)])
        .assert()
        .success()
        .stdout("C");
    assert!(stderr_of(&assert).contains("STATS reductions="));
}

#[test]
fn fatal_faults_exit_70() {
    let dir = TempDir::new().unwrap();
    let src = format!("{}k{}", "`".repeat(20), "k".repeat(20));
    let prog = write_program(&dir, "big.lazy", &src);
    let assert = lazyk()
        .args(["run", "--cells", "16", arg(&prog)])
        .assert()
        .code(70);
    assert!(stderr_of(&assert).starts_with("FATAL: "));

    let bad = write_program(&dir, "pair.lazy", "`k``ckk");
    let assert = lazyk().args(["run", arg(&bad)]).assert().code(70);
    assert!(stderr_of(&assert).contains("FATAL: "));
}

#[test]
fn check_reports_errors() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "bad.lazy", "``k!i");
    let assert = lazyk().args(["check", arg(&prog)]).assert().code(1);
    let stderr = stderr_of(&assert);
    assert!(stderr.contains("Invalid character '!'"));
    assert!(stderr.contains("[E0002]"));
}

#[test]
fn check_json_diagnostics() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "bad.lazy", "`k");
    let assert = lazyk()
        .args(["check", "--json", arg(&prog)])
        .assert()
        .code(1);
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let line: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(line["severity"], "error");
    assert_eq!(line["code"], "E0001");
}

#[test]
fn warnings_do_not_fail_check() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "warn.lazy", "i)");
    let assert = lazyk().args(["check", arg(&prog)]).assert().success();
    assert!(stderr_of(&assert).contains("Warning"));
}

#[test]
fn ast_prints_program() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "p.lazy", "(( s (k k)) I)\n");
    lazyk()
        .args(["ast", arg(&prog)])
        .assert()
        .success()
        .stdout("``s`kki\n");

    let two = write_program(&dir, "two.lazy", "``s``s`kski");
    lazyk()
        .args(["ast", "--optimize", arg(&two)])
        .assert()
        .success()
        .stdout("[2]\n");
}

#[test]
fn tokens_lists_each_token() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "t.lazy", "`k[7]");
    let assert = lazyk().args(["tokens", arg(&prog)]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let kinds: Vec<&str> = stdout
        .lines()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(kinds, ["Backtick", "K", "Num", "Eof"]);
}

fn write_entries(dir: &TempDir, names: &[&str]) -> PathBuf {
    let body: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, n)| format!("\"{n}\": {}", 0x100 + 16 * i))
        .collect();
    write_program(dir, "entries.json", &format!("{{{}}}", body.join(", ")))
}

const ALL_RULES: [&str; 9] = ["K", "K1", "S", "S1", "C", "C1", "KI", "Inc", "Read"];

#[test]
fn compile_writes_checksummed_image() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "echo.lazy", "i");
    let entries = write_entries(&dir, &ALL_RULES);
    lazyk()
        .args(["compile", "--entries", arg(&entries), arg(&prog)])
        .assert()
        .success();
    assert!(!dir.path().join("echo.lazy.binary").exists());
    let image = std::fs::read(dir.path().join("echo.binary")).unwrap();
    let sum = image.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    assert_eq!(sum, 0x14);
    assert_eq!(image.len() % 4, 1);
}

#[test]
fn compile_output_replaces_only_the_last_extension() {
    let dir = TempDir::new().unwrap();
    let entries = write_entries(&dir, &ALL_RULES);
    let dotted = write_program(&dir, "echo.v2.lazy", "i");
    let bare = write_program(&dir, "echo", "i");
    for prog in [&dotted, &bare] {
        lazyk()
            .args(["compile", "--entries", arg(&entries), arg(prog)])
            .assert()
            .success();
    }
    assert!(dir.path().join("echo.v2.binary").exists());
    assert!(dir.path().join("echo.binary").exists());
}

#[test]
fn compile_with_runtime_and_output_path() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "echo.lazy", "i");
    let entries = write_entries(&dir, &ALL_RULES);
    let blob = dir.path().join("rt.bin");
    std::fs::write(&blob, [0x55u8; 100]).unwrap();
    let out = dir.path().join("out.img");
    lazyk()
        .args([
            "compile",
            "--entries",
            arg(&entries),
            "--runtime",
            arg(&blob),
            "-o",
            arg(&out),
            arg(&prog),
        ])
        .assert()
        .success();
    let image = std::fs::read(&out).unwrap();
    assert!(image.len() > 8192);
    assert_eq!(&image[..100], &[0x55u8; 100][..]);
    assert!(image[100..8192].iter().all(|&b| b == 0));
}

#[test]
fn compile_rejects_bad_entry_tables() {
    let dir = TempDir::new().unwrap();
    let prog = write_program(&dir, "echo.lazy", "i");
    lazyk().args(["compile", arg(&prog)]).assert().code(2);

    let unknown = write_entries(&dir, &["K", "Frob"]);
    let assert = lazyk()
        .args(["compile", "--entries", arg(&unknown), arg(&prog)])
        .assert()
        .code(2);
    assert!(stderr_of(&assert).contains("Unknown primitive in entry table: Frob"));

    let partial = write_entries(&dir, &ALL_RULES[..8]);
    let assert = lazyk()
        .args(["compile", "--entries", arg(&partial), arg(&prog)])
        .assert()
        .code(70);
    assert!(stderr_of(&assert).contains("no entry point for primitive Read"));
}
