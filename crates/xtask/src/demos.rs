//! Runs the programs under `demos/` through the CLI and compares the results
//! with `demos/manifest.json`.
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::process::{format_output, run_owned};

const DEMO_DIR: &str = "demos";

#[derive(Clone, Debug, Deserialize)]
struct DemoManifest {
    #[serde(default = "default_invalid_substring")]
    invalid_filename_substring: String,
    #[serde(default)]
    demos: Vec<Demo>,
}

#[derive(Clone, Debug, Deserialize)]
struct Demo {
    file: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    stdin: String,
    /// Unchecked when absent.
    #[serde(default)]
    stdout: Option<String>,
    #[serde(default)]
    exit_code: i32,
}

fn default_invalid_substring() -> String {
    "error".into()
}

impl Default for DemoManifest {
    fn default() -> Self {
        Self {
            invalid_filename_substring: default_invalid_substring(),
            demos: Vec::new(),
        }
    }
}

fn load_manifest() -> Result<DemoManifest, String> {
    let path = PathBuf::from(DEMO_DIR).join("manifest.json");
    let input = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(DemoManifest::default()),
        Err(e) => return Err(format!("Failed to read {}: {e}", path.display())),
    };
    serde_json::from_str(&input).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn list_demos(manifest: &DemoManifest) -> Result<(Vec<PathBuf>, Vec<PathBuf>), String> {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    let entries =
        fs::read_dir(DEMO_DIR).map_err(|e| format!("Failed to read {DEMO_DIR} dir: {e}"))?;
    for e in entries {
        let e = e.map_err(|e| format!("Failed to read {DEMO_DIR} entry: {e}"))?;
        let path = e.path();
        if path.extension() != Some(OsStr::new("lazy")) {
            continue;
        }
        let base = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if base.contains(manifest.invalid_filename_substring.as_str()) {
            invalid.push(path);
        } else {
            valid.push(path);
        }
    }
    valid.sort();
    invalid.sort();
    Ok((valid, invalid))
}

fn lazyk_args(subcmd: &str, extra: &[String], file: &Path) -> Vec<String> {
    let mut args: Vec<String> = ["run", "-q", "-p", "lazyk_cli", "--bin", "lazyk", "--", subcmd]
        .into_iter()
        .map(String::from)
        .collect();
    args.extend(extra.iter().cloned());
    args.push(file.display().to_string());
    args
}

fn check(path: &Path, expect_ok: bool) -> Result<(), String> {
    let output = run_owned("cargo", &lazyk_args("check", &[], path), None)?;
    match (output.status.success(), expect_ok) {
        (true, false) => Err(format!("unexpected check success: {}", path.display())),
        (false, true) => Err(format!(
            "lazyk check failed for {}:\n{}",
            path.display(),
            format_output(&output)
        )),
        _ => Ok(()),
    }
}

fn run_demo(demo: &Demo) -> Result<(), String> {
    let path = PathBuf::from(DEMO_DIR).join(&demo.file);
    let output = run_owned(
        "cargo",
        &lazyk_args("run", &demo.args, &path),
        Some(demo.stdin.as_bytes()),
    )?;
    if output.status.code() != Some(demo.exit_code) {
        return Err(format!(
            "{}: expected exit code {}, got {:?}\n{}",
            demo.file,
            demo.exit_code,
            output.status.code(),
            format_output(&output)
        ));
    }
    if let Some(expected) = &demo.stdout {
        if output.stdout != expected.as_bytes() {
            return Err(format!(
                "{}: expected stdout {:?}, got {:?}",
                demo.file,
                expected,
                String::from_utf8_lossy(&output.stdout)
            ));
        }
    }
    Ok(())
}

pub fn verify_demos() -> Result<(), String> {
    let manifest = load_manifest()?;
    let (valid, invalid) = list_demos(&manifest)?;
    for f in &valid {
        check(f, true)?;
    }
    for f in &invalid {
        check(f, false)?;
    }
    for demo in &manifest.demos {
        run_demo(demo)?;
    }
    eprintln!(
        "demos ok: {} checked, {} rejected, {} run",
        valid.len(),
        invalid.len(),
        manifest.demos.len()
    );
    Ok(())
}
