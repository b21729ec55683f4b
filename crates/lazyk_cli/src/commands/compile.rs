use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lazyk_driver::Driver;
use lazyk_runtime::{Capabilities, EntryTable, ImageLayout, Rule, Runtime, SliceSource};

use crate::args::CliArgs;
use crate::commands::common::{fatal, input_path, parse_or_exit, runtime_config};

fn read_entries(path: &str) -> Result<EntryTable, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read entry table {path}: {e}"))?;
    let raw: BTreeMap<String, u32> =
        serde_json::from_str(&text).map_err(|e| format!("Invalid entry table {path}: {e}"))?;
    raw.into_iter()
        .map(|(name, addr)| {
            Rule::from_name(&name)
                .map(|rule| (rule, addr))
                .ok_or_else(|| format!("Unknown primitive in entry table: {name}"))
        })
        .collect()
}

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let path = input_path(args).to_string();
    let Some(entries_path) = args.entries.as_deref() else {
        eprintln!("compile requires --entries FILE");
        std::process::exit(2);
    };
    let entries = match read_entries(entries_path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let blob = match args.runtime.as_deref().map(std::fs::read).transpose() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to read runtime: {e}");
            std::process::exit(2);
        }
    };

    let (parsed, _) = parse_or_exit(args, driver);
    let caps = Capabilities::new(SliceSource::new(Vec::new()), std::io::sink());
    let mut rt = Runtime::with_capabilities(runtime_config(args), caps);
    if let Err(e) = rt.load(&parsed.program) {
        fatal(e);
    }
    let image = match rt.encode_image(&ImageLayout::default(), &entries, blob.as_deref()) {
        Ok(v) => v,
        Err(e) => fatal(e),
    };

    let out_path = args
        .output
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&path).with_extension("binary"));
    if let Err(e) = std::fs::write(&out_path, &image.bytes) {
        eprintln!("Failed to write {}: {e}", out_path.display());
        std::process::exit(2);
    }
    println!(
        "{}: {} cells, {} bytes",
        out_path.display(),
        image.cells,
        image.bytes.len()
    );
}
