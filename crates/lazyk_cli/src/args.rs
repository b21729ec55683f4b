pub(crate) struct CliArgs {
    pub cmd: String,
    pub optimize: bool,
    pub host: bool,
    pub cells: Option<usize>,
    pub roots: Option<usize>,
    pub stats: bool,
    pub timing: bool,
    pub json_out: bool,
    pub entries: Option<String>,
    pub runtime: Option<String>,
    pub output: Option<String>,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: lazyk <tokens|check|ast|run|compile> [--optimize] [--host] [--cells N] [--roots N] \
     [--stats] [--timing] [--json] [--entries FILE] [--runtime FILE] [-o FILE] <file>"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    parse_from(std::env::args().skip(1).collect())
}

fn value(argv: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    argv.get(*i)
        .cloned()
        .ok_or_else(|| format!("Missing value for {flag}"))
}

fn count(argv: &[String], i: &mut usize, flag: &str) -> Result<usize, String> {
    let raw = value(argv, i, flag)?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Invalid value for {flag}: {raw}")),
    }
}

pub(crate) fn parse_from(mut argv: Vec<String>) -> Result<CliArgs, String> {
    if argv.is_empty() {
        return Err(usage().to_string());
    }
    let cmd = argv.remove(0);

    let mut args = CliArgs {
        cmd,
        optimize: false,
        host: false,
        cells: None,
        roots: None,
        stats: false,
        timing: false,
        json_out: false,
        entries: None,
        runtime: None,
        output: None,
        positional: Vec::new(),
    };

    let mut i = 0;
    while i < argv.len() {
        let a = argv[i].as_str();
        match a {
            "--optimize" => args.optimize = true,
            "--host" => args.host = true,
            "--stats" => args.stats = true,
            "--timing" => args.timing = true,
            "--json" => args.json_out = true,
            "--cells" => args.cells = Some(count(&argv, &mut i, a)?),
            "--roots" => args.roots = Some(count(&argv, &mut i, a)?),
            "--entries" => args.entries = Some(value(&argv, &mut i, a)?),
            "--runtime" => args.runtime = Some(value(&argv, &mut i, a)?),
            "-o" | "--output" => args.output = Some(value(&argv, &mut i, a)?),
            _ if a.starts_with('-') && a != "-" => return Err(format!("Unknown option: {a}")),
            _ => args.positional.push(a.to_string()),
        }
        i += 1;
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::parse_from;

    fn argv(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn flags_and_values() {
        let args = parse_from(argv("run --optimize --cells 100 prog.lazy --stats")).unwrap();
        assert_eq!(args.cmd, "run");
        assert!(args.optimize && args.stats && !args.host);
        assert_eq!(args.cells, Some(100));
        assert_eq!(args.positional, vec!["prog.lazy"]);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse_from(argv("run --cells")).is_err());
        assert!(parse_from(argv("run --cells 0 a")).is_err());
        assert!(parse_from(argv("run --roots many a")).is_err());
        assert!(parse_from(argv("run --frobnicate a")).is_err());
        assert!(parse_from(Vec::new()).is_err());
    }
}
