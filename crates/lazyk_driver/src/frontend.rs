use std::fs;
use std::time::Instant;

use lazyk_ir::Program;
use lazyk_lexer::{Lexer, normalize_source};
use lazyk_parser::Parser;
use lazyk_syntax::{Diagnostic, SourceFile, SourceId, Token};

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

/// Front end shared by every CLI command.
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver {
    pub optimize: bool,
}

pub struct LexedFile {
    pub path: String,
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ParsedFile {
    pub path: String,
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Timings {
    pub normalize_us: u128,
    pub lex_us: u128,
    pub parse_us: u128,
}

fn read_source(path: &str) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
    // Programs are ASCII; stray bytes surface as invalid characters.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn lex_file(&self, path: &str) -> Result<LexedFile, String> {
        let input = read_source(path)?;
        Ok(self.lex_text(path, &input))
    }

    pub fn lex_text(&self, path: &str, input: &str) -> LexedFile {
        let normalized = normalize_source(input);
        let source = SourceFile::new(SourceId(0), path, normalized.text);
        let lex = Lexer::new(source.text.as_str()).lex();
        let mut diagnostics = normalized.diagnostics;
        diagnostics.extend(lex.diagnostics);
        LexedFile {
            path: path.to_string(),
            source,
            tokens: lex.tokens,
            diagnostics,
        }
    }

    pub fn parse_file(&self, path: &str) -> Result<ParsedFile, String> {
        let input = read_source(path)?;
        Ok(self.parse_text(path, &input))
    }

    pub fn parse_file_timed(&self, path: &str) -> Result<(ParsedFile, Timings), String> {
        let input = read_source(path)?;
        Ok(self.parse_text_timed(path, &input))
    }

    pub fn parse_text(&self, path: &str, input: &str) -> ParsedFile {
        self.parse_text_timed(path, input).0
    }

    pub fn parse_text_timed(&self, path: &str, input: &str) -> (ParsedFile, Timings) {
        let t1 = Instant::now();
        let normalized = normalize_source(input);
        let t2 = Instant::now();
        let source = SourceFile::new(SourceId(0), path, normalized.text);
        let lex = Lexer::new(source.text.as_str()).lex();
        let t3 = Instant::now();
        let bump = bumpalo::Bump::new();
        let parse = Parser::new(source.text.as_str(), &lex.tokens, &bump)
            .with_optimize(self.optimize)
            .parse();
        let t4 = Instant::now();

        let mut diagnostics = normalized.diagnostics;
        diagnostics.extend(lex.diagnostics);
        diagnostics.extend(parse.diagnostics);

        let parsed = ParsedFile {
            path: path.to_string(),
            source,
            tokens: lex.tokens,
            program: parse.program,
            diagnostics,
        };
        let timings = Timings {
            normalize_us: (t2 - t1).as_micros(),
            lex_us: (t3 - t2).as_micros(),
            parse_us: (t4 - t3).as_micros(),
        };
        (parsed, timings)
    }
}
