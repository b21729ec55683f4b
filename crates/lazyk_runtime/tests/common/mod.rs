#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use lazyk_lexer::{Lexer, normalize_source};
use lazyk_parser::{Parser, Program};
use lazyk_runtime::{
    Capabilities, Cell, CellRef, RunOutcome, Runtime, RuntimeConfig, SliceSource,
};

/// Output sink whose contents stay readable after the runtime owns it.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn parse_program(src: &str, optimize: bool) -> Program {
    let normalized = normalize_source(src);
    let lex = Lexer::new(&normalized.text).lex();
    assert!(lex.diagnostics.is_empty(), "lex diagnostics: {:?}", lex.diagnostics);
    let bump = bumpalo::Bump::new();
    let parse = Parser::new(&normalized.text, &lex.tokens, &bump)
        .with_optimize(optimize)
        .parse();
    assert!(
        parse.diagnostics.is_empty(),
        "parse diagnostics: {:?}",
        parse.diagnostics
    );
    parse.program
}

pub fn runtime(config: RuntimeConfig, input: &[u8]) -> (Runtime, SharedBuf) {
    let out = SharedBuf::default();
    let caps = Capabilities::new(SliceSource::new(input), out.clone());
    (Runtime::with_capabilities(config, caps), out)
}

pub fn run_with(config: RuntimeConfig, src: &str, input: &[u8]) -> (RunOutcome, Vec<u8>) {
    let program = parse_program(src, false);
    let (mut rt, out) = runtime(config, input);
    rt.load(&program).unwrap();
    let outcome = rt.run().unwrap();
    (outcome, out.contents())
}

pub fn run_source(src: &str, input: &[u8]) -> (RunOutcome, Vec<u8>) {
    run_with(RuntimeConfig::default(), src, input)
}

/// Load `src` and return the cell of the program term itself, without the
/// input list applied. It stays reachable through the program root.
pub fn load_term(rt: &mut Runtime, src: &str) -> CellRef {
    let top = rt.load(&parse_program(src, false)).unwrap();
    match rt.cell(top) {
        Cell::Apply(term, _) => term,
        other => panic!("loaded root is {other:?}"),
    }
}

pub fn small_config(cells: usize) -> RuntimeConfig {
    RuntimeConfig {
        heap_cells: cells,
        ..RuntimeConfig::default()
    }
}
