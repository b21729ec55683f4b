//! Source file to [`lazyk_ir::Program`]: normalize, lex, parse.
mod frontend;

pub use frontend::{Driver, LexedFile, ParsedFile, Timings, has_errors};
