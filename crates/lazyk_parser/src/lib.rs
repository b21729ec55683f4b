//! lazyk_parser: token stream to [`Program`].
//!
//! Entry point: `Parser::new(input, tokens, &bump).parse()`.
mod optimize;
mod parser;

pub use lazyk_ir::*;
pub use optimize::NUMERAL_PATTERNS;
pub use parser::{ParseResult, Parser};
