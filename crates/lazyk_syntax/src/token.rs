//! Token definitions.
//!
//! The combinator language has no identifiers or keywords: every significant
//! character is its own token, except numerals which span several bytes.
use crate::Span;

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `` ` `` application marker.
    Backtick,
    /// `(` which applies like a backtick.
    LParen,
    /// `)` which the parser skips.
    RParen,
    /// `k` / `K`
    K,
    /// `s` / `S`
    S,
    /// `i` / `I`
    I,
    /// `c` / `C`
    C,
    /// `+`
    Inc,
    /// `[n]`, `[$hex]` or bare decimal digits.
    Num,
    /// End of file.
    Eof,
}

impl TokenKind {
    /// Kind as seen by application parsing, with `(` folded into `` ` ``.
    pub fn canonical(self) -> TokenKind {
        match self {
            TokenKind::LParen => TokenKind::Backtick,
            other => other,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Backtick => "`",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::K => "k",
            TokenKind::S => "s",
            TokenKind::I => "i",
            TokenKind::C => "c",
            TokenKind::Inc => "+",
            TokenKind::Num => "numeral",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Span in normalized source text.
    pub span: Span,
}
