//! Literal substitution for common Church-numeral encodings.
//!
//! Patterns are compared on significant tokens with `(` folded into `` ` ``
//! and `)` skipped, so layout, comments and CC-style parentheses in the
//! source do not prevent a match.
use std::sync::OnceLock;

use lazyk_lexer::Lexer;
use lazyk_syntax::{Token, TokenKind, parse_numeral};

/// Encoding and the numeral literal that replaces it, tried in order.
pub const NUMERAL_PATTERNS: &[(&str, &str)] = &[
    ("``s`k``s``s`kski``s``s`ksk```sii``s``s`kski", "[10]"),
    ("```s``s`ksk``s``s`kski``s``s`kski", "[8]"),
    ("```sii```sii``s``s`kski", "[256]"),
    ("```s`s``s`ksk``sii``s``s`kski", "[64]"),
    ("``s``s`ksk```sii``s``s`kski", "[$05]"),
    ("```sii``s``s`kski", "[$04]"),
    ("``s``s`ksk``s``s`kski", "[$03]"),
    ("``s``s`kski", "[$02]"),
];

struct Pattern {
    kinds: Vec<TokenKind>,
    value: u32,
}

fn patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        NUMERAL_PATTERNS
            .iter()
            .filter_map(|(orig, replace)| {
                let kinds = Lexer::new(orig)
                    .lex()
                    .tokens
                    .iter()
                    .map(|t| t.kind.canonical())
                    .filter(|k| *k != TokenKind::Eof)
                    .collect();
                let value = parse_numeral(replace).ok()?;
                Some(Pattern { kinds, value })
            })
            .collect()
    })
}

/// Try every pattern at `start`. On a match returns the numeral and the index
/// of the last token consumed.
pub(crate) fn match_numeral(tokens: &[Token], start: usize) -> Option<(u32, usize)> {
    'patterns: for pattern in patterns() {
        let mut i = start;
        let mut last = start;
        for &want in &pattern.kinds {
            while tokens.get(i).is_some_and(|t| t.kind == TokenKind::RParen) {
                i += 1;
            }
            match tokens.get(i) {
                Some(t) if t.kind.canonical() == want => {
                    last = i;
                    i += 1;
                }
                _ => continue 'patterns,
            }
        }
        return Some((pattern.value, last));
    }
    None
}
