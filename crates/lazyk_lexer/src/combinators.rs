use lazyk_syntax::TokenKind;

/// Single-character terms. Letters are case-insensitive.
pub(crate) static COMBINATORS: phf::Map<char, TokenKind> = phf::phf_map! {
    'k' => TokenKind::K,
    'K' => TokenKind::K,
    's' => TokenKind::S,
    'S' => TokenKind::S,
    'i' => TokenKind::I,
    'I' => TokenKind::I,
    'c' => TokenKind::C,
    'C' => TokenKind::C,
    '+' => TokenKind::Inc,
    '`' => TokenKind::Backtick,
};
